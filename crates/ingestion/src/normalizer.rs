//! Normalization of raw samples into canonical records.
//!
//! Applies field defaults, recovers per-kg figures from accidentally
//! totalized values and rounds every derived float to 2 decimals.

use catch_core::config::NormalizationConfig;
use catch_core::{clamp_quality, quality_from_scores, round2, CanonicalRecord, Keyed, SampleRecord};
use tracing::{debug, warn};

/// Converts raw samples into canonical records.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizationConfig,
}

impl Normalizer {
    /// Create a normalizer with the given defaults.
    pub fn new(config: NormalizationConfig) -> Self {
        Self { config }
    }

    /// Normalize a collection, one output per input, order preserved.
    pub fn normalize(&self, records: &[SampleRecord]) -> Vec<CanonicalRecord> {
        let normalized: Vec<CanonicalRecord> =
            records.iter().map(|r| self.normalize_record(r)).collect();
        debug!(count = normalized.len(), "normalized sample records");
        normalized
    }

    /// Normalize a single sample.
    pub fn normalize_record(&self, record: &SampleRecord) -> CanonicalRecord {
        let cfg = &self.config;

        // Only an absent price falls back; zero is a valid price here.
        let unit_price = record.unit_price.unwrap_or(cfg.default_unit_price);
        let homogeneity = record.homogeneity.unwrap_or(cfg.default_homogeneity);
        let stress = record.stress.unwrap_or(cfg.default_stress);

        let net = record.net_weight.unwrap_or(0.0);
        let waste = record.waste_weight.unwrap_or(0.0);

        let quality = match record.quality {
            Some(q) => clamp_quality(round2(q)),
            None => quality_from_scores(homogeneity, stress, 0.0),
        };

        let profit = match record.profit {
            Some(p) => self.per_kg(p, net, record),
            None => unit_price * cfg.default_profit_ratio,
        };

        let final_price = match record.final_price {
            Some(p) => self.per_kg(p, net, record),
            None => 0.0,
        };

        CanonicalRecord {
            date: record.date,
            category: record.category.clone(),
            zone: record.zone.clone(),
            gross_weight: round2(net + waste),
            net_weight: round2(net),
            waste_weight: round2(waste),
            unit_price,
            homogeneity,
            stress,
            quality,
            profit: round2(profit),
            final_price: round2(final_price),
            unit_cost: round2(unit_price),
            crop_age: record.crop_age.clone(),
            origin: record.origin,
            weather_index: record.weather_index,
        }
    }

    /// Recover a per-kg value from a totalized one.
    fn per_kg(&self, value: f64, net: f64, record: &SampleRecord) -> f64 {
        if value <= self.config.totalized_threshold {
            return value;
        }
        if net > 0.0 {
            value / net
        } else {
            warn!(
                date = %record.date,
                category = record.category_label(),
                value,
                "totalized value on a sample without net weight, kept as is"
            );
            value
        }
    }
}
