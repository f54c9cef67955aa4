//! Core data types for the catch simulation system.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category label used when a record carries none.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Weight in kilograms.
pub type Kg = f64;

/// Currency per kilogram.
pub type PerKg = f64;

/// Identity of a sample: same day, same category.
///
/// The zone is deliberately not part of the key, so a manual correction
/// replaces a historical sample wherever it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    pub date: NaiveDate,
    pub category: Option<String>,
}

/// Anything that can be merged, deduplicated or filtered by date.
pub trait Keyed {
    /// Calendar day of the sample.
    fn date(&self) -> NaiveDate;

    /// Category label as stored, if any.
    fn category(&self) -> Option<&str>;

    /// Merge identity.
    fn key(&self) -> RecordKey {
        RecordKey {
            date: self.date(),
            category: self.category().map(str::to_owned),
        }
    }

    /// Category label for grouping, `"Other"` when absent.
    fn category_label(&self) -> &str {
        self.category().unwrap_or(DEFAULT_CATEGORY)
    }
}

/// Production origin of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Wild,
    Farmed,
}

/// A raw sample as produced by the historical generator or manual entry.
///
/// Every numeric field is optional; defaults are applied by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Day of the catch.
    pub date: NaiveDate,
    /// Species name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Fishing zone (map display only, not part of the identity).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_weight: Option<Kg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_weight: Option<Kg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waste_weight: Option<Kg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<PerKg>,
    /// 1 (homogeneous) to 3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homogeneity: Option<i32>,
    /// 0 (calm) to 3 (highly stressed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
    /// Profit per kg, or a total if above the totalized threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit: Option<f64>,
    /// Final price per kg, or a total if above the totalized threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<PerKg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    /// Daily weather index in `[0.3, 1.0]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_index: Option<f64>,
}

impl SampleRecord {
    /// Create an empty sample for a day and category.
    pub fn new(date: NaiveDate, category: impl Into<String>) -> Self {
        Self {
            date,
            category: Some(category.into()),
            zone: None,
            gross_weight: None,
            net_weight: None,
            waste_weight: None,
            unit_price: None,
            homogeneity: None,
            stress: None,
            quality: None,
            profit: None,
            final_price: None,
            unit_cost: None,
            crop_age: None,
            origin: None,
            weather_index: None,
        }
    }

    /// Set net and waste weights (gross follows as their sum).
    pub fn with_weights(mut self, net: Kg, waste: Kg) -> Self {
        self.net_weight = Some(net);
        self.waste_weight = Some(waste);
        self.gross_weight = Some(net + waste);
        self
    }

    /// Set the unit price.
    pub fn with_unit_price(mut self, price: PerKg) -> Self {
        self.unit_price = Some(price);
        self
    }

    /// Set homogeneity and stress scores.
    pub fn with_scores(mut self, homogeneity: i32, stress: i32) -> Self {
        self.homogeneity = Some(homogeneity);
        self.stress = Some(stress);
        self
    }

    /// Set the zone.
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    /// Check the numeric fields that the calculation stages rely on.
    ///
    /// Weights and prices must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("gross_weight", self.gross_weight),
            ("net_weight", self.net_weight),
            ("waste_weight", self.waste_weight),
            ("unit_price", self.unit_price),
            ("unit_cost", self.unit_cost),
        ];
        for (field, value) in checks {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(Error::data(format!(
                        "{} {:?}: {} must be a non-negative number, got {}",
                        self.date,
                        self.category_label(),
                        field,
                        v
                    )));
                }
            }
        }
        for (field, value) in [
            ("quality", self.quality),
            ("profit", self.profit),
            ("final_price", self.final_price),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(Error::data(format!(
                        "{} {:?}: {} is not finite",
                        self.date,
                        self.category_label(),
                        field
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Keyed for SampleRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// A sample after normalization: every derived field populated and rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    /// Always `net_weight + waste_weight`.
    pub gross_weight: Kg,
    pub net_weight: Kg,
    pub waste_weight: Kg,
    pub unit_price: PerKg,
    pub homogeneity: i32,
    pub stress: i32,
    /// In `[0, 5]`.
    pub quality: f64,
    pub profit: PerKg,
    pub final_price: PerKg,
    pub unit_cost: PerKg,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_index: Option<f64>,
}

impl CanonicalRecord {
    /// Share of the gross weight that is waste, `0.0` for an empty sample.
    #[inline]
    pub fn waste_ratio(&self) -> f64 {
        if self.gross_weight > 0.0 {
            self.waste_weight / self.gross_weight
        } else {
            0.0
        }
    }
}

impl Keyed for CanonicalRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// The two policy levers of the what-if simulation, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Levers {
    /// Waste recycling, `0..=100`.
    pub recycling_pct: u8,
    /// Intensive processing, `0..=100`.
    pub processing_pct: u8,
}

impl Levers {
    /// Create levers, rejecting percentages above 100.
    pub fn new(recycling_pct: u32, processing_pct: u32) -> Result<Self> {
        let check = |name: &str, pct: u32| -> Result<u8> {
            if pct > 100 {
                return Err(Error::lever(format!("{name} must be within 0..=100, got {pct}")));
            }
            Ok(pct as u8)
        };
        Ok(Self {
            recycling_pct: check("recycling", recycling_pct)?,
            processing_pct: check("processing", processing_pct)?,
        })
    }

    /// Both levers at rest.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.recycling_pct == 0 && self.processing_pct == 0
    }

    /// Recycling as a fraction in `[0, 1]`.
    #[inline]
    pub fn recycling(&self) -> f64 {
        self.recycling_pct as f64 / 100.0
    }

    /// Processing as a fraction in `[0, 1]`.
    #[inline]
    pub fn processing(&self) -> f64 {
        self.processing_pct as f64 / 100.0
    }
}
