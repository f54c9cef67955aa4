//! Daily rollups and the time series built from them.

use catch_core::{round2, CanonicalRecord, Keyed, Kg};
use catch_ingestion::DateRange;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rollup of an arbitrary set of records, typically one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyMetrics {
    /// Sum of gross weight.
    pub quantity: Kg,
    /// Mean unit price.
    pub mean_unit_price: f64,
    /// Mean quality.
    pub mean_quality: f64,
}

impl DailyMetrics {
    /// Compute the rollup; all zeros for an empty set.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a CanonicalRecord>) -> Self {
        let mut quantity = 0.0;
        let mut price_sum = 0.0;
        let mut quality_sum = 0.0;
        let mut count = 0usize;

        for record in records {
            quantity += record.gross_weight;
            price_sum += record.unit_price;
            quality_sum += record.quality;
            count += 1;
        }

        if count == 0 {
            return Self::default();
        }

        let n = count as f64;
        Self {
            quantity: round2(quantity),
            mean_unit_price: round2(price_sum / n),
            mean_quality: round2(quality_sum / n),
        }
    }
}

/// One point of a daily series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub metrics: DailyMetrics,
}

/// One point per day of `range`; days without samples get zero metrics.
pub fn daily_series(records: &[CanonicalRecord], range: &DateRange) -> Vec<DailyPoint> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&CanonicalRecord>> = BTreeMap::new();
    for record in records.iter().filter(|r| range.contains(r.date())) {
        by_day.entry(record.date()).or_default().push(record);
    }

    range
        .days()
        .map(|date| {
            let metrics = by_day
                .get(&date)
                .map(|day| DailyMetrics::from_records(day.iter().copied()))
                .unwrap_or_default();
            DailyPoint { date, metrics }
        })
        .collect()
}

/// A daily series with each metric min-max normalized on its own scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTrend {
    pub quantity: Vec<f64>,
    pub mean_unit_price: Vec<f64>,
    pub mean_quality: Vec<f64>,
}

impl DailyTrend {
    pub fn from_series(series: &[DailyPoint]) -> Self {
        let column = |f: fn(&DailyMetrics) -> f64| -> Vec<f64> {
            let values: Vec<f64> = series.iter().map(|p| f(&p.metrics)).collect();
            normalize_series(&values)
        };
        Self {
            quantity: column(|m| m.quantity),
            mean_unit_price: column(|m| m.mean_unit_price),
            mean_quality: column(|m| m.mean_quality),
        }
    }
}

/// Min-max normalize a series into `[0, 1]`.
///
/// A flat or empty series maps to zeros.
pub fn normalize_series(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max > min {
        values.iter().map(|v| (v - min) / (max - min)).collect()
    } else {
        vec![0.0; values.len()]
    }
}
