//! Percentage changes between baseline and simulated aggregates.

use crate::cost::CostSummary;
use crate::quality::QualityIndex;
use crate::quantity::QuantitySummary;
use catch_core::round2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percent change from `orig` to `sim`, rounded to 2 decimals.
///
/// A zero baseline yields `0.0` whatever `sim` is.
#[inline]
pub fn percent_change(orig: f64, sim: f64) -> f64 {
    if orig == 0.0 {
        return 0.0;
    }
    round2((sim - orig) / orig * 100.0)
}

/// The four headline figures compared between scenarios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSnapshot {
    /// Total waste weight.
    pub waste: f64,
    /// Average unit cost (mean of category means).
    pub cost: f64,
    /// Average profit (mean of category means).
    pub profit: f64,
    /// Global quality index.
    pub quality: f64,
}

impl ScenarioSnapshot {
    pub fn from_summaries(
        quantity: &QuantitySummary,
        cost: &CostSummary,
        quality: &QualityIndex,
    ) -> Self {
        Self {
            waste: quantity.total.waste,
            cost: cost.average.unit_cost,
            profit: cost.average.profit,
            quality: quality.global,
        }
    }
}

/// Percentage changes of each snapshot figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaReport {
    pub waste_pct: f64,
    pub cost_pct: f64,
    pub profit_pct: f64,
    pub quality_pct: f64,
}

impl DeltaReport {
    pub fn between(baseline: &ScenarioSnapshot, simulated: &ScenarioSnapshot) -> Self {
        Self {
            waste_pct: percent_change(baseline.waste, simulated.waste),
            cost_pct: percent_change(baseline.cost, simulated.cost),
            profit_pct: percent_change(baseline.profit, simulated.profit),
            quality_pct: percent_change(baseline.quality, simulated.quality),
        }
    }
}

/// Human-facing rendering of a change.
///
/// Unlike [`percent_change`], a change from a zero baseline is shown as
/// unbounded rather than hidden.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DeltaLabel {
    /// Both values are zero.
    Unchanged,
    /// Zero baseline, non-zero result.
    Unbounded,
    /// Percent change; magnitudes below 0.01 collapse to 0.
    Percent(f64),
}

impl DeltaLabel {
    pub fn between(orig: f64, sim: f64) -> Self {
        if orig == 0.0 {
            return if sim == 0.0 {
                DeltaLabel::Unchanged
            } else {
                DeltaLabel::Unbounded
            };
        }
        let pct = (sim - orig) / orig * 100.0;
        if pct.abs() < 0.01 {
            DeltaLabel::Percent(0.0)
        } else {
            DeltaLabel::Percent(round2(pct))
        }
    }
}

impl fmt::Display for DeltaLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeltaLabel::Unchanged => write!(f, "0%"),
            DeltaLabel::Unbounded => write!(f, "∞"),
            DeltaLabel::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}
