//! Configuration structures for the catch simulation system.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Values above this are treated as totals and divided back by net weight.
pub const TOTALIZED_VALUE_THRESHOLD: f64 = 100.0;

/// Main configuration for the calculation pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Normalizer defaults.
    pub normalization: NormalizationConfig,
    /// Lever coefficients.
    pub simulation: SimulationConfig,
    /// Aggregation fallbacks.
    pub aggregation: AggregationConfig,
}

impl Config {
    /// Load a configuration from a JSON file.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject coefficient sets that would break the documented ranges.
    pub fn validate(&self) -> Result<()> {
        let n = &self.normalization;
        if !(n.totalized_threshold.is_finite() && n.totalized_threshold > 0.0) {
            return Err(Error::config("totalized_threshold must be positive"));
        }
        if !n.default_unit_price.is_finite() || n.default_unit_price < 0.0 {
            return Err(Error::config("default_unit_price must be non-negative"));
        }

        let s = &self.simulation;
        let coefficients = [
            ("recycling_waste_reduction", s.recycling_waste_reduction),
            ("recycling_cost_increase", s.recycling_cost_increase),
            ("processing_cost_reduction", s.processing_cost_reduction),
            ("processing_profit_increase", s.processing_profit_increase),
            ("processing_quality_penalty", s.processing_quality_penalty),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::config(format!("{name} must be a non-negative number")));
            }
        }

        if !self.aggregation.fallback_profit_ratio.is_finite() {
            return Err(Error::config("fallback_profit_ratio must be finite"));
        }
        Ok(())
    }
}

/// Defaults applied while normalizing raw records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    /// Unit price used when a record carries none.
    pub default_unit_price: f64,
    /// Profit per kg as a fraction of unit price when profit is absent.
    pub default_profit_ratio: f64,
    /// Above this, profit and final price are considered totals.
    pub totalized_threshold: f64,
    /// Homogeneity score used when absent.
    pub default_homogeneity: i32,
    /// Stress score used when absent.
    pub default_stress: i32,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            default_unit_price: 1.0,
            default_profit_ratio: 0.25,
            totalized_threshold: TOTALIZED_VALUE_THRESHOLD,
            default_homogeneity: 1,
            default_stress: 1,
        }
    }
}

/// Coefficients of the two simulation levers, applied at 100%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Absolute drop of the waste ratio at full recycling.
    pub recycling_waste_reduction: f64,
    /// Relative unit cost increase at full recycling.
    pub recycling_cost_increase: f64,
    /// Relative unit cost reduction at full processing.
    pub processing_cost_reduction: f64,
    /// Relative profit increase at full processing.
    pub processing_profit_increase: f64,
    /// Quality points lost at full processing.
    pub processing_quality_penalty: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            recycling_waste_reduction: 0.12,
            recycling_cost_increase: 0.10,
            processing_cost_reduction: 0.20,
            processing_profit_increase: 0.20,
            processing_quality_penalty: 1.0,
        }
    }
}

/// Aggregation fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Profit per kg as a fraction of unit cost when stored profit is zero.
    pub fallback_profit_ratio: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            fallback_profit_ratio: 0.25,
        }
    }
}
