//! Aggregation of record sets for the catch simulation system.
//!
//! This crate handles:
//! - Net/waste quantity per category
//! - Cost, profit and final price averages per category
//! - Quality index per category
//! - Daily rollups and time series
//! - Percentage deltas between two scenarios

pub mod cost;
pub mod daily;
pub mod delta;
pub mod quality;
pub mod quantity;
pub mod report;

pub use cost::{CostAverages, CostSummary, AVERAGE_KEY};
pub use daily::{daily_series, normalize_series, DailyMetrics, DailyPoint, DailyTrend};
pub use delta::{percent_change, DeltaLabel, DeltaReport, ScenarioSnapshot};
pub use quality::{QualityIndex, GLOBAL_KEY};
pub use quantity::{QuantitySummary, QuantityTotals, TOTAL_KEY};
pub use report::AggregateReport;
