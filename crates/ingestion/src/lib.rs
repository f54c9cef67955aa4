//! Data ingestion and normalization for the catch simulation system.
//!
//! This crate handles:
//! - Merging historical and manual samples by (date, category)
//! - Normalizing raw samples into canonical records
//! - Date range selection
//! - JSON persistence with boundary validation

pub mod filter;
pub mod merger;
pub mod normalizer;
pub mod store;

pub use filter::{filter_by_date, DateRange};
pub use merger::{dedup, merge, merge_with_stats, DuplicatePolicy, MergeStats};
pub use normalizer::Normalizer;
pub use store::{load_records, parse_records, save_records, to_json};
