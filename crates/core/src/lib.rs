//! Core types and configuration for the catch simulation system.
//!
//! This crate provides shared types used across all other crates:
//! - Raw and canonical sample records, and their merge identity
//! - Simulation levers
//! - Configuration structures
//! - Common error types and rounding helpers

pub mod config;
pub mod error;
pub mod numeric;
pub mod types;

pub use config::{Config, TOTALIZED_VALUE_THRESHOLD};
pub use error::{Error, Result};
pub use numeric::{clamp_quality, mean, quality_from_scores, round2};
pub use types::*;
