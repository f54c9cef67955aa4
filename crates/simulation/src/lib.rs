//! What-if simulation for the catch simulation system.
//!
//! This crate provides:
//! - Lever simulation over canonical records
//! - Circularity indicators
//! - The end-to-end scenario runner

pub mod indicators;
pub mod scenario;
pub mod simulator;

pub use indicators::{Indicators, Tier};
pub use scenario::{ScenarioReport, ScenarioRunner};
pub use simulator::Simulator;
