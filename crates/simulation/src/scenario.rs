//! End-to-end computation pass.
//!
//! merge → date filter → normalize → simulate → aggregate both sets → delta.

use crate::indicators::Indicators;
use crate::simulator::Simulator;
use catch_aggregation::{
    daily_series, AggregateReport, DailyPoint, DailyTrend, DeltaLabel, DeltaReport,
};
use catch_core::{CanonicalRecord, Config, Levers, Result, SampleRecord};
use catch_ingestion::{filter_by_date, merge_with_stats, DateRange, MergeStats, Normalizer};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything produced by one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub levers: Levers,
    pub range: Option<DateRange>,
    pub merge: MergeStats,
    /// Canonical records inside the range.
    pub baseline: Vec<CanonicalRecord>,
    /// Baseline with the levers applied.
    pub simulated: Vec<CanonicalRecord>,
    pub baseline_summary: AggregateReport,
    pub simulated_summary: AggregateReport,
    pub delta: DeltaReport,
    pub indicators: Indicators,
    /// Simulated daily rollups over the range, empty without a range.
    pub daily: Vec<DailyPoint>,
    /// `daily` min-max normalized for charting.
    pub trend: DailyTrend,
}

impl ScenarioReport {
    /// Display labels for the four headline changes.
    pub fn delta_labels(&self) -> [(&'static str, DeltaLabel); 4] {
        let b = &self.baseline_summary.snapshot;
        let s = &self.simulated_summary.snapshot;
        [
            ("waste", DeltaLabel::between(b.waste, s.waste)),
            ("cost", DeltaLabel::between(b.cost, s.cost)),
            ("profit", DeltaLabel::between(b.profit, s.profit)),
            ("quality", DeltaLabel::between(b.quality, s.quality)),
        ]
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Runs complete computation passes with one configuration.
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: Config,
    normalizer: Normalizer,
    simulator: Simulator,
}

impl ScenarioRunner {
    pub fn new(config: Config) -> Self {
        let normalizer = Normalizer::new(config.normalization.clone());
        let simulator = Simulator::new(config.simulation.clone());
        Self {
            config,
            normalizer,
            simulator,
        }
    }

    /// Run one pass over the two record sources.
    pub fn run(
        &self,
        historical: &[SampleRecord],
        manual: &[SampleRecord],
        range: Option<DateRange>,
        levers: Levers,
    ) -> ScenarioReport {
        let (merged, merge) = merge_with_stats(historical, manual);
        let selected = match &range {
            Some(range) => filter_by_date(&merged, range),
            None => merged,
        };

        let baseline = self.normalizer.normalize(&selected);
        let simulated = self.simulator.simulate(&baseline, levers);

        let baseline_summary = AggregateReport::from_records(&baseline, &self.config.aggregation);
        let simulated_summary = AggregateReport::from_records(&simulated, &self.config.aggregation);
        let delta = DeltaReport::between(&baseline_summary.snapshot, &simulated_summary.snapshot);

        let daily = range
            .as_ref()
            .map(|r| daily_series(&simulated, r))
            .unwrap_or_default();
        let trend = DailyTrend::from_series(&daily);

        info!(
            samples = baseline.len(),
            recycling = levers.recycling_pct,
            processing = levers.processing_pct,
            waste_pct = delta.waste_pct,
            cost_pct = delta.cost_pct,
            profit_pct = delta.profit_pct,
            quality_pct = delta.quality_pct,
            "scenario complete"
        );

        ScenarioReport {
            levers,
            range,
            merge,
            baseline,
            simulated,
            baseline_summary,
            simulated_summary,
            delta,
            indicators: Indicators::from_levers(levers),
            daily,
            trend,
        }
    }
}
