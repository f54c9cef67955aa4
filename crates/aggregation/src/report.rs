//! All reductions of one record set.

use crate::cost::CostSummary;
use crate::delta::ScenarioSnapshot;
use crate::quality::QualityIndex;
use crate::quantity::QuantitySummary;
use catch_core::config::AggregationConfig;
use catch_core::CanonicalRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Quantity, cost and quality summaries plus the headline snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub quantity: QuantitySummary,
    pub cost: CostSummary,
    pub quality: QualityIndex,
    pub snapshot: ScenarioSnapshot,
}

impl AggregateReport {
    pub fn from_records(records: &[CanonicalRecord], config: &AggregationConfig) -> Self {
        let quantity = QuantitySummary::from_records(records);
        let cost = CostSummary::from_records(records, config.fallback_profit_ratio);
        let quality = QualityIndex::from_records(records);
        let snapshot = ScenarioSnapshot::from_summaries(&quantity, &cost, &quality);

        debug!(
            records = records.len(),
            categories = quantity.by_category.len(),
            ?snapshot,
            "aggregated record set"
        );

        Self {
            quantity,
            cost,
            quality,
            snapshot,
        }
    }
}
