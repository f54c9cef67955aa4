//! Average cost, profit and final price per category.

use catch_core::{CanonicalRecord, Keyed, PerKg};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label of the synthetic cross-category average row.
pub const AVERAGE_KEY: &str = "Average";

/// Mean per-kg figures over a group of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostAverages {
    pub unit_cost: PerKg,
    pub profit: PerKg,
    /// `unit_cost + profit`.
    pub final_price: PerKg,
    /// Records (per category) or categories (average row).
    pub count: usize,
}

/// Per-category cost averages plus their unweighted mean.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    pub by_category: BTreeMap<String, CostAverages>,
    /// Mean of the category means, not weighted by record count.
    pub average: CostAverages,
}

impl CostSummary {
    /// Average costs per category.
    ///
    /// A stored profit of exactly zero is replaced by
    /// `unit_cost * fallback_profit_ratio`.
    pub fn from_records(records: &[CanonicalRecord], fallback_profit_ratio: f64) -> Self {
        let mut sums: BTreeMap<String, CostAverages> = BTreeMap::new();
        for record in records {
            let unit_cost = record.unit_cost;
            let profit = if record.profit == 0.0 {
                unit_cost * fallback_profit_ratio
            } else {
                record.profit
            };

            let entry = sums.entry(record.category_label().to_owned()).or_default();
            entry.unit_cost += unit_cost;
            entry.profit += profit;
            entry.final_price += unit_cost + profit;
            entry.count += 1;
        }

        let by_category: BTreeMap<String, CostAverages> = sums
            .into_iter()
            .map(|(category, sum)| {
                let n = sum.count as f64;
                let avg = CostAverages {
                    unit_cost: sum.unit_cost / n,
                    profit: sum.profit / n,
                    final_price: sum.final_price / n,
                    count: sum.count,
                };
                (category, avg)
            })
            .collect();

        let average = if by_category.is_empty() {
            CostAverages::default()
        } else {
            let n = by_category.len() as f64;
            CostAverages {
                unit_cost: by_category.values().map(|c| c.unit_cost).sum::<f64>() / n,
                profit: by_category.values().map(|c| c.profit).sum::<f64>() / n,
                final_price: by_category.values().map(|c| c.final_price).sum::<f64>() / n,
                count: by_category.len(),
            }
        };

        Self { by_category, average }
    }

    /// Look up a category, or [`AVERAGE_KEY`] for the average row.
    pub fn get(&self, category: &str) -> Option<&CostAverages> {
        if category == AVERAGE_KEY {
            Some(&self.average)
        } else {
            self.by_category.get(category)
        }
    }
}
