//! Quality index per category.

use catch_core::{mean, round2, CanonicalRecord, Keyed};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label of the synthetic cross-category index.
pub const GLOBAL_KEY: &str = "global";

/// Mean quality per category and the mean of those means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityIndex {
    pub by_category: BTreeMap<String, f64>,
    pub global: f64,
}

impl QualityIndex {
    pub fn from_records(records: &[CanonicalRecord]) -> Self {
        let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for record in records {
            groups
                .entry(record.category_label().to_owned())
                .or_default()
                .push(record.quality);
        }

        let by_category: BTreeMap<String, f64> = groups
            .into_iter()
            .map(|(category, qualities)| (category, round2(mean(&qualities))))
            .collect();

        let means: Vec<f64> = by_category.values().copied().collect();
        let global = round2(mean(&means));

        Self { by_category, global }
    }

    /// Look up a category, or [`GLOBAL_KEY`] for the global index.
    pub fn get(&self, category: &str) -> Option<f64> {
        if category == GLOBAL_KEY {
            Some(self.global)
        } else {
            self.by_category.get(category).copied()
        }
    }
}
