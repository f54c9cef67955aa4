//! Net and waste weight per category.

use catch_core::{CanonicalRecord, Keyed, Kg};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label of the synthetic all-categories row.
pub const TOTAL_KEY: &str = "Total";

/// Summed weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantityTotals {
    pub net: Kg,
    pub waste: Kg,
}

impl QuantityTotals {
    #[inline]
    pub fn gross(&self) -> Kg {
        self.net + self.waste
    }
}

/// Per-category weights plus the grand total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantitySummary {
    pub by_category: BTreeMap<String, QuantityTotals>,
    pub total: QuantityTotals,
}

impl QuantitySummary {
    /// Sum net and waste weight per category.
    pub fn from_records(records: &[CanonicalRecord]) -> Self {
        let mut by_category: BTreeMap<String, QuantityTotals> = BTreeMap::new();
        for record in records {
            let entry = by_category
                .entry(record.category_label().to_owned())
                .or_default();
            entry.net += record.net_weight;
            entry.waste += record.waste_weight;
        }

        let total = by_category
            .values()
            .fold(QuantityTotals::default(), |acc, t| QuantityTotals {
                net: acc.net + t.net,
                waste: acc.waste + t.waste,
            });

        Self { by_category, total }
    }

    /// Look up a category, or [`TOTAL_KEY`] for the grand total.
    pub fn get(&self, category: &str) -> Option<&QuantityTotals> {
        if category == TOTAL_KEY {
            Some(&self.total)
        } else {
            self.by_category.get(category)
        }
    }

    /// Category rows followed by the total row.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &QuantityTotals)> {
        self.by_category
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .chain(std::iter::once((TOTAL_KEY, &self.total)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use catch_core::SampleRecord;
    use catch_ingestion::Normalizer;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn records(items: &[(&str, f64, f64)]) -> Vec<CanonicalRecord> {
        let raw: Vec<SampleRecord> = items
            .iter()
            .enumerate()
            .map(|(i, (c, net, waste))| {
                SampleRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32).unwrap(), *c)
                    .with_weights(*net, *waste)
            })
            .collect();
        Normalizer::default().normalize(&raw)
    }

    #[test]
    fn test_per_category_and_total() {
        let summary = QuantitySummary::from_records(&records(&[
            ("Sardina", 700.0, 300.0),
            ("Acciuga", 650.0, 320.0),
            ("Sardina", 710.0, 290.0),
        ]));

        let sardina = summary.get("Sardina").unwrap();
        assert_abs_diff_eq!(sardina.net, 1410.0);
        assert_abs_diff_eq!(sardina.waste, 590.0);

        let total = summary.get(TOTAL_KEY).unwrap();
        assert_abs_diff_eq!(total.net, 2060.0);
        assert_abs_diff_eq!(total.waste, 910.0);

        let labels: Vec<&str> = summary.rows().map(|(k, _)| k).collect();
        assert_eq!(labels, vec!["Acciuga", "Sardina", TOTAL_KEY]);
    }

    #[test]
    fn test_missing_category_grouped_as_other() {
        let mut recs = records(&[("Sardina", 10.0, 1.0)]);
        recs[0].category = None;
        let summary = QuantitySummary::from_records(&recs);
        assert!(summary.get("Other").is_some());
    }

    #[test]
    fn test_empty() {
        let summary = QuantitySummary::from_records(&[]);
        assert!(summary.by_category.is_empty());
        assert_eq!(summary.total, QuantityTotals::default());
    }

    proptest! {
        #[test]
        fn total_matches_categories(
            items in prop::collection::vec(
                (
                    prop::sample::select(vec!["Sardina", "Acciuga", "Tonno rosso"]),
                    0.0f64..2000.0,
                    0.0f64..800.0,
                ),
                0..25,
            )
        ) {
            let summary = QuantitySummary::from_records(&records(&items));
            let sum: f64 = summary.by_category.values().map(QuantityTotals::gross).sum();
            prop_assert!((summary.total.gross() - sum).abs() <= 0.01);
        }
    }
}
