//! Merging of historical and manual samples.
//!
//! Records are identified by [`RecordKey`] (day + category). Historical
//! duplicates keep the first occurrence; manual entries override anything
//! with the same key.

use catch_core::{Keyed, RecordKey};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// How to resolve two records sharing a key within one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Later duplicates are dropped.
    KeepFirst,
    /// Later duplicates replace the stored value in place.
    KeepLast,
}

/// Counters from a merge pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStats {
    /// Historical records dropped as duplicates.
    pub historical_duplicates: usize,
    /// Manual records superseded by a later manual record.
    pub manual_duplicates: usize,
    /// Historical records replaced by a manual one.
    pub overridden: usize,
    /// Size of the merged collection.
    pub merged: usize,
}

/// Remove records sharing a key.
///
/// A key keeps the position of its first occurrence; the value depends on
/// `policy`.
pub fn dedup<T: Keyed + Clone>(records: &[T], policy: DuplicatePolicy) -> Vec<T> {
    dedup_counted(records, policy).0
}

fn dedup_counted<T: Keyed + Clone>(records: &[T], policy: DuplicatePolicy) -> (Vec<T>, usize) {
    let mut index: HashMap<RecordKey, usize> = HashMap::with_capacity(records.len());
    let mut unique: Vec<T> = Vec::with_capacity(records.len());
    let mut duplicates = 0;

    for record in records {
        match index.entry(record.key()) {
            Entry::Occupied(slot) => {
                duplicates += 1;
                if policy == DuplicatePolicy::KeepLast {
                    unique[*slot.get()] = record.clone();
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(unique.len());
                unique.push(record.clone());
            }
        }
    }

    (unique, duplicates)
}

/// Merge historical and manual records.
///
/// Output order: historical keys not overridden (original order), then
/// manual keys in manual order.
pub fn merge<T: Keyed + Clone>(historical: &[T], manual: &[T]) -> Vec<T> {
    merge_with_stats(historical, manual).0
}

/// [`merge`], also returning counters.
pub fn merge_with_stats<T: Keyed + Clone>(
    historical: &[T],
    manual: &[T],
) -> (Vec<T>, MergeStats) {
    let (historical, historical_duplicates) =
        dedup_counted(historical, DuplicatePolicy::KeepFirst);
    let (manual, manual_duplicates) = dedup_counted(manual, DuplicatePolicy::KeepLast);

    let manual_keys: HashSet<RecordKey> = manual.iter().map(Keyed::key).collect();

    let mut merged = Vec::with_capacity(historical.len() + manual.len());
    let mut overridden = 0;
    for record in historical {
        if manual_keys.contains(&record.key()) {
            overridden += 1;
        } else {
            merged.push(record);
        }
    }
    merged.extend(manual);

    let stats = MergeStats {
        historical_duplicates,
        manual_duplicates,
        overridden,
        merged: merged.len(),
    };
    debug!(?stats, "merged sample records");

    (merged, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catch_core::SampleRecord;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn sample(d: u32, category: &str, net: f64) -> SampleRecord {
        SampleRecord::new(day(d), category).with_weights(net, 10.0)
    }

    #[test]
    fn test_empty_inputs() {
        let merged: Vec<SampleRecord> = merge(&[], &[]);
        assert!(merged.is_empty());
    }

    #[test]
    fn test_historical_first_wins() {
        let historical = vec![sample(1, "Sardina", 100.0), sample(1, "Sardina", 200.0)];
        let (merged, stats) = merge_with_stats(&historical, &[]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].net_weight, Some(100.0));
        assert_eq!(stats.historical_duplicates, 1);
    }

    #[test]
    fn test_manual_overrides_regardless_of_zone() {
        let historical = vec![
            sample(1, "Sardina", 100.0).with_zone("Adriatico"),
            sample(1, "Acciuga", 50.0),
        ];
        let manual = vec![sample(1, "Sardina", 999.0).with_zone("Tirreno")];

        let (merged, stats) = merge_with_stats(&historical, &manual);
        assert_eq!(merged.len(), 2);
        assert_eq!(stats.overridden, 1);

        // Historical-only key first, then the manual record.
        assert_eq!(merged[0].category.as_deref(), Some("Acciuga"));
        assert_eq!(merged[1].net_weight, Some(999.0));
        assert_eq!(merged[1].zone.as_deref(), Some("Tirreno"));
    }

    #[test]
    fn test_manual_order_preserved() {
        let historical = vec![sample(1, "Sardina", 1.0), sample(2, "Sardina", 2.0)];
        let manual = vec![sample(3, "Tonno rosso", 3.0), sample(1, "Sardina", 4.0)];

        let merged = merge(&historical, &manual);
        let nets: Vec<f64> = merged.iter().map(|r| r.net_weight.unwrap()).collect();
        assert_eq!(nets, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_manual_duplicates_last_value_first_position() {
        let manual = vec![
            sample(1, "Sardina", 1.0),
            sample(2, "Acciuga", 2.0),
            sample(1, "Sardina", 3.0),
        ];
        let deduped = dedup(&manual, DuplicatePolicy::KeepLast);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].net_weight, Some(3.0));
        assert_eq!(deduped[1].net_weight, Some(2.0));
    }

    fn arb_records() -> impl Strategy<Value = Vec<SampleRecord>> {
        prop::collection::vec(
            (
                1u32..6,
                prop::sample::select(vec!["Sardina", "Acciuga", "Pesce spada"]),
                0.0f64..1000.0,
            ),
            0..20,
        )
        .prop_map(|items| {
            items
                .into_iter()
                .map(|(d, c, net)| sample(d, c, net))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn merge_identities(historical in arb_records(), manual in arb_records()) {
            prop_assert_eq!(
                merge(&historical, &[]),
                dedup(&historical, DuplicatePolicy::KeepFirst)
            );
            prop_assert_eq!(merge(&[], &manual), dedup(&manual, DuplicatePolicy::KeepLast));
        }

        #[test]
        fn manual_always_wins(historical in arb_records(), manual in arb_records()) {
            let merged = merge(&historical, &manual);
            let expected = dedup(&manual, DuplicatePolicy::KeepLast);
            for m in &expected {
                let hits: Vec<&SampleRecord> =
                    merged.iter().filter(|r| r.key() == m.key()).collect();
                prop_assert_eq!(hits.len(), 1);
                prop_assert_eq!(hits[0], m);
            }
        }
    }
}
