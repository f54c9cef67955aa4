//! Calendar range selection.

use catch_core::Keyed;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range; reversed bounds are swapped.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start > end {
            warn!(%start, %end, "start date after end date, swapping");
            Self { start: end, end: start }
        } else {
            Self { start, end }
        }
    }

    /// A range covering one day.
    pub fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside the range.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day of the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}

/// Keep records dated within `range`, order preserved.
pub fn filter_by_date<T: Keyed + Clone>(records: &[T], range: &DateRange) -> Vec<T> {
    records
        .iter()
        .filter(|r| range.contains(r.date()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catch_core::SampleRecord;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn test_reversed_bounds_swapped() {
        let range = DateRange::new(day(2, 10), day(2, 1));
        assert_eq!(range.start(), day(2, 1));
        assert_eq!(range.end(), day(2, 10));
    }

    #[test]
    fn test_days_inclusive() {
        let range = DateRange::new(day(2, 27), day(3, 2));
        let days: Vec<NaiveDate> = range.days().collect();
        // 2024 is a leap year.
        assert_eq!(days.len(), 5);
        assert_eq!(days[2], day(2, 29));
        assert_eq!(*days.last().unwrap(), day(3, 2));

        let single = DateRange::single(day(1, 1));
        assert_eq!(single.start(), single.end());
        assert_eq!(single.days().count(), 1);
    }

    #[test]
    fn test_filter_by_date() {
        let records = vec![
            SampleRecord::new(day(1, 1), "Sardina"),
            SampleRecord::new(day(1, 5), "Sardina"),
            SampleRecord::new(day(1, 3), "Acciuga"),
            SampleRecord::new(day(1, 9), "Acciuga"),
        ];
        let kept = filter_by_date(&records, &DateRange::new(day(1, 3), day(1, 5)));
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].date, day(1, 5));
        assert_eq!(kept[1].date, day(1, 3));
    }
}
