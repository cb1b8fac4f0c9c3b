//! Day-of-year message frequency.
//!
//! Buckets are ordinal days of a leap year, so February 29th always has a
//! slot and a given calendar day lands in the same bucket whatever the
//! year: March 1st is bucket 60 in 2023 as well as in 2024.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::round_to;

/// Number of day-of-year buckets.
pub const DAYS_IN_TABLE: usize = 366;

/// Leap year used to place every month/day pair.
const REFERENCE_YEAR: i32 = 2000;

/// Zero-based bucket of a calendar day.
///
/// # Example
///
/// ```rust
/// use chatstats::analysis::day_bucket;
/// use chrono::NaiveDate;
///
/// assert_eq!(day_bucket(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()), 0);
/// assert_eq!(day_bucket(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()), 60);
/// assert_eq!(day_bucket(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()), 365);
/// ```
pub fn day_bucket(date: NaiveDate) -> usize {
    // Every month/day pair exists in a leap year.
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, date.month(), date.day())
        .map(|d| d.ordinal0() as usize)
        .unwrap_or_default()
}

/// Calendar day (in the reference leap year) for a bucket index.
pub fn bucket_date(bucket: usize) -> Option<NaiveDate> {
    let ordinal = u32::try_from(bucket).ok()?.checked_add(1)?;
    NaiveDate::from_yo_opt(REFERENCE_YEAR, ordinal)
}

/// Message counts per day of year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHistogram {
    buckets: Vec<u32>,
}

impl Default for DayHistogram {
    fn default() -> Self {
        Self {
            buckets: vec![0; DAYS_IN_TABLE],
        }
    }
}

impl DayHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one message on `date`.
    pub fn record(&mut self, date: NaiveDate) {
        self.buckets[day_bucket(date)] += 1;
    }

    /// Element-wise sum with another table.
    pub fn merge(&mut self, other: &DayHistogram) {
        for (mine, theirs) in self.buckets.iter_mut().zip(&other.buckets) {
            *mine += theirs;
        }
    }

    /// Count in one bucket.
    pub fn get(&self, bucket: usize) -> u32 {
        self.buckets.get(bucket).copied().unwrap_or(0)
    }

    /// The 366 bucket counts.
    pub fn buckets(&self) -> &[u32] {
        &self.buckets
    }

    /// Total messages across all buckets.
    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|&c| u64::from(c)).sum()
    }

    /// Largest bucket count.
    pub fn max(&self) -> u32 {
        self.buckets.iter().copied().max().unwrap_or(0)
    }

    /// Mean messages per bucket, rounded to `decimals` digits.
    pub fn mean_per_day(&self, decimals: u32) -> f64 {
        round_to(self.total() as f64 / DAYS_IN_TABLE as f64, decimals)
    }

    /// The busiest bucket and its count; the earliest wins on ties.
    ///
    /// Returns `None` for an empty table.
    pub fn busiest_day(&self) -> Option<(usize, u32)> {
        let max = self.max();
        if max == 0 {
            return None;
        }
        self.buckets
            .iter()
            .position(|&c| c == max)
            .map(|idx| (idx, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_day_has_own_bucket() {
        assert_eq!(day_bucket(date(2024, 2, 28)), 58);
        assert_eq!(day_bucket(date(2024, 2, 29)), 59);
        assert_eq!(day_bucket(date(2023, 3, 1)), 60);
        assert_eq!(day_bucket(date(2024, 3, 1)), 60);
    }

    #[test]
    fn test_bucket_date_roundtrip() {
        assert_eq!(bucket_date(59), Some(date(2000, 2, 29)));
        assert_eq!(bucket_date(365), Some(date(2000, 12, 31)));
        assert_eq!(bucket_date(366), None);
    }

    #[test]
    fn test_record_and_totals() {
        let mut h = DayHistogram::new();
        h.record(date(2021, 7, 4));
        h.record(date(2022, 7, 4));
        h.record(date(2022, 1, 1));
        assert_eq!(h.buckets().len(), DAYS_IN_TABLE);
        assert_eq!(h.get(day_bucket(date(2000, 7, 4))), 2);
        assert_eq!(h.total(), 3);
        assert_eq!(h.busiest_day(), Some((day_bucket(date(2000, 7, 4)), 2)));
    }

    #[test]
    fn test_mean_per_day() {
        let mut h = DayHistogram::new();
        for _ in 0..366 {
            h.record(date(2023, 5, 5));
        }
        assert!((h.mean_per_day(2) - 1.0).abs() < f64::EPSILON);

        let mut h = DayHistogram::new();
        h.record(date(2023, 5, 5));
        // 1 / 366 = 0.00273...
        assert!((h.mean_per_day(2) - 0.0).abs() < f64::EPSILON);
        assert!((h.mean_per_day(3) - 0.003).abs() < 1e-12);
    }

    #[test]
    fn test_merge() {
        let mut a = DayHistogram::new();
        a.record(date(2023, 1, 1));
        let mut b = DayHistogram::new();
        b.record(date(2023, 1, 1));
        b.record(date(2023, 12, 31));
        a.merge(&b);
        assert_eq!(a.get(0), 2);
        assert_eq!(a.get(365), 1);
        assert_eq!(a.total(), 3);
    }

    #[test]
    fn test_empty_table() {
        let h = DayHistogram::new();
        assert_eq!(h.busiest_day(), None);
        assert_eq!(h.total(), 0);
    }
}
