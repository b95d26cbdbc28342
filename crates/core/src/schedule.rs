//! The ordered list of load timestamps every generator draws from.
//!
//! Master-data versions pick their timestamps from it; orders are spread over
//! it in buckets.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{DomainError, DomainResult};

/// Rendering of `ERSDA`, `ERDAT` and friends.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rendering of `LOAD_DATE`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Load dates used when no schedule is configured.
pub fn default_load_dates() -> Vec<NaiveDateTime> {
    [
        (2024, 1, 1),
        (2024, 3, 15),
        (2024, 6, 1),
        (2024, 9, 1),
        (2024, 12, 1),
        (2025, 1, 1),
    ]
    .into_iter()
    .filter_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)?.and_hms_opt(0, 0, 0))
    .collect()
}

/// Strictly ascending, non-empty sequence of load timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSchedule {
    dates: Vec<NaiveDateTime>,
}

impl LoadSchedule {
    pub fn new(dates: Vec<NaiveDateTime>) -> DomainResult<Self> {
        if dates.is_empty() {
            return Err(DomainError::validation("load schedule must not be empty"));
        }
        if let Some(pair) = dates.windows(2).find(|w| w[0] >= w[1]) {
            return Err(DomainError::validation(format!(
                "load dates must be strictly ascending ({} is not before {})",
                format_timestamp(pair[0]),
                format_timestamp(pair[1])
            )));
        }
        Ok(Self { dates })
    }

    pub fn dates(&self) -> &[NaiveDateTime] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Candidates for a first version: the earliest `count` loads.
    pub fn initial_candidates(&self, count: usize) -> &[NaiveDateTime] {
        &self.dates[..count.clamp(1, self.dates.len())]
    }

    /// Whether a record first loaded at `index` may receive a later version.
    ///
    /// Records that enter in one of the last two loads are never updated.
    pub fn allows_update_from(&self, index: usize) -> bool {
        index + 2 < self.dates.len()
    }

    /// Loads strictly after the one at `index`.
    pub fn later_than(&self, index: usize) -> &[NaiveDateTime] {
        self.dates.get(index + 1..).unwrap_or(&[])
    }

    pub fn position(&self, ts: NaiveDateTime) -> Option<usize> {
        self.dates.binary_search(&ts).ok()
    }

    /// Split `total` orders over the loads.
    ///
    /// Every bucket gets `total / len`; the last one also absorbs the
    /// remainder.
    pub fn bucket_sizes(&self, total: usize) -> Vec<usize> {
        let n = self.dates.len();
        let base = total / n;
        let mut sizes = vec![base; n];
        sizes[n - 1] = total - base * (n - 1);
        sizes
    }

    /// Pairs each load timestamp with its bucket size.
    pub fn buckets(&self, total: usize) -> impl Iterator<Item = (NaiveDateTime, usize)> + '_ {
        self.dates
            .iter()
            .copied()
            .zip(self.bucket_sizes(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ts(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn default_schedule() -> LoadSchedule {
        LoadSchedule::new(default_load_dates()).unwrap()
    }

    #[test]
    fn default_dates_are_valid_schedule() {
        let schedule = default_schedule();
        assert_eq!(schedule.len(), 6);
        assert_eq!(schedule.dates()[0], ts(2024, 1, 1));
        assert_eq!(schedule.dates()[5], ts(2025, 1, 1));
    }

    #[test]
    fn empty_schedule_is_rejected() {
        assert!(matches!(
            LoadSchedule::new(Vec::new()),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn unordered_schedule_is_rejected() {
        let err = LoadSchedule::new(vec![ts(2024, 3, 1), ts(2024, 1, 1)]).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("strictly ascending") => {}
            _ => panic!("Expected validation error for unordered dates"),
        }
        assert!(LoadSchedule::new(vec![ts(2024, 1, 1), ts(2024, 1, 1)]).is_err());
    }

    #[test]
    fn updates_stop_two_loads_before_the_end() {
        let schedule = default_schedule();
        assert!(schedule.allows_update_from(0));
        assert!(schedule.allows_update_from(3));
        assert!(!schedule.allows_update_from(4));
        assert!(!schedule.allows_update_from(5));
    }

    #[test]
    fn later_than_excludes_the_load_itself() {
        let schedule = default_schedule();
        assert_eq!(schedule.later_than(3), &[ts(2024, 12, 1), ts(2025, 1, 1)]);
        assert!(schedule.later_than(5).is_empty());
    }

    #[test]
    fn initial_candidates_are_clamped() {
        let schedule = default_schedule();
        assert_eq!(schedule.initial_candidates(4).len(), 4);
        assert_eq!(schedule.initial_candidates(10).len(), 6);
        assert_eq!(schedule.initial_candidates(0).len(), 1);
    }

    #[test]
    fn remainder_goes_to_last_bucket() {
        let schedule = default_schedule();
        assert_eq!(schedule.bucket_sizes(2000), vec![333, 333, 333, 333, 333, 335]);
        assert_eq!(schedule.bucket_sizes(1), vec![0, 0, 0, 0, 0, 1]);
        assert_eq!(schedule.bucket_sizes(0), vec![0; 6]);
    }

    #[test]
    fn timestamps_render_with_seconds() {
        assert_eq!(format_timestamp(ts(2024, 3, 15)), "2024-03-15 00:00:00");
        assert_eq!(format_date(ts(2024, 3, 15).date()), "2024-03-15");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: buckets always add up to the requested total and only the
        /// last bucket may differ from the others.
        #[test]
        fn bucket_sizes_sum_to_total(total in 0usize..100_000, n in 1usize..24) {
            let dates: Vec<NaiveDateTime> = (0..n)
                .map(|i| ts(2024, 1, 1) + chrono::Duration::days(i as i64))
                .collect();
            let schedule = LoadSchedule::new(dates).unwrap();
            let sizes = schedule.bucket_sizes(total);

            prop_assert_eq!(sizes.len(), n);
            prop_assert_eq!(sizes.iter().sum::<usize>(), total);
            for size in &sizes[..n - 1] {
                prop_assert_eq!(*size, total / n);
            }
            prop_assert!(sizes[n - 1] >= total / n);
        }
    }
}
