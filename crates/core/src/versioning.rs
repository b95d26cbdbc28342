//! Slowly-changing master data: when a record gets a second version.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::context::GenContext;
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::schedule::{LoadSchedule, format_timestamp};

/// Versioning policy for one kind of master record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VersionPolicy {
    /// First versions fall into the earliest `initial_load_count` loads.
    pub initial_load_count: usize,
    /// Probability that a record receives a second version.
    pub update_probability: f64,
}

impl VersionPolicy {
    /// Draw the load of a record's first version. Returns the schedule index
    /// and the timestamp.
    pub fn first_load(
        &self,
        ctx: &mut GenContext,
        schedule: &LoadSchedule,
    ) -> (usize, NaiveDateTime) {
        let candidates = schedule.initial_candidates(self.initial_load_count);
        let index = ctx.index(candidates.len()).unwrap_or(0);
        (index, candidates[index])
    }

    /// Draw the load of a second version, if the record gets one.
    ///
    /// The probability roll is consumed even when the first load is too late
    /// for an update, so the random stream does not depend on the outcome.
    pub fn update_load(
        &self,
        ctx: &mut GenContext,
        schedule: &LoadSchedule,
        first_index: usize,
    ) -> Option<NaiveDateTime> {
        let roll = ctx.chance(self.update_probability);
        if !roll || !schedule.allows_update_from(first_index) {
            return None;
        }
        ctx.pick(schedule.later_than(first_index)).copied()
    }
}

/// Check the version history of a generated master table.
///
/// Rows of one identifier must be adjacent, every timestamp must be a load of
/// the schedule, and each version must be strictly later than the previous.
/// Returns the number of distinct identifiers.
pub fn check_history<E: Entity>(rows: &[E], schedule: &LoadSchedule) -> DomainResult<usize> {
    let mut last_seen: HashMap<&E::Id, (usize, NaiveDateTime)> = HashMap::new();

    for (pos, row) in rows.iter().enumerate() {
        let ts = row.load_date();
        if schedule.position(ts).is_none() {
            return Err(DomainError::invariant(format!(
                "{:?}: load date {} is not in the schedule",
                row.id(),
                format_timestamp(ts)
            )));
        }
        if let Some((prev_pos, prev_ts)) = last_seen.get(row.id()) {
            if *prev_pos + 1 != pos {
                return Err(DomainError::invariant(format!(
                    "{:?}: versions are not adjacent",
                    row.id()
                )));
            }
            if ts <= *prev_ts {
                return Err(DomainError::invariant(format!(
                    "{:?}: version at {} does not follow {}",
                    row.id(),
                    format_timestamp(ts),
                    format_timestamp(*prev_ts)
                )));
            }
        }
        last_seen.insert(row.id(), (pos, ts));
    }

    Ok(last_seen.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::default_load_dates;
    use proptest::prelude::*;

    #[derive(Debug)]
    struct Row {
        id: u32,
        ts: NaiveDateTime,
    }

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn load_date(&self) -> NaiveDateTime {
            self.ts
        }
    }

    fn schedule() -> LoadSchedule {
        LoadSchedule::new(default_load_dates()).unwrap()
    }

    #[test]
    fn first_load_comes_from_initial_candidates() {
        let schedule = schedule();
        let policy = VersionPolicy {
            initial_load_count: 4,
            update_probability: 0.3,
        };
        let mut ctx = GenContext::from_seed(42);
        for _ in 0..200 {
            let (index, ts) = policy.first_load(&mut ctx, &schedule);
            assert!(index < 4);
            assert_eq!(schedule.dates()[index], ts);
        }
    }

    #[test]
    fn no_update_from_last_two_loads() {
        let schedule = schedule();
        let policy = VersionPolicy {
            initial_load_count: 6,
            update_probability: 1.0,
        };
        let mut ctx = GenContext::from_seed(42);
        assert!(policy.update_load(&mut ctx, &schedule, 4).is_none());
        assert!(policy.update_load(&mut ctx, &schedule, 5).is_none());
        assert!(policy.update_load(&mut ctx, &schedule, 3).is_some());
    }

    #[test]
    fn zero_probability_never_updates() {
        let schedule = schedule();
        let policy = VersionPolicy {
            initial_load_count: 4,
            update_probability: 0.0,
        };
        let mut ctx = GenContext::from_seed(42);
        assert!((0..100).all(|_| policy.update_load(&mut ctx, &schedule, 0).is_none()));
    }

    #[test]
    fn history_check_accepts_ordered_versions() {
        let schedule = schedule();
        let d = schedule.dates();
        let rows = vec![
            Row { id: 1, ts: d[0] },
            Row { id: 1, ts: d[2] },
            Row { id: 2, ts: d[1] },
        ];
        assert_eq!(check_history(&rows, &schedule).unwrap(), 2);
    }

    #[test]
    fn history_check_rejects_backwards_version() {
        let schedule = schedule();
        let d = schedule.dates();
        let rows = vec![Row { id: 1, ts: d[2] }, Row { id: 1, ts: d[1] }];
        match check_history(&rows, &schedule).unwrap_err() {
            DomainError::InvariantViolation(msg) if msg.contains("does not follow") => {}
            other => panic!("Expected invariant violation, got {other:?}"),
        }
    }

    #[test]
    fn history_check_rejects_split_versions() {
        let schedule = schedule();
        let d = schedule.dates();
        let rows = vec![
            Row { id: 1, ts: d[0] },
            Row { id: 2, ts: d[0] },
            Row { id: 1, ts: d[3] },
        ];
        assert!(check_history(&rows, &schedule).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: an update load is always strictly later than the first load.
        #[test]
        fn update_is_strictly_later(seed in any::<u64>(), p in 0.0f64..=1.0) {
            let schedule = schedule();
            let policy = VersionPolicy { initial_load_count: 4, update_probability: p };
            let mut ctx = GenContext::from_seed(seed);

            let (index, first) = policy.first_load(&mut ctx, &schedule);
            if let Some(update) = policy.update_load(&mut ctx, &schedule, index) {
                prop_assert!(update > first);
                prop_assert!(index + 2 < schedule.len());
            }
        }
    }
}
