//! Explicit generation context: the single seeded random stream of a run.
//!
//! Every generator takes `&mut GenContext`; nothing reads process-wide random
//! state, so the same seed and the same call order always produce the same
//! records.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded random stream threaded through the generators.
#[derive(Debug, Clone)]
pub struct GenContext {
    seed: u64,
    rng: ChaCha8Rng,
}

impl GenContext {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly chosen element, `None` only for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Uniformly chosen index into a collection of `len` elements.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.gen_range(0..len))
    }

    /// `true` with probability `p`. Always consumes one draw.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.r#gen::<f64>() < p
    }

    /// Uniform integer in `[low, high]`.
    pub fn int_between(&mut self, low: u64, high: u64) -> u64 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    /// Uniform real in `[low, high)`; `low` when the range is empty.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.rng.r#gen::<f64>()
    }

    /// String of `len` random decimal digits.
    pub fn digits(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10u8)))
            .collect()
    }

    /// `date` moved back by a uniform number of days in `[min_days, max_days]`.
    pub fn days_before(&mut self, date: NaiveDate, min_days: u64, max_days: u64) -> NaiveDate {
        let days = self.int_between(min_days, max_days);
        date - Duration::days(days as i64)
    }

    /// Date of `ts` moved back by a uniform number of days in `[min_days, max_days]`.
    pub fn date_before(&mut self, ts: NaiveDateTime, min_days: u64, max_days: u64) -> NaiveDate {
        self.days_before(ts.date(), min_days, max_days)
    }
}
