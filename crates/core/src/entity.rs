//! Entity and record traits shared by every seed table.

use chrono::NaiveDateTime;

/// Entity marker + minimal interface.
///
/// Master-data rows are versioned: several rows may share one `id`, told apart
/// by their `load_date`.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Timestamp of the load this row belongs to.
    fn load_date(&self) -> NaiveDateTime;
}

/// A row of a flat seed table.
///
/// `COLUMNS` is the on-disk column order; `to_row` must return exactly one
/// field per column, in that order.
pub trait SeedRecord {
    /// Short table name (e.g. `kna1`), used to build the file name.
    const TABLE: &'static str;

    /// Header row, in output order.
    const COLUMNS: &'static [&'static str];

    /// Render the record as text fields matching `COLUMNS`.
    fn to_row(&self) -> Vec<String>;
}
