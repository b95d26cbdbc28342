//! Value objects: numeric quantities with a fixed rendering precision.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! value. The two kinds used by the seed tables differ only in how many
//! fraction digits they are written with.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one (see [`Measure::scaled`]).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Monetary value, written with 2 fraction digits (`NETWR`).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Amount(f64);

/// Physical quantity (weight, volume, order quantity), written with 3
/// fraction digits (`BRGEW`, `NTGEW`, `VOLUM`, `KWMENG`).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Measure(f64);

impl ValueObject for Amount {}
impl ValueObject for Measure {}

impl Amount {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Measure {
    pub const ZERO: Measure = Measure(0.0);

    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    /// A new measure multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0 * factor)
    }

    /// Monetary value of this quantity at `unit_price`.
    pub fn priced_at(&self, unit_price: f64) -> Amount {
        Amount(self.0 * unit_price)
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl core::fmt::Display for Measure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
