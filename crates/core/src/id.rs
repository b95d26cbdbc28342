//! Fixed-width, zero-padded numeric identifiers.
//!
//! Every key written to a seed file is a decimal number rendered at a fixed
//! width. The newtypes below refuse values that would overflow that width, so
//! two distinct values can never collide after padding.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Customer number (`KUNNR`), 10 digits: `0001` followed by a 6-digit sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerNumber(u64);

/// Material number (`MATNR`), 18 digits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialNumber(u64);

/// Sales document number (`VBELN`), 10 digits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(u64);

/// Sales document item number (`POSNR`), 6 digits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemNumber(u64);

macro_rules! impl_padded_number {
    ($t:ty, $width:literal, $name:literal) => {
        impl $t {
            /// Number of decimal digits in the rendered identifier.
            pub const WIDTH: usize = $width;

            /// Largest value that still fits in `WIDTH` digits.
            pub const MAX: u64 = 10u64.pow($width) - 1;

            pub fn new(value: u64) -> DomainResult<Self> {
                if value > Self::MAX {
                    return Err(DomainError::invalid_id(format!(
                        "{}: {} does not fit in {} digits",
                        $name, value, $width
                    )));
                }
                Ok(Self(value))
            }

            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{:0width$}", self.0, width = $width)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.len() != $width || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DomainError::invalid_id(format!(
                        "{}: expected {} digits, got {:?}",
                        $name, $width, s
                    )));
                }
                let value = s
                    .parse::<u64>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Self::new(value)
            }
        }
    };
}

impl_padded_number!(CustomerNumber, 10, "CustomerNumber");
impl_padded_number!(MaterialNumber, 18, "MaterialNumber");
impl_padded_number!(OrderNumber, 10, "OrderNumber");
impl_padded_number!(ItemNumber, 6, "ItemNumber");

impl CustomerNumber {
    /// Account-range prefix rendered as the leading `0001`.
    const RANGE_BASE: u64 = 1_000_000;

    /// Largest sequence index the `0001xxxxxx` range can hold.
    pub const MAX_SEQUENCE: u64 = Self::RANGE_BASE - 1;

    /// Build the customer number for the 1-based sequence index `seq`.
    pub fn from_sequence(seq: u64) -> DomainResult<Self> {
        if seq == 0 {
            return Err(DomainError::invalid_id("CustomerNumber: sequence starts at 1"));
        }
        if seq > Self::MAX_SEQUENCE {
            return Err(DomainError::exhausted("customer number", Self::MAX_SEQUENCE));
        }
        Self::new(Self::RANGE_BASE + seq)
    }

    /// Address number derived from the customer number: no leading zeros.
    pub fn address_number(&self) -> String {
        self.0.to_string()
    }
}

impl MaterialNumber {
    /// Build the material number for the 1-based sequence index `seq`.
    pub fn from_sequence(seq: u64) -> DomainResult<Self> {
        if seq == 0 {
            return Err(DomainError::invalid_id("MaterialNumber: sequence starts at 1"));
        }
        Self::new(seq)
    }
}

impl OrderNumber {
    /// First document number handed out by a fresh run.
    pub const FIRST: u64 = 10_000_001;
}

impl ItemNumber {
    /// Distance between consecutive item numbers.
    pub const STEP: u64 = 10;

    /// Item number for the 0-based position of a line within its order.
    pub fn for_position(position: usize) -> DomainResult<Self> {
        Self::new((position as u64 + 1) * Self::STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_number_renders_with_range_prefix() {
        let id = CustomerNumber::from_sequence(1).unwrap();
        assert_eq!(id.to_string(), "0001000001");

        let id = CustomerNumber::from_sequence(300).unwrap();
        assert_eq!(id.to_string(), "0001000300");
        assert_eq!(id.address_number(), "1000300");
    }

    #[test]
    fn customer_sequence_outside_range_is_rejected() {
        assert!(matches!(
            CustomerNumber::from_sequence(0),
            Err(DomainError::InvalidId(_))
        ));
        assert!(matches!(
            CustomerNumber::from_sequence(1_000_000),
            Err(DomainError::RangeExhausted { .. })
        ));
        assert!(CustomerNumber::from_sequence(999_999).is_ok());
    }

    #[test]
    fn material_number_is_eighteen_digits() {
        let id = MaterialNumber::from_sequence(42).unwrap();
        assert_eq!(id.to_string(), "000000000000000042");
        assert_eq!(id.to_string().len(), MaterialNumber::WIDTH);
    }

    #[test]
    fn order_numbers_are_ten_digits() {
        let first = OrderNumber::new(OrderNumber::FIRST).unwrap();
        assert_eq!(first.to_string(), "0010000001");
        assert!(OrderNumber::new(OrderNumber::FIRST + 1).unwrap() > first);
    }

    #[test]
    fn order_number_overflow_is_rejected() {
        assert!(OrderNumber::new(OrderNumber::MAX).is_ok());
        assert!(OrderNumber::new(OrderNumber::MAX + 1).is_err());
    }

    #[test]
    fn item_numbers_step_by_ten() {
        let rendered: Vec<String> = (0..3)
            .map(|p| ItemNumber::for_position(p).unwrap().to_string())
            .collect();
        assert_eq!(rendered, vec!["000010", "000020", "000030"]);
    }

    #[test]
    fn parse_requires_exact_width() {
        let id: OrderNumber = "0010000001".parse().unwrap();
        assert_eq!(id.value(), 10_000_001);

        assert!("10000001".parse::<OrderNumber>().is_err());
        assert!("00100000a1".parse::<OrderNumber>().is_err());
    }
}
