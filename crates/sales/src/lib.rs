//! Sales documents (`VBAK`, `VBAP`, `VBPA`).
//!
//! Builds order headers, order items and partner functions on top of the
//! already generated customer and material collections. No IO.

pub mod generator;
pub mod integrity;
pub mod order;

pub use generator::{OrderCounter, Transactions, generate_orders};
pub use integrity::{IntegrityReport, check_integrity};
pub use order::{OrderItem, PartnerFunction, SOLD_TO_PARTY, SalesOrder};
