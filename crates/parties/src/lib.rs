//! Customer master data (`KNA1`).
//!
//! Builds customer records, including later versions of some customers, from
//! the reference tables and the run's random stream. No IO.

pub mod customer;

pub use customer::{ACCOUNT_GROUP, Customer, generate_customers};
