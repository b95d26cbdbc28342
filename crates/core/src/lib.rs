//! `erpseed-core`: building blocks shared by every record generator.
//!
//! This crate contains **pure** primitives (no IO): identifiers, the load
//! schedule, the seeded generation context and the generator configuration.

pub mod config;
pub mod context;
pub mod entity;
pub mod error;
pub mod id;
pub mod schedule;
pub mod value_object;
pub mod versioning;

pub use config::GeneratorConfig;
pub use context::GenContext;
pub use entity::{Entity, SeedRecord};
pub use error::{DomainError, DomainResult};
pub use id::{CustomerNumber, ItemNumber, MaterialNumber, OrderNumber};
pub use schedule::LoadSchedule;
pub use value_object::{Amount, Measure, ValueObject};
pub use versioning::{VersionPolicy, check_history};
