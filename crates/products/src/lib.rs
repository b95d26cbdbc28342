//! Material master data (`MARA`).
//!
//! Builds material records with type-dependent physical attributes, including
//! measurement corrections as later versions. No IO.

pub mod material;

pub use material::{MAINTENANCE_STATUS, Material, PhysicalProfile, generate_materials};
