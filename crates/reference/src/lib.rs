//! Static reference tables the generators draw from.
//!
//! Pure constant data: geography, company-name fragments and the material /
//! sales-document taxonomies. Lookup only, no randomness.

pub mod geography;
pub mod names;
pub mod taxonomy;

pub use geography::{COUNTRIES, Country, FALLBACK_CITY, country, currency_for, dialing_code_for};
pub use names::{COMPANY_MIDDLES, COMPANY_PREFIXES, COMPANY_SUFFIXES};
pub use taxonomy::{MATERIAL_GROUPS, MaterialType, ORDER_TYPES, UNITS};
