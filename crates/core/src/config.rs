//! Generator configuration.
//!
//! Every tuning constant of a run lives here so it can be overridden from a
//! config file, the environment or the command line. Defaults reproduce the
//! standard fixture set (300 customers, 300 materials, 2000 orders).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::{CustomerNumber, ItemNumber, MaterialNumber, OrderNumber};
use crate::schedule::{LoadSchedule, default_load_dates};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed of the run's random stream.
    pub seed: u64,
    /// Number of distinct customers (not rows).
    pub customers: u64,
    /// Number of distinct materials (not rows).
    pub materials: u64,
    /// Total number of sales orders across all loads.
    pub orders: u64,
    pub min_items: u64,
    pub max_items: u64,
    /// Candidate load timestamps, strictly ascending.
    pub load_dates: Vec<NaiveDateTime>,
    /// How many of the earliest loads a first version may fall into.
    pub initial_load_count: usize,
    pub customer_update_probability: f64,
    pub material_update_probability: f64,
    /// Relative jitter applied to weights and volume of a material update.
    pub weight_jitter: f64,
    /// Provenance tag written to `RECORD_SOURCE`.
    pub record_source: String,
    /// Only reference master data already loaded at the order's timestamp.
    pub respect_load_order: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            customers: 300,
            materials: 300,
            orders: 2000,
            min_items: 2,
            max_items: 12,
            load_dates: default_load_dates(),
            initial_load_count: 4,
            customer_update_probability: 0.3,
            material_update_probability: 0.25,
            weight_jitter: 0.10,
            record_source: "SAP".to_string(),
            respect_load_order: false,
        }
    }
}

impl GeneratorConfig {
    /// Check the configuration and build the load schedule it describes.
    pub fn validate(&self) -> DomainResult<LoadSchedule> {
        let schedule = LoadSchedule::new(self.load_dates.clone())?;

        if self.min_items > self.max_items {
            return Err(DomainError::validation(format!(
                "min_items ({}) must not exceed max_items ({})",
                self.min_items, self.max_items
            )));
        }
        if self.initial_load_count == 0 {
            return Err(DomainError::validation("initial_load_count must be at least 1"));
        }
        for (name, p) in [
            ("customer_update_probability", self.customer_update_probability),
            ("material_update_probability", self.material_update_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(DomainError::validation(format!(
                    "{name} must be within [0, 1], got {p}"
                )));
            }
        }
        if !(0.0..1.0).contains(&self.weight_jitter) {
            return Err(DomainError::validation(format!(
                "weight_jitter must be within [0, 1), got {}",
                self.weight_jitter
            )));
        }
        if self.customers > CustomerNumber::MAX_SEQUENCE {
            return Err(DomainError::validation(format!(
                "at most {} customers fit the customer number range",
                CustomerNumber::MAX_SEQUENCE
            )));
        }
        if self.materials > MaterialNumber::MAX {
            return Err(DomainError::validation(format!(
                "at most {} materials fit the material number range",
                MaterialNumber::MAX
            )));
        }
        let order_capacity = OrderNumber::MAX - OrderNumber::FIRST + 1;
        if self.orders > order_capacity {
            return Err(DomainError::validation(format!(
                "at most {order_capacity} orders fit the sales document range"
            )));
        }
        let max_items = ItemNumber::MAX / ItemNumber::STEP;
        if self.max_items > max_items {
            return Err(DomainError::validation(format!(
                "max_items ({}) exceeds the {max_items} item numbers an order can hold",
                self.max_items
            )));
        }
        if self.orders > 0 && (self.customers == 0 || self.materials == 0) {
            return Err(DomainError::validation(
                "orders need at least one customer and one material",
            ));
        }
        if self.orders > 0 && self.max_items == 0 {
            return Err(DomainError::validation("orders need at least one item"));
        }

        Ok(schedule)
    }
}
