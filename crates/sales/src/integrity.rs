//! Referential integrity of a generated data set.
//!
//! Run after generation, before anything is written: a violation here means a
//! generator bug, and the run aborts instead of producing broken seed files.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;

use erpseed_core::schedule::format_timestamp;
use erpseed_core::{DomainError, DomainResult, Entity, ItemNumber, OrderNumber};
use erpseed_parties::Customer;
use erpseed_products::Material;

use crate::generator::Transactions;

/// Counts gathered while checking a data set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub orders: usize,
    pub items: usize,
    pub partners: usize,
    /// Distinct customers referenced by at least one order.
    pub referenced_customers: usize,
    /// Distinct materials referenced by at least one item.
    pub referenced_materials: usize,
}

/// Check keys, item sequence and partner rows. With `respect_load_order`,
/// also check that no transaction row is loaded before the first load of the
/// customer or material it references.
pub fn check_integrity(
    customers: &[Customer],
    materials: &[Material],
    tx: &Transactions,
    respect_load_order: bool,
) -> DomainResult<IntegrityReport> {
    let customer_ids: HashSet<_> = customers.iter().map(|c| c.number).collect();
    let material_ids: HashSet<_> = materials.iter().map(|m| m.number).collect();

    let mut previous: Option<OrderNumber> = None;
    for order in &tx.orders {
        if previous.is_some_and(|p| p >= order.number) {
            return Err(DomainError::invariant(format!(
                "order {} does not follow {}",
                order.number,
                previous.map(|p| p.to_string()).unwrap_or_default()
            )));
        }
        previous = Some(order.number);
        if !customer_ids.contains(&order.customer) {
            return Err(DomainError::invariant(format!(
                "order {} references unknown customer {}",
                order.number, order.customer
            )));
        }
    }
    let order_ids: HashSet<_> = tx.orders.iter().map(|o| o.number).collect();

    let mut next_item: HashMap<OrderNumber, usize> = HashMap::new();
    let mut referenced_materials = HashSet::new();
    for item in &tx.items {
        if !order_ids.contains(&item.order) {
            return Err(DomainError::invariant(format!(
                "item {}/{} references unknown order",
                item.order, item.item
            )));
        }
        if !material_ids.contains(&item.material) {
            return Err(DomainError::invariant(format!(
                "item {}/{} references unknown material {}",
                item.order, item.item, item.material
            )));
        }
        let position = next_item.entry(item.order).or_default();
        if item.item != ItemNumber::for_position(*position)? {
            return Err(DomainError::invariant(format!(
                "item {}/{} is out of sequence",
                item.order, item.item
            )));
        }
        *position += 1;
        referenced_materials.insert(item.material);
    }

    let mut partnered: HashSet<OrderNumber> = HashSet::new();
    for partner in &tx.partners {
        if !order_ids.contains(&partner.order) {
            return Err(DomainError::invariant(format!(
                "partner {} references unknown order {}",
                partner.function, partner.order
            )));
        }
        if !customer_ids.contains(&partner.customer) {
            return Err(DomainError::invariant(format!(
                "partner of order {} references unknown customer {}",
                partner.order, partner.customer
            )));
        }
        if !partnered.insert(partner.order) {
            return Err(DomainError::invariant(format!(
                "order {} has more than one partner row",
                partner.order
            )));
        }
    }
    if partnered.len() != order_ids.len() {
        return Err(DomainError::invariant(format!(
            "{} of {} orders have no partner row",
            order_ids.len() - partnered.len(),
            order_ids.len()
        )));
    }

    if respect_load_order {
        check_load_order(customers, materials, tx)?;
    }

    let referenced_customers = tx
        .orders
        .iter()
        .map(|o| o.customer)
        .collect::<HashSet<_>>()
        .len();

    Ok(IntegrityReport {
        orders: tx.orders.len(),
        items: tx.items.len(),
        partners: tx.partners.len(),
        referenced_customers,
        referenced_materials: referenced_materials.len(),
    })
}

/// Earliest load of every identifier.
fn first_loads<E: Entity>(rows: &[E]) -> HashMap<&E::Id, NaiveDateTime> {
    let mut first: HashMap<&E::Id, NaiveDateTime> = HashMap::new();
    for row in rows {
        first
            .entry(row.id())
            .and_modify(|ts| *ts = (*ts).min(row.load_date()))
            .or_insert(row.load_date());
    }
    first
}

fn not_before_first_load(
    what: String,
    at: NaiveDateTime,
    first: Option<&NaiveDateTime>,
) -> DomainResult<()> {
    match first {
        Some(first) if at < *first => Err(DomainError::invariant(format!(
            "{what} loaded at {} before its first load at {}",
            format_timestamp(at),
            format_timestamp(*first)
        ))),
        _ => Ok(()),
    }
}

/// Every order, item and partner row is loaded at or after the first load of
/// the master record it references.
fn check_load_order(
    customers: &[Customer],
    materials: &[Material],
    tx: &Transactions,
) -> DomainResult<()> {
    let customer_first = first_loads(customers);
    let material_first = first_loads(materials);

    for order in &tx.orders {
        not_before_first_load(
            format!("order {} references customer {}", order.number, order.customer),
            order.load_date,
            customer_first.get(&order.customer),
        )?;
    }
    for item in &tx.items {
        not_before_first_load(
            format!(
                "item {}/{} references material {}",
                item.order, item.item, item.material
            ),
            item.load_date,
            material_first.get(&item.material),
        )?;
    }
    for partner in &tx.partners {
        not_before_first_load(
            format!(
                "partner of order {} references customer {}",
                partner.order, partner.customer
            ),
            partner.load_date,
            customer_first.get(&partner.customer),
        )?;
    }
    Ok(())
}
