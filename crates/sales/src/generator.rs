//! Order, item and partner generation.
//!
//! Orders are spread over the load schedule in buckets; every row of an order
//! carries its bucket's timestamp. Customers and materials are drawn with
//! replacement from the fully materialized master tables.

use chrono::NaiveDateTime;

use erpseed_core::schedule::format_timestamp;
use erpseed_core::{
    Amount, DomainError, DomainResult, Entity, GenContext, GeneratorConfig, ItemNumber,
    LoadSchedule, Measure, OrderNumber,
};
use erpseed_parties::Customer;
use erpseed_products::Material;
use erpseed_reference::{ORDER_TYPES, currency_for};

use crate::order::{
    DISTRIBUTION_CHANNEL, DIVISION, OrderItem, PLANT, PartnerFunction, SALES_GROUP, SALES_OFFICE,
    SALES_ORG, SOLD_TO_PARTY, STORAGE_LOCATION, SalesOrder,
};

/// Days between the order date and the load.
const ORDER_LAG_DAYS: (u64, u64) = (1, 730);
/// Days between the document date and the order date.
const DOCUMENT_LAG_DAYS: (u64, u64) = (0, 5);
const ORDER_NET_VALUE: (f64, f64) = (10_000.0, 500_000.0);
const ITEM_QUANTITY: (f64, f64) = (1.0, 200.0);
const ITEM_UNIT_PRICE: (f64, f64) = (10.0, 5000.0);

/// The three transaction tables of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transactions {
    pub orders: Vec<SalesOrder>,
    pub items: Vec<OrderItem>,
    pub partners: Vec<PartnerFunction>,
}

/// Monotonic sales document number allocator. Numbers are never reused.
#[derive(Debug, Clone)]
pub struct OrderCounter {
    next: u64,
}

impl Default for OrderCounter {
    fn default() -> Self {
        Self::starting_at(OrderNumber::FIRST)
    }
}

impl OrderCounter {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    pub fn allocate(&mut self) -> DomainResult<OrderNumber> {
        if self.next > OrderNumber::MAX {
            return Err(DomainError::exhausted("sales document", OrderNumber::MAX));
        }
        let number = OrderNumber::new(self.next)?;
        self.next += 1;
        Ok(number)
    }
}

/// Rows a bucket may reference.
///
/// With `respect_load_order` only rows loaded at or before the bucket are
/// visible; otherwise the whole table is.
fn visible_rows<E: Entity>(rows: &[E], at: NaiveDateTime, respect_load_order: bool) -> Vec<&E> {
    rows.iter()
        .filter(|row| !respect_load_order || row.load_date() <= at)
        .collect()
}

fn draw<'a, E: Entity>(
    ctx: &mut GenContext,
    pool: &[&'a E],
    table: &str,
    at: NaiveDateTime,
) -> DomainResult<&'a E> {
    ctx.pick(pool).copied().ok_or_else(|| {
        DomainError::invariant(format!(
            "no {table} row available for orders loaded at {}",
            format_timestamp(at)
        ))
    })
}

/// Generate `config.orders` orders with their items and partner functions.
pub fn generate_orders(
    ctx: &mut GenContext,
    config: &GeneratorConfig,
    schedule: &LoadSchedule,
    customers: &[Customer],
    materials: &[Material],
) -> DomainResult<Transactions> {
    let mut tx = Transactions::default();
    let mut counter = OrderCounter::default();

    for (load_date, bucket_size) in schedule.buckets(config.orders as usize) {
        if bucket_size == 0 {
            continue;
        }
        let customer_pool = visible_rows(customers, load_date, config.respect_load_order);
        let material_pool = visible_rows(materials, load_date, config.respect_load_order);

        for _ in 0..bucket_size {
            let number = counter.allocate()?;
            let customer = draw(ctx, &customer_pool, "customer", load_date)?;
            let currency = currency_for(&customer.country);

            let created_on = ctx.date_before(load_date, ORDER_LAG_DAYS.0, ORDER_LAG_DAYS.1);
            let document_date =
                ctx.days_before(created_on, DOCUMENT_LAG_DAYS.0, DOCUMENT_LAG_DAYS.1);
            let net_value = Amount::new(ctx.uniform(ORDER_NET_VALUE.0, ORDER_NET_VALUE.1));
            let order_type = ctx.pick(&ORDER_TYPES).copied().unwrap_or_default();

            tx.orders.push(SalesOrder {
                number,
                customer: customer.number,
                created_on,
                document_date,
                net_value,
                currency: currency.to_string(),
                sales_org: SALES_ORG.to_string(),
                distribution_channel: DISTRIBUTION_CHANNEL.to_string(),
                division: DIVISION.to_string(),
                sales_office: SALES_OFFICE.to_string(),
                sales_group: SALES_GROUP.to_string(),
                order_type: order_type.to_string(),
                record_source: config.record_source.clone(),
                load_date,
            });

            tx.partners.push(PartnerFunction {
                order: number,
                function: SOLD_TO_PARTY.to_string(),
                customer: customer.number,
                personnel: String::new(),
                vendor: String::new(),
                address: customer.number.address_number(),
                record_source: config.record_source.clone(),
                load_date,
            });

            let item_count = ctx.int_between(config.min_items, config.max_items) as usize;
            for position in 0..item_count {
                let material = draw(ctx, &material_pool, "material", load_date)?;
                let quantity = Measure::new(ctx.uniform(ITEM_QUANTITY.0, ITEM_QUANTITY.1));
                let unit_price = ctx.uniform(ITEM_UNIT_PRICE.0, ITEM_UNIT_PRICE.1);

                tx.items.push(OrderItem {
                    order: number,
                    item: ItemNumber::for_position(position)?,
                    material: material.number,
                    quantity,
                    unit: material.unit.clone(),
                    net_value: quantity.priced_at(unit_price),
                    currency: currency.to_string(),
                    plant: PLANT.to_string(),
                    storage_location: STORAGE_LOCATION.to_string(),
                    record_source: config.record_source.clone(),
                    load_date,
                });
            }
        }

        tracing::debug!(
            load_date = %format_timestamp(load_date),
            orders = bucket_size,
            "generated order bucket"
        );
    }

    Ok(tx)
}
