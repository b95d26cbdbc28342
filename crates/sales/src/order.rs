use chrono::{NaiveDate, NaiveDateTime};

use erpseed_core::schedule::{format_date, format_timestamp};
use erpseed_core::{
    Amount, CustomerNumber, ItemNumber, MaterialNumber, Measure, OrderNumber, SeedRecord,
};

/// Partner function of the ordering customer (`PARVW`).
pub const SOLD_TO_PARTY: &str = "AG";

/// Organizational data shared by every generated order.
pub(crate) const SALES_ORG: &str = "1000";
pub(crate) const DISTRIBUTION_CHANNEL: &str = "01";
pub(crate) const DIVISION: &str = "Z1";
pub(crate) const SALES_OFFICE: &str = "1000";
pub(crate) const SALES_GROUP: &str = "001";
pub(crate) const PLANT: &str = "1000";
pub(crate) const STORAGE_LOCATION: &str = "0001";

/// Sales document header.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesOrder {
    pub number: OrderNumber,
    pub customer: CustomerNumber,
    pub created_on: NaiveDate,
    pub document_date: NaiveDate,
    pub net_value: Amount,
    pub currency: String,
    pub sales_org: String,
    pub distribution_channel: String,
    pub division: String,
    pub sales_office: String,
    pub sales_group: String,
    pub order_type: String,
    pub record_source: String,
    pub load_date: NaiveDateTime,
}

/// Sales document item.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub order: OrderNumber,
    pub item: ItemNumber,
    pub material: MaterialNumber,
    pub quantity: Measure,
    /// Sales unit; the material's base unit.
    pub unit: String,
    pub net_value: Amount,
    pub currency: String,
    pub plant: String,
    pub storage_location: String,
    pub record_source: String,
    pub load_date: NaiveDateTime,
}

/// Partner function of a sales document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerFunction {
    pub order: OrderNumber,
    pub function: String,
    pub customer: CustomerNumber,
    pub personnel: String,
    pub vendor: String,
    pub address: String,
    pub record_source: String,
    pub load_date: NaiveDateTime,
}

impl SeedRecord for SalesOrder {
    const TABLE: &'static str = "vbak";
    const COLUMNS: &'static [&'static str] = &[
        "VBELN",
        "KUNNR",
        "ERDAT",
        "AUDAT",
        "NETWR",
        "WAERK",
        "VKORG",
        "VTWEG",
        "SPART",
        "VKBUR",
        "VKGRP",
        "AUART",
        "RECORD_SOURCE",
        "LOAD_DATE",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.number.to_string(),
            self.customer.to_string(),
            format_date(self.created_on),
            format_date(self.document_date),
            self.net_value.to_string(),
            self.currency.clone(),
            self.sales_org.clone(),
            self.distribution_channel.clone(),
            self.division.clone(),
            self.sales_office.clone(),
            self.sales_group.clone(),
            self.order_type.clone(),
            self.record_source.clone(),
            format_timestamp(self.load_date),
        ]
    }
}

impl SeedRecord for OrderItem {
    const TABLE: &'static str = "vbap";
    const COLUMNS: &'static [&'static str] = &[
        "VBELN",
        "POSNR",
        "MATNR",
        "KWMENG",
        "VRKME",
        "NETWR",
        "WAERK",
        "WERKS",
        "LGORT",
        "RECORD_SOURCE",
        "LOAD_DATE",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.order.to_string(),
            self.item.to_string(),
            self.material.to_string(),
            self.quantity.to_string(),
            self.unit.clone(),
            self.net_value.to_string(),
            self.currency.clone(),
            self.plant.clone(),
            self.storage_location.clone(),
            self.record_source.clone(),
            format_timestamp(self.load_date),
        ]
    }
}

impl SeedRecord for PartnerFunction {
    const TABLE: &'static str = "vbpa";
    const COLUMNS: &'static [&'static str] = &[
        "VBELN",
        "PARVW",
        "KUNNR",
        "PERNR",
        "LIFNR",
        "ADRNR",
        "RECORD_SOURCE",
        "LOAD_DATE",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.order.to_string(),
            self.function.clone(),
            self.customer.to_string(),
            self.personnel.clone(),
            self.vendor.clone(),
            self.address.clone(),
            self.record_source.clone(),
            format_timestamp(self.load_date),
        ]
    }
}
