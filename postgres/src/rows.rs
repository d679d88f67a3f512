//! Row types decoded at the store boundary.
//!
//! Field order matches the select projections in `store.rs`.

use chrono::NaiveDate;
use rental_core::{Client, ContractNumber, Equipment, Order, OrderStatus, StoreError};
use sqlx::FromRow;

/// Projection: `id, name, category, price::float8, period, status, image, specs`.
#[derive(Debug, FromRow)]
pub(crate) struct EquipmentRow {
    id: i64,
    name: String,
    category: String,
    price: f64,
    period: String,
    status: String,
    image: String,
    specs: Option<Vec<String>>,
}

impl From<EquipmentRow> for Equipment {
    fn from(row: EquipmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category: row.category,
            price: row.price,
            period: row.period,
            status: row.status,
            image: row.image,
            specs: row.specs.unwrap_or_default(),
        }
    }
}

/// Projection: `id, equipment_name, start_date, end_date, status, total::float8, contract_number`.
#[derive(Debug, FromRow)]
pub(crate) struct OrderRow {
    id: i64,
    equipment_name: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    status: String,
    total: f64,
    contract_number: String,
}

impl TryFrom<OrderRow> for Order {
    type Error = StoreError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            equipment_name: row.equipment_name,
            start_date: row.start_date,
            end_date: row.end_date,
            status: OrderStatus::parse(&row.status)?,
            total: row.total,
            contract_number: ContractNumber::new(row.contract_number),
        })
    }
}

/// Projection: every profile column, in [`Client`] field order.
#[derive(Debug, FromRow)]
pub(crate) struct ClientRow {
    company_name: Option<String>,
    inn: Option<String>,
    kpp: Option<String>,
    legal_address: Option<String>,
    contact_person: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    bank_name: Option<String>,
    account_number: Option<String>,
    correspondent_account: Option<String>,
    bik: Option<String>,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Self {
            company_name: row.company_name,
            inn: row.inn,
            kpp: row.kpp,
            legal_address: row.legal_address,
            contact_person: row.contact_person,
            phone: row.phone,
            email: row.email,
            bank_name: row.bank_name,
            account_number: row.account_number,
            correspondent_account: row.correspondent_account,
            bik: row.bik,
        }
    }
}
