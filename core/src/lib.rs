//! # Rental Core
//!
//! Domain records and the store abstraction for the equipment rental service.
//!
//! This crate has no I/O of its own. It defines:
//!
//! - **Records**: [`Equipment`], [`Order`], [`Client`] in their wire shape (camelCase JSON)
//! - **Commands**: [`EquipmentFilter`] and [`PlaceOrder`], built from request input
//! - **Store**: the [`RentalStore`] trait every backend implements
//! - **Environment**: the [`Clock`] used to stamp contract numbers
//!
//! ## Request Flow
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌────────────────────┐
//! │  rental-web  │ ──▶ │  RentalStore     │ ──▶ │  rental-postgres   │
//! │  (router)    │     │  (this crate)    │     │  rental-testing    │
//! └──────────────┘     └──────────────────┘     └────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use rental_core::{EquipmentFilter, RentalStore};
//!
//! async fn cranes(store: &dyn RentalStore) -> Result<usize, rental_core::StoreError> {
//!     let filter = EquipmentFilter::from_params(Some("cranes"), None);
//!     Ok(store.list_equipment(filter).await?.len())
//! }
//! ```

pub mod client;
pub mod environment;
pub mod equipment;
pub mod order;
pub mod store;

// Re-export commonly used types
pub use chrono::{DateTime, NaiveDate, Utc};
pub use client::Client;
pub use environment::{Clock, SystemClock};
pub use equipment::{Equipment, EquipmentFilter};
pub use order::{
    CONTRACT_PREFIX, ContractNumber, Order, OrderStatus, PlaceOrder, PlacementReceipt,
    RentalPeriod, ValidationError,
};
pub use store::{RentalStore, StoreError};
