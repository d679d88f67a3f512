//! Store trait and related types for the rental data access layer.
//!
//! This module defines the abstraction every backend implements: five data
//! operations plus a connectivity check.
//!
//! # Implementations
//!
//! - `PostgresRentalStore` (in `rental-postgres` crate): Production implementation
//! - `InMemoryRentalStore` (in `rental-testing` crate): Fast, deterministic testing
//!
//! # Example
//!
//! ```no_run
//! use rental_core::store::{RentalStore, StoreError};
//! use rental_core::EquipmentFilter;
//!
//! async fn example(store: &dyn RentalStore) -> Result<(), StoreError> {
//!     let cranes = store
//!         .list_equipment(EquipmentFilter::from_params(Some("lifting"), Some("crane")))
//!         .await?;
//!     let client = store.get_client().await?;
//!     println!("{} cranes, client on file: {}", cranes.len(), client.is_some());
//!     Ok(())
//! }
//! ```

use crate::client::Client;
use crate::equipment::{Equipment, EquipmentFilter};
use crate::order::{Order, PlaceOrder, PlacementReceipt, ValidationError};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached or the pool is exhausted.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A statement failed to execute.
    #[error("Query error: {0}")]
    Query(String),

    /// A row could not be decoded into its record type.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Beginning or committing a transaction failed.
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// The store was configured with invalid settings.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request input was needed for a write and turned out to be unusable.
    ///
    /// Nothing was committed.
    #[error(transparent)]
    Rejected(#[from] ValidationError),
}

/// Boxed future returned by [`RentalStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'a>>;

/// Data access operations for the rental service.
///
/// Every call acquires its own connection (or transaction) and releases it
/// before the returned future resolves, on success and on error alike.
///
/// # Dyn Compatibility
///
/// This trait uses explicit `Pin<Box<dyn Future>>` returns instead of `async fn`
/// so the router can hold an `Arc<dyn RentalStore>` injected at construction.
pub trait RentalStore: Send + Sync {
    /// List catalog items matching `filter`, ordered by id ascending.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the query fails.
    fn list_equipment(&self, filter: EquipmentFilter) -> StoreFuture<'_, Vec<Equipment>>;

    /// List all orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the query fails or a row has an unknown status.
    fn list_orders(&self) -> StoreFuture<'_, Vec<Order>>;

    /// Read the client profile, if one has been saved.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the query fails.
    fn get_client(&self) -> StoreFuture<'_, Option<Client>>;

    /// Insert one order per existing equipment id, atomically.
    ///
    /// Ids with no catalog row are skipped and reported in the receipt. Either
    /// all matched rows are committed or none are.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Rejected`] if an id matches and the rental dates
    /// are unusable, or another [`StoreError`] if any statement or the commit
    /// fails.
    fn place_order(&self, order: PlaceOrder) -> StoreFuture<'_, PlacementReceipt>;

    /// Create the client profile or overwrite the existing one.
    ///
    /// Exactly one profile exists afterwards.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the statement fails.
    fn upsert_client(&self, client: Client) -> StoreFuture<'_, ()>;

    /// Check that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store cannot be reached.
    fn ping(&self) -> StoreFuture<'_, ()>;
}
