//! In-memory store implementations for fast, deterministic testing.
//!
//! - [`InMemoryRentalStore`]: collection-backed `RentalStore` with the same
//!   ordering, filtering, skip and singleton semantics as the Postgres store
//! - [`FailingStore`]: a store that is never reachable

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Panics only on lock poisoning

use rental_core::store::StoreFuture;
use rental_core::{
    Client, Equipment, EquipmentFilter, Order, OrderStatus, PlaceOrder, PlacementReceipt,
    RentalStore, StoreError,
};
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct State {
    equipment: Vec<Equipment>,
    /// Oldest first; listing reverses.
    orders: Vec<Order>,
    client: Option<Client>,
    next_order_id: i64,
    /// Equipment ids whose order insert fails, to exercise rollback.
    rejected: HashSet<i64>,
}

/// In-memory rental store for fast, deterministic testing.
///
/// Complements `PostgresRentalStore`: same observable behavior, no database.
///
/// # Example
///
/// ```
/// use rental_testing::{InMemoryRentalStore, fixtures};
/// use rental_core::{EquipmentFilter, RentalStore};
///
/// # tokio_test::block_on(async {
/// let store = InMemoryRentalStore::with_catalog(fixtures::sample_catalog());
/// let lifting = store
///     .list_equipment(EquipmentFilter::from_params(Some("lifting"), None))
///     .await
///     .unwrap();
/// assert_eq!(lifting.len(), 1);
/// # });
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryRentalStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryRentalStore {
    /// Create a new empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with catalog rows
    #[must_use]
    pub fn with_catalog(equipment: Vec<Equipment>) -> Self {
        let store = Self::new();
        for item in equipment {
            store.insert_equipment(item);
        }
        store
    }

    /// Add a catalog row, keeping the catalog sorted by id
    pub fn insert_equipment(&self, equipment: Equipment) {
        let mut state = self.state.write().unwrap();
        state.equipment.push(equipment);
        state.equipment.sort_by_key(|e| e.id);
    }

    /// Make order inserts for this equipment id fail
    ///
    /// The failing placement commits nothing, matching a rolled-back transaction.
    pub fn reject_orders_for(&self, equipment_id: i64) {
        self.state.write().unwrap().rejected.insert(equipment_id);
    }

    /// Number of catalog rows
    #[must_use]
    pub fn equipment_count(&self) -> usize {
        self.state.read().unwrap().equipment.len()
    }

    /// All stored orders, oldest first
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.state.read().unwrap().orders.clone()
    }

    /// The stored client profile, if any
    #[must_use]
    pub fn client(&self) -> Option<Client> {
        self.state.read().unwrap().client.clone()
    }
}

impl RentalStore for InMemoryRentalStore {
    fn list_equipment(&self, filter: EquipmentFilter) -> StoreFuture<'_, Vec<Equipment>> {
        Box::pin(async move {
            let state = self.state.read().unwrap();
            Ok(state
                .equipment
                .iter()
                .filter(|e| filter.matches(e))
                .cloned()
                .collect())
        })
    }

    fn list_orders(&self) -> StoreFuture<'_, Vec<Order>> {
        Box::pin(async move {
            let state = self.state.read().unwrap();
            Ok(state.orders.iter().rev().cloned().collect())
        })
    }

    fn get_client(&self) -> StoreFuture<'_, Option<Client>> {
        Box::pin(async move { Ok(self.state.read().unwrap().client.clone()) })
    }

    fn place_order(&self, order: PlaceOrder) -> StoreFuture<'_, PlacementReceipt> {
        Box::pin(async move {
            let mut state = self.state.write().unwrap();
            let mut receipt = PlacementReceipt::new(order.contract_number.clone());
            let mut pending = Vec::new();

            // Build every row first so a rejected id commits nothing.
            for &equipment_id in &order.equipment_ids {
                let Some(equipment) = state.equipment.iter().find(|e| e.id == equipment_id)
                else {
                    receipt.record_skipped(equipment_id);
                    continue;
                };

                let period = order.period_for_insert()?;

                if state.rejected.contains(&equipment_id) {
                    return Err(StoreError::Query(format!(
                        "insert rejected for equipment {equipment_id}"
                    )));
                }

                pending.push(Order {
                    id: 0,
                    equipment_name: equipment.name.clone(),
                    start_date: Some(period.start_date),
                    end_date: Some(period.end_date),
                    status: OrderStatus::Pending,
                    total: equipment.price,
                    contract_number: order.contract_number.clone(),
                });
                receipt.record_created();
            }

            for mut row in pending {
                state.next_order_id += 1;
                row.id = state.next_order_id;
                state.orders.push(row);
            }

            Ok(receipt)
        })
    }

    fn upsert_client(&self, client: Client) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            self.state.write().unwrap().client = Some(client);
            Ok(())
        })
    }

    fn ping(&self) -> StoreFuture<'_, ()> {
        Box::pin(async { Ok(()) })
    }
}

/// A store whose every operation fails with a connection error.
///
/// Stands in for an unreachable database.
#[derive(Clone, Debug)]
pub struct FailingStore {
    message: String,
}

impl FailingStore {
    /// Create a failing store with the given error message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn fail<T: Send + 'static>(&self) -> StoreFuture<'_, T> {
        let err = StoreError::Connection(self.message.clone());
        Box::pin(async move { Err(err) })
    }
}

impl Default for FailingStore {
    fn default() -> Self {
        Self::new("connection refused")
    }
}

impl RentalStore for FailingStore {
    fn list_equipment(&self, _filter: EquipmentFilter) -> StoreFuture<'_, Vec<Equipment>> {
        self.fail()
    }

    fn list_orders(&self) -> StoreFuture<'_, Vec<Order>> {
        self.fail()
    }

    fn get_client(&self) -> StoreFuture<'_, Option<Client>> {
        self.fail()
    }

    fn place_order(&self, _order: PlaceOrder) -> StoreFuture<'_, PlacementReceipt> {
        self.fail()
    }

    fn upsert_client(&self, _client: Client) -> StoreFuture<'_, ()> {
        self.fail()
    }

    fn ping(&self) -> StoreFuture<'_, ()> {
        self.fail()
    }
}
