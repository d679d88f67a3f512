//! `PostgreSQL`-backed rental store.
//!
//! # Schema
//!
//! Tables live in a configurable schema (see [`SchemaName`]) and are created
//! by the embedded migrations:
//!
//! ```sql
//! CREATE TABLE equipment (id BIGSERIAL PRIMARY KEY, name TEXT, category TEXT,
//!     price NUMERIC(12,2), period TEXT, status TEXT, image TEXT, specs TEXT[]);
//! CREATE TABLE orders (id BIGSERIAL PRIMARY KEY, equipment_id BIGINT,
//!     equipment_name TEXT, start_date DATE, end_date DATE, status TEXT,
//!     total NUMERIC(12,2), contract_number TEXT, created_at TIMESTAMPTZ);
//! CREATE TABLE clients (id BIGSERIAL PRIMARY KEY,
//!     singleton BOOLEAN UNIQUE CHECK (singleton), company_name TEXT, ...);
//! ```
//!
//! # Example
//!
//! ```ignore
//! use rental_postgres::{PostgresRentalStore, SchemaName};
//! use rental_core::{EquipmentFilter, RentalStore};
//!
//! let store = PostgresRentalStore::new(pool, SchemaName::new("rental")?);
//! let catalog = store.list_equipment(EquipmentFilter::all()).await?;
//! ```

use crate::classify;
use crate::rows::{ClientRow, EquipmentRow, OrderRow};
use crate::schema::SchemaName;
use rental_core::store::StoreFuture;
use rental_core::{
    Client, Equipment, EquipmentFilter, Order, OrderStatus, PlaceOrder, PlacementReceipt,
    RentalStore, StoreError,
};
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, QueryBuilder};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const EQUIPMENT_COLUMNS: &str =
    "id, name, category, price::float8 AS price, period, status, image, specs";

const ORDER_COLUMNS: &str = "id, equipment_name, start_date, end_date, status, \
     total::float8 AS total, contract_number";

const CLIENT_COLUMNS: &str = "company_name, inn, kpp, legal_address, contact_person, phone, \
     email, bank_name, account_number, correspondent_account, bik";

/// Escape `LIKE` metacharacters so `value` matches literally.
///
/// Uses the default `LIKE` escape character (backslash).
///
/// # Example
///
/// ```
/// use rental_postgres::escape_like;
///
/// assert_eq!(escape_like("50%_off"), "50\\%\\_off");
/// ```
#[must_use]
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// PostgreSQL-backed implementation of [`RentalStore`].
///
/// Every operation borrows a connection from the pool (or begins a pool
/// transaction) and returns it when the operation completes. An uncommitted
/// transaction is rolled back when dropped, so no error path leaves a
/// partial order set behind.
///
/// # Example
///
/// ```ignore
/// // Share an existing pool
/// let store = PostgresRentalStore::new(pool, SchemaName::default());
///
/// // Or connect with default pool settings
/// let store = PostgresRentalStore::connect("postgres://localhost/rental", SchemaName::default()).await?;
/// ```
#[derive(Clone)]
pub struct PostgresRentalStore {
    pool: PgPool,
    schema: SchemaName,
}

impl PostgresRentalStore {
    /// Create a new store using an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool, schema: SchemaName) -> Self {
        Self { pool, schema }
    }

    /// Create a new store with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if connection fails.
    pub async fn connect(database_url: &str, schema: SchemaName) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect: {e}")))?;

        Ok(Self::new(pool, schema))
    }

    /// Run the embedded migrations inside the configured schema.
    ///
    /// Creates the schema if needed. The migration connection has its
    /// `search_path` changed, so it is closed instead of returned to the pool.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the schema cannot be created or a migration fails.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await.map_err(classify)?;
        conn.close_on_drop();

        sqlx::query(&format!(
            "CREATE SCHEMA IF NOT EXISTS {}",
            self.schema.quoted()
        ))
        .execute(&mut *conn)
        .await
        .map_err(classify)?;

        sqlx::query(&format!("SET search_path TO {}", self.schema.quoted()))
            .execute(&mut *conn)
            .await
            .map_err(classify)?;

        MIGRATOR
            .run(&mut *conn)
            .await
            .map_err(|e| StoreError::Query(format!("Migration failed: {e}")))?;

        tracing::info!(schema = %self.schema, "Migrations applied");
        Ok(())
    }

    /// Get the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the schema qualifier.
    #[must_use]
    pub const fn schema(&self) -> &SchemaName {
        &self.schema
    }

    #[tracing::instrument(skip(self), fields(schema = %self.schema))]
    async fn fetch_equipment(&self, filter: EquipmentFilter) -> Result<Vec<Equipment>, StoreError> {
        let mut query = QueryBuilder::<Postgres>::new(format!(
            "SELECT {EQUIPMENT_COLUMNS} FROM {} WHERE TRUE",
            self.schema.qualify("equipment")
        ));

        if let Some(category) = filter.category {
            query.push(" AND category = ").push_bind(category);
        }
        if let Some(search) = filter.search {
            query
                .push(" AND name ILIKE ")
                .push_bind(format!("%{}%", escape_like(&search)));
        }
        query.push(" ORDER BY id ASC");

        let rows: Vec<EquipmentRow> = query
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(classify)?;

        tracing::debug!(count = rows.len(), "Equipment listed");
        Ok(rows.into_iter().map(Equipment::from).collect())
    }

    #[tracing::instrument(skip(self), fields(schema = %self.schema))]
    async fn fetch_orders(&self) -> Result<Vec<Order>, StoreError> {
        let query = format!(
            "SELECT {ORDER_COLUMNS} FROM {} ORDER BY created_at DESC, id DESC",
            self.schema.qualify("orders")
        );

        let rows: Vec<OrderRow> = sqlx::query_as(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(classify)?;

        rows.into_iter().map(Order::try_from).collect()
    }

    #[tracing::instrument(skip(self), fields(schema = %self.schema))]
    async fn fetch_client(&self) -> Result<Option<Client>, StoreError> {
        let query = format!(
            "SELECT {CLIENT_COLUMNS} FROM {} ORDER BY id LIMIT 1",
            self.schema.qualify("clients")
        );

        let row: Option<ClientRow> = sqlx::query_as(&query)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)?;

        Ok(row.map(Client::from))
    }

    #[tracing::instrument(
        skip(self, order),
        fields(
            schema = %self.schema,
            contract_number = %order.contract_number,
            requested = order.equipment_ids.len(),
        )
    )]
    async fn insert_orders(&self, order: PlaceOrder) -> Result<PlacementReceipt, StoreError> {
        // Lookup and insert in one statement: no row is inserted when the id
        // has no catalog entry, which rows_affected reports as 0.
        let statement = format!(
            "INSERT INTO {} (equipment_id, equipment_name, start_date, end_date, status, total, contract_number)
             SELECT id, name, $2, $3, $4, price, $5 FROM {} WHERE id = $1",
            self.schema.qualify("orders"),
            self.schema.qualify("equipment"),
        );

        let mut tx = self.pool.begin().await.map_err(classify)?;
        let mut receipt = PlacementReceipt::new(order.contract_number.clone());

        // Unusable dates are bound as NULL; the first matched row aborts the transaction.
        let period = order.period.as_ref().ok().copied();

        for &equipment_id in &order.equipment_ids {
            let result = sqlx::query(&statement)
                .bind(equipment_id)
                .bind(period.map(|p| p.start_date))
                .bind(period.map(|p| p.end_date))
                .bind(OrderStatus::Pending.as_str())
                .bind(order.contract_number.as_str())
                .execute(&mut *tx)
                .await
                .map_err(classify)?;

            if result.rows_affected() == 0 {
                tracing::warn!(equipment_id, "Equipment not found, skipping order line");
                receipt.record_skipped(equipment_id);
            } else {
                order.period_for_insert()?;
                receipt.record_created();
            }
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::Transaction(format!("Failed to commit transaction: {e}")))?;

        tracing::info!(
            orders_created = receipt.orders_created,
            skipped = receipt.skipped_equipment_ids.len(),
            "Order placed"
        );

        metrics::counter!("rental.orders.created").increment(receipt.orders_created as u64);
        metrics::counter!("rental.orders.skipped")
            .increment(receipt.skipped_equipment_ids.len() as u64);

        Ok(receipt)
    }

    #[tracing::instrument(skip(self, client), fields(schema = %self.schema))]
    async fn save_client(&self, client: Client) -> Result<(), StoreError> {
        // The unique singleton column makes this a race-free insert-or-update.
        let statement = format!(
            "INSERT INTO {} ({CLIENT_COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             ON CONFLICT (singleton) DO UPDATE
             SET company_name = EXCLUDED.company_name,
                 inn = EXCLUDED.inn,
                 kpp = EXCLUDED.kpp,
                 legal_address = EXCLUDED.legal_address,
                 contact_person = EXCLUDED.contact_person,
                 phone = EXCLUDED.phone,
                 email = EXCLUDED.email,
                 bank_name = EXCLUDED.bank_name,
                 account_number = EXCLUDED.account_number,
                 correspondent_account = EXCLUDED.correspondent_account,
                 bik = EXCLUDED.bik,
                 updated_at = CURRENT_TIMESTAMP",
            self.schema.qualify("clients")
        );

        sqlx::query(&statement)
            .bind(client.company_name)
            .bind(client.inn)
            .bind(client.kpp)
            .bind(client.legal_address)
            .bind(client.contact_person)
            .bind(client.phone)
            .bind(client.email)
            .bind(client.bank_name)
            .bind(client.account_number)
            .bind(client.correspondent_account)
            .bind(client.bik)
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        tracing::info!("Client profile saved");
        metrics::counter!("rental.client.upserts").increment(1);

        Ok(())
    }
}

impl RentalStore for PostgresRentalStore {
    fn list_equipment(&self, filter: EquipmentFilter) -> StoreFuture<'_, Vec<Equipment>> {
        Box::pin(self.fetch_equipment(filter))
    }

    fn list_orders(&self) -> StoreFuture<'_, Vec<Order>> {
        Box::pin(self.fetch_orders())
    }

    fn get_client(&self) -> StoreFuture<'_, Option<Client>> {
        Box::pin(self.fetch_client())
    }

    fn place_order(&self, order: PlaceOrder) -> StoreFuture<'_, PlacementReceipt> {
        Box::pin(self.insert_orders(order))
    }

    fn upsert_client(&self, client: Client) -> StoreFuture<'_, ()> {
        Box::pin(self.save_client(client))
    }

    fn ping(&self) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            sqlx::query("SELECT 1")
                .execute(&self.pool)
                .await
                .map_err(classify)?;
            Ok(())
        })
    }
}
