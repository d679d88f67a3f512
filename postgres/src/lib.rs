//! `PostgreSQL` store implementation for the equipment rental service.
//!
//! This crate provides [`PostgresRentalStore`], the production implementation
//! of the `RentalStore` trait from `rental-core`. It supports:
//!
//! - Connection pooling (one pooled connection per operation)
//! - A configurable schema qualifier on every table reference
//! - Transactional multi-row order placement
//! - An atomic singleton upsert for the client profile
//! - Embedded migrations
//!
//! # Example
//!
//! ```ignore
//! use rental_postgres::{PostgresRentalStore, SchemaName};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = PostgresRentalStore::connect("postgres://localhost/rental", SchemaName::new("rental")?).await?;
//!     store.migrate().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod rows;
pub mod schema;
pub mod store;

pub use schema::SchemaName;
pub use store::{PostgresRentalStore, escape_like};

use rental_core::StoreError;

/// Map a sqlx error onto the store error taxonomy.
pub(crate) fn classify(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StoreError::Connection(err.to_string()),
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::TypeNotFound { .. } => StoreError::Decode(err.to_string()),
        _ => StoreError::Query(err.to_string()),
    }
}
