//! # Rental Web
//!
//! Request routing for the equipment rental service.
//!
//! The core is [`RentalRouter`], which turns an [`ApiRequest`] envelope into an
//! [`ApiResponse`] envelope. [`http::app`] serves it over HTTP with axum.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rental_web::{RentalRouter, http};
//! use rental_testing::InMemoryRentalStore;
//! use std::sync::Arc;
//!
//! # async fn run() -> std::io::Result<()> {
//! let router = RentalRouter::new(Arc::new(InMemoryRentalStore::new()));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, http::app(router)).await
//! # }
//! ```

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod http;
pub mod router;

pub use envelope::{ApiRequest, ApiResponse};
pub use error::ApiError;
pub use router::{RentalRouter, Route};
