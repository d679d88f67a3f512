//! # Rental Testing
//!
//! Testing utilities for the equipment rental service.
//!
//! This crate provides:
//! - [`InMemoryRentalStore`]: `RentalStore` backed by in-process collections
//! - [`FailingStore`]: `RentalStore` whose every operation fails
//! - [`FixedClock`]: deterministic time for contract numbers
//! - [`fixtures`]: a small sample catalog
//!
//! ## Example
//!
//! ```
//! use rental_testing::{InMemoryRentalStore, fixtures, test_clock};
//! use rental_core::{ContractNumber, Clock};
//!
//! let store = InMemoryRentalStore::with_catalog(fixtures::sample_catalog());
//! assert_eq!(store.equipment_count(), 4);
//!
//! let number = ContractNumber::generate(test_clock().now());
//! assert_eq!(number.as_str(), "А-2025-0101000000");
//! ```

use chrono::{DateTime, Utc};
use rental_core::environment::Clock;

pub mod fixtures;
mod store_mocks;

pub use store_mocks::{FailingStore, InMemoryRentalStore};

/// Mock implementations of environment traits.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use rental_testing::mocks::FixedClock;
    /// use rental_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Test helpers and utilities.
pub mod helpers {
    /// Install a test-friendly tracing subscriber.
    ///
    /// Output goes through the test harness writer, so it is only shown for
    /// failing tests. Safe to call from every test; only the first call installs.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use helpers::init_tracing;
pub use mocks::{FixedClock, test_clock};
