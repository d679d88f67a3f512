//! Rental orders and order placement.
//!
//! An order placement turns a list of equipment ids into one [`Order`] row per
//! id that exists in the catalog. Every row created by the same placement
//! shares one [`ContractNumber`].

use crate::store::StoreError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Prefix of every generated contract number.
pub const CONTRACT_PREFIX: &str = "А-";

/// Wire format for order dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, awaiting confirmation
    Pending,
    /// Equipment is out on rent
    Active,
    /// Equipment returned
    Completed,
}

impl OrderStatus {
    /// Convert status to database string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Parse status from database string.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] if the string doesn't match a known status.
    pub fn parse(s: &str) -> Result<Self, StoreError> {
        match s {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(StoreError::Decode(format!("Invalid order status: {s}"))),
        }
    }
}

/// Contract identifier shared by all orders of one placement.
///
/// Format: `А-<year>-<MMDDHHMMSS>`, e.g. `А-2025-0101093000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContractNumber(String);

impl ContractNumber {
    /// Generate the contract number for a placement made at `now`.
    ///
    /// The stamp is always written in UTC, so numbers do not depend on the
    /// server's local time zone and sort the same on every host.
    ///
    /// # Example
    ///
    /// ```
    /// use rental_core::ContractNumber;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let at = Utc.with_ymd_and_hms(2025, 3, 7, 14, 5, 9).unwrap();
    /// assert_eq!(ContractNumber::generate(at).as_str(), "А-2025-0307140509");
    /// ```
    #[must_use]
    pub fn generate(now: DateTime<Utc>) -> Self {
        Self(format!("{CONTRACT_PREFIX}{}", now.format("%Y-%m%d%H%M%S")))
    }

    /// Wrap an existing contract number read from the store.
    #[must_use]
    pub const fn new(value: String) -> Self {
        Self(value)
    }

    /// Borrow the textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A rental contract line as listed to callers.
///
/// `equipment_name` and `total` are copies taken when the order was placed;
/// they are never re-joined against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Store-assigned identifier
    pub id: i64,
    /// Equipment name at placement time
    #[serde(rename = "equipment")]
    pub equipment_name: String,
    /// First rental day (`""` on the wire when unset)
    #[serde(serialize_with = "serialize_date_or_empty")]
    pub start_date: Option<NaiveDate>,
    /// Last rental day (`""` on the wire when unset)
    #[serde(serialize_with = "serialize_date_or_empty")]
    pub end_date: Option<NaiveDate>,
    /// Current status
    pub status: OrderStatus,
    /// Equipment price at placement time
    pub total: f64,
    /// Contract this line belongs to
    pub contract_number: ContractNumber,
}

#[allow(clippy::ref_option)] // serde passes the field by reference
fn serialize_date_or_empty<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
        None => serializer.serialize_str(""),
    }
}

/// Errors raised while turning request input into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A date field is not an ISO-8601 calendar date.
    #[error("{field} must be a date in YYYY-MM-DD format, got {value:?}")]
    InvalidDate {
        /// Wire name of the offending field
        field: &'static str,
        /// The rejected input
        value: String,
    },
}

/// Rental dates shared by every order line of one placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalPeriod {
    /// First rental day
    pub start_date: NaiveDate,
    /// Last rental day
    pub end_date: NaiveDate,
}

impl RentalPeriod {
    /// Parse both dates from their `YYYY-MM-DD` wire form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDate`] naming the first field that is
    /// not a calendar date.
    pub fn parse(start_date: &str, end_date: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            start_date: parse_date("startDate", start_date)?,
            end_date: parse_date("endDate", end_date)?,
        })
    }
}

/// Command to place one order per equipment id.
///
/// The rental dates are carried unchecked. A store only needs them once an id
/// matches a catalog row, so a placement whose ids all miss (or that names no
/// ids) succeeds whatever the dates say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrder {
    /// Contract number shared by every created row
    pub contract_number: ContractNumber,
    /// Requested equipment, in request order (duplicates allowed)
    pub equipment_ids: Vec<i64>,
    /// Rental dates, or the reason they cannot be used
    pub period: Result<RentalPeriod, ValidationError>,
}

impl PlaceOrder {
    /// Build a placement command from raw request fields.
    #[must_use]
    pub fn new(
        contract_number: ContractNumber,
        equipment_ids: Vec<i64>,
        start_date: &str,
        end_date: &str,
    ) -> Self {
        Self {
            contract_number,
            equipment_ids,
            period: RentalPeriod::parse(start_date, end_date),
        }
    }

    /// The rental dates for a matched catalog row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Rejected`] if the request dates are unusable.
    pub fn period_for_insert(&self) -> Result<RentalPeriod, StoreError> {
        self.period.clone().map_err(StoreError::Rejected)
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        }
    })
}

/// Outcome of an order placement.
///
/// Serialized as the `201` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementReceipt {
    /// Contract number shared by the created rows
    pub contract_number: ContractNumber,
    /// Number of order rows inserted
    pub orders_created: usize,
    /// Requested ids with no catalog row, in request order
    pub skipped_equipment_ids: Vec<i64>,
}

impl PlacementReceipt {
    /// Start an empty receipt for a contract.
    #[must_use]
    pub const fn new(contract_number: ContractNumber) -> Self {
        Self {
            contract_number,
            orders_created: 0,
            skipped_equipment_ids: Vec::new(),
        }
    }

    /// Record one inserted order row.
    pub const fn record_created(&mut self) {
        self.orders_created += 1;
    }

    /// Record an id that had no catalog row.
    pub fn record_skipped(&mut self, equipment_id: i64) {
        self.skipped_equipment_ids.push(equipment_id);
    }
}
