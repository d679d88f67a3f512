//! Schema qualifier for table references.
//!
//! The schema name comes from configuration and is interpolated into SQL
//! text, so it is restricted to a plain identifier. User input is never
//! interpolated; it is always bound as a parameter.

use rental_core::StoreError;
use std::fmt;

/// `PostgreSQL` truncates identifiers longer than this.
const MAX_IDENTIFIER_LEN: usize = 63;

/// A validated schema name.
///
/// Accepts `[A-Za-z_][A-Za-z0-9_]*`, at most 63 bytes. Rendered double-quoted
/// so the configured case is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaName(String);

impl SchemaName {
    /// Validate a schema name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Configuration`] if the name is empty, too long, or
    /// contains anything other than ASCII letters, digits and underscores.
    ///
    /// # Example
    ///
    /// ```
    /// use rental_postgres::SchemaName;
    ///
    /// assert!(SchemaName::new("rental").is_ok());
    /// assert!(SchemaName::new("rental; DROP TABLE orders").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, StoreError> {
        let name = name.into();
        let mut chars = name.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !valid_start || !valid_rest || name.len() > MAX_IDENTIFIER_LEN {
            return Err(StoreError::Configuration(format!(
                "Invalid schema name: {name:?}"
            )));
        }

        Ok(Self(name))
    }

    /// The raw schema name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The quoted identifier, e.g. `"rental"`.
    #[must_use]
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }

    /// Qualify a table name, e.g. `"rental".orders`.
    #[must_use]
    pub fn qualify(&self, table: &str) -> String {
        format!("{}.{table}", self.quoted())
    }
}

impl Default for SchemaName {
    fn default() -> Self {
        Self("public".to_string())
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
