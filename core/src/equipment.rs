//! Rentable equipment catalog.

use serde::{Deserialize, Serialize};

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// A catalog item available for rent.
///
/// Catalog rows are maintained outside this service; they are read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    /// Store-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Category label (open set)
    pub category: String,
    /// Rental price for one period
    pub price: f64,
    /// Rental period descriptor, e.g. "per day"
    pub period: String,
    /// Availability state, e.g. "available"
    pub status: String,
    /// Image URL
    pub image: String,
    /// Technical specifications, in display order
    #[serde(default)]
    pub specs: Vec<String>,
}

/// Catalog filter built from the `category` and `search` query parameters.
///
/// Both parts are optional and combine conjunctively. Use
/// [`EquipmentFilter::from_params`] so the `""`/`"all"` sentinels are
/// normalized away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentFilter {
    /// Exact category to match
    pub category: Option<String>,
    /// Case-insensitive substring of the name
    pub search: Option<String>,
}

impl EquipmentFilter {
    /// Filter that matches the whole catalog.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            category: None,
            search: None,
        }
    }

    /// Build a filter from raw query parameters.
    ///
    /// An empty category or [`ALL_CATEGORIES`] means no category filter; an
    /// empty search means no name filter.
    ///
    /// # Example
    ///
    /// ```
    /// use rental_core::EquipmentFilter;
    ///
    /// assert_eq!(EquipmentFilter::from_params(Some("all"), Some("")), EquipmentFilter::all());
    /// ```
    #[must_use]
    pub fn from_params(category: Option<&str>, search: Option<&str>) -> Self {
        Self {
            category: category
                .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
                .map(str::to_string),
            search: search.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    /// Whether no predicate is active.
    #[must_use]
    pub const fn is_unfiltered(&self) -> bool {
        self.category.is_none() && self.search.is_none()
    }

    /// Evaluate the filter against a record.
    ///
    /// Mirrors the SQL predicate: `category = $1 AND name ILIKE '%' || $2 || '%'`.
    #[must_use]
    pub fn matches(&self, equipment: &Equipment) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| equipment.category == c);
        let search_ok = self.search.as_deref().is_none_or(|s| {
            equipment
                .name
                .to_lowercase()
                .contains(&s.to_lowercase())
        });
        category_ok && search_ok
    }
}
