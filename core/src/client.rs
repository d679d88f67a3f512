//! The renting organization's legal and billing profile.

use serde::{Deserialize, Serialize};

/// Client profile. At most one exists.
///
/// Every field is optional: a field missing from an upsert body is stored as
/// NULL, and NULL columns are returned as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    /// Registered company name
    pub company_name: Option<String>,
    /// Taxpayer identification number (INN)
    pub inn: Option<String>,
    /// Tax registration reason code (KPP)
    pub kpp: Option<String>,
    /// Registered legal address
    pub legal_address: Option<String>,
    /// Contact person
    pub contact_person: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Bank name
    pub bank_name: Option<String>,
    /// Settlement account number
    pub account_number: Option<String>,
    /// Bank correspondent account
    pub correspondent_account: Option<String>,
    /// Bank identification code (BIK)
    pub bik: Option<String>,
}
