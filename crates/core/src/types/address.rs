//! Postal address type.

use serde::{Deserialize, Serialize};

/// A customer's postal address.
///
/// The source system sends addresses as an opaque street/city/postal-code
/// triple; the bridge copies them through without validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street line.
    pub street: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
}

impl Address {
    /// Create a new address.
    #[must_use]
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            postal_code: postal_code.into(),
        }
    }
}
