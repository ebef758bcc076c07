//! External customer record as received from the source system.

use serde::{Deserialize, Serialize};

use super::address::Address;
use super::id::{CompanyNumber, ExternalId};
use super::shopping_list::ShoppingList;

/// An immutable customer snapshot from the external source system.
///
/// One of these is the input to every sync operation. The source system
/// models persons and companies with the same shape; the presence of a
/// company registration number is what distinguishes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalCustomer {
    /// Source-system identifier. Always present.
    pub external_id: ExternalId,
    /// Display name.
    pub name: String,
    /// Postal address.
    pub address: Option<Address>,
    /// Preferred store identifier.
    pub preferred_store: Option<String>,
    /// Company registration number; present only for companies.
    pub company_number: Option<CompanyNumber>,
    /// Bonus-point balance.
    pub bonus_points: i64,
    /// Shopping lists, in source order.
    pub shopping_lists: Vec<ShoppingList>,
}

impl ExternalCustomer {
    /// Whether this record describes a company.
    ///
    /// True iff a company registration number is present.
    #[must_use]
    pub const fn is_company(&self) -> bool {
        self.company_number.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn external(company_number: Option<CompanyNumber>) -> ExternalCustomer {
        ExternalCustomer {
            external_id: ExternalId::new("12345"),
            name: "Acme Inc.".to_string(),
            address: None,
            preferred_store: None,
            company_number,
            bonus_points: 0,
            shopping_lists: Vec::new(),
        }
    }

    #[test]
    fn test_company_number_presence_drives_kind() {
        assert!(external(Some(CompanyNumber::new("470813-8895"))).is_company());
        assert!(!external(None).is_company());
    }

    #[test]
    fn test_deserializes_from_source_payload() {
        let payload = serde_json::json!({
            "external_id": "12345",
            "name": "Acme Inc.",
            "address": { "street": "123 main st", "city": "Helsingborg", "postal_code": "254 67" },
            "preferred_store": "Nordstan",
            "company_number": "470813-8895",
            "bonus_points": 0,
            "shopping_lists": [{ "id": "8f8c6b2e-64f1-4c27-9a0e-2f2b3a5c9d11", "products": ["lipstick", "blusher"] }],
        });

        let external: ExternalCustomer = serde_json::from_value(payload).unwrap();
        assert!(external.is_company());
        assert_eq!(external.shopping_lists.len(), 1);
        assert_eq!(external.preferred_store.as_deref(), Some("Nordstan"));
    }
}
