//! Shared test data builders for the engine scenario tests.

use customer_bridge_core::{
    Address, CompanyNumber, Customer, CustomerKind, ExternalCustomer, ExternalId, ShoppingList,
};

pub const EXTERNAL_ID: &str = "12345";
pub const COMPANY_NUMBER: &str = "470813-8895";
pub const NAME: &str = "Acme Inc.";

/// An external company record with one shopping list.
pub fn external_company() -> ExternalCustomer {
    ExternalCustomer {
        external_id: ExternalId::new(EXTERNAL_ID),
        name: NAME.to_string(),
        address: Some(Address::new("123 main st", "Helsingborg", "254 67")),
        preferred_store: Some("Nordstan".to_string()),
        company_number: Some(CompanyNumber::new(COMPANY_NUMBER)),
        bonus_points: 0,
        shopping_lists: vec![ShoppingList::new(["lipstick", "blusher"])],
    }
}

/// An external person record with a bonus-point balance.
pub fn external_person() -> ExternalCustomer {
    ExternalCustomer {
        company_number: None,
        bonus_points: 75,
        ..external_company()
    }
}

/// A store record bound to the same external id and company as `external`.
pub fn customer_with_same_company_as(external: &ExternalCustomer) -> Customer {
    Customer {
        kind: Some(CustomerKind::Company),
        company_number: external.company_number.clone(),
        name: Some("Acme".to_string()),
        ..Customer::with_external_id(external.external_id.clone())
    }
}

/// A person-kind store record bound to the same external id as `external`.
pub fn person_with_same_external_id_as(external: &ExternalCustomer) -> Customer {
    Customer {
        kind: Some(CustomerKind::Person),
        name: Some("Ann Arbor".to_string()),
        bonus_points: 10,
        ..Customer::with_external_id(external.external_id.clone())
    }
}
