//! Internal customer record types.

use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::address::Address;
use super::id::{CompanyNumber, ExternalId, InternalId};
use super::shopping_list::ShoppingList;

/// Whether a customer is a private person or a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerKind {
    /// A private person.
    Person,
    /// A registered company.
    Company,
}

impl fmt::Display for CustomerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person => write!(f, "person"),
            Self::Company => write!(f, "company"),
        }
    }
}

/// A customer record as held in the internal store.
///
/// Most fields are optional: a record fetched from the store may predate the
/// integration (no external id yet), and a record built in memory has no
/// internal id until the store creates it.
///
/// # Identity
///
/// Two records are the same logical customer iff external id, master
/// external id, and company number are all equal. `PartialEq` and `Hash`
/// are implemented over exactly that triple, so collection membership and
/// deduplication follow the domain rule rather than full structural
/// equality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    /// Current external identifier, if the record is bound to one.
    pub external_id: Option<ExternalId>,
    /// External identifier the record was originally created under.
    /// Diverges from `external_id` once the record is demoted to duplicate.
    pub master_external_id: Option<ExternalId>,
    /// Postal address.
    pub address: Option<Address>,
    /// Preferred store identifier.
    pub preferred_store: Option<String>,
    /// Append-only, order-preserving shopping list sequence.
    pub shopping_lists: Vec<ShoppingList>,
    /// Store-assigned identifier; `None` until the record is first created.
    pub internal_id: Option<InternalId>,
    /// Display name.
    pub name: Option<String>,
    /// Person or company.
    pub kind: Option<CustomerKind>,
    /// Company registration number (companies only).
    pub company_number: Option<CompanyNumber>,
    /// Bonus-point balance (persons only; companies keep the default).
    pub bonus_points: i64,
}

impl Customer {
    /// Create an in-memory record bound to the given external identifier.
    ///
    /// Seeds both the external id and the master external id; the internal
    /// id stays absent until the store creates the record.
    #[must_use]
    pub fn with_external_id(external_id: ExternalId) -> Self {
        Self {
            external_id: Some(external_id.clone()),
            master_external_id: Some(external_id),
            ..Self::default()
        }
    }

    /// Whether the record already exists in the store.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.internal_id.is_some()
    }

    /// Append a shopping list, preserving the existing sequence.
    pub fn add_shopping_list(&mut self, list: ShoppingList) {
        self.shopping_lists.push(list);
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.external_id == other.external_id
            && self.master_external_id == other.master_external_id
            && self.company_number == other.company_number
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.external_id.hash(state);
        self.master_external_id.hash(state);
        self.company_number.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_external_id_seeds_both_identifiers() {
        let customer = Customer::with_external_id(ExternalId::new("12345"));
        assert_eq!(customer.external_id, Some(ExternalId::new("12345")));
        assert_eq!(customer.master_external_id, Some(ExternalId::new("12345")));
        assert!(!customer.is_persisted());
    }

    #[test]
    fn test_equality_is_the_identity_triple() {
        let mut a = Customer::with_external_id(ExternalId::new("12345"));
        let mut b = Customer::with_external_id(ExternalId::new("12345"));
        b.name = Some("different name".to_string());
        b.bonus_points = 50;
        assert_eq!(a, b);

        a.company_number = Some(CompanyNumber::new("470813-8895"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_add_shopping_list_appends_in_order() {
        let mut customer = Customer::default();
        let first = ShoppingList::new(["eyeliner"]);
        let second = ShoppingList::new(["mascara"]);
        customer.add_shopping_list(first.clone());
        customer.add_shopping_list(second.clone());
        assert_eq!(customer.shopping_lists, vec![first, second]);
    }
}
