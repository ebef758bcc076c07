//! Shopping list type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ordered list of products attached to a customer.
///
/// Lists arrive with the external record and are persisted individually by
/// the store; the customer record keeps an append-only sequence of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    /// List identifier.
    pub id: Uuid,
    /// Product names, in the order the source system sent them.
    pub products: Vec<String>,
}

impl ShoppingList {
    /// Create a new shopping list with a fresh identifier.
    #[must_use]
    pub fn new(products: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            products: products.into_iter().map(Into::into).collect(),
        }
    }
}
