//! Core types for Customer Bridge.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod customer;
pub mod external;
pub mod id;
pub mod shopping_list;

pub use address::Address;
pub use customer::{Customer, CustomerKind};
pub use external::ExternalCustomer;
pub use id::*;
pub use shopping_list::ShoppingList;
