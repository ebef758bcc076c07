//! Store capability trait for customer persistence.
//!
//! The engine is decoupled from any concrete storage technology: everything
//! it needs from the store is expressed as the [`CustomerStore`] trait.
//! Lookups are pure reads; create and update return the persisted record
//! (create with the internal id populated). The store is the sole arbiter
//! of consistency between concurrent sync calls - this layer imposes no
//! timeouts, retries, or transactional grouping.
//!
//! [`memory::InMemoryStore`] is a complete implementation backed by
//! process memory, used as the test double throughout this crate and
//! available to downstream crates for their own tests.

pub mod memory;

use core::future::Future;

use customer_bridge_core::{CompanyNumber, Customer, ExternalId, ShoppingList};
use thiserror::Error;

pub use memory::InMemoryStore;

/// Errors surfaced by a store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend failed (connection, query, timeout).
    #[error("store backend error: {0}")]
    Backend(String),

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g. update of an unknown record).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Capability set the engine consumes from the persistent store.
///
/// All methods return `Send` futures so the engine can run on a
/// multi-threaded executor; the engine itself only ever awaits them
/// sequentially.
pub trait CustomerStore {
    /// Find a customer by its current external identifier.
    fn find_by_external_id(
        &self,
        external_id: &ExternalId,
    ) -> impl Future<Output = Result<Option<Customer>, StoreError>> + Send;

    /// Find a customer by the external identifier it was originally
    /// created under.
    fn find_by_master_external_id(
        &self,
        external_id: &ExternalId,
    ) -> impl Future<Output = Result<Option<Customer>, StoreError>> + Send;

    /// Find a customer by company registration number.
    fn find_by_company_number(
        &self,
        company_number: &CompanyNumber,
    ) -> impl Future<Output = Result<Option<Customer>, StoreError>> + Send;

    /// Create a new customer record.
    ///
    /// Returns the persisted record with its internal id populated.
    fn create_customer(
        &self,
        customer: Customer,
    ) -> impl Future<Output = Result<Customer, StoreError>> + Send;

    /// Update an existing customer record.
    fn update_customer(
        &self,
        customer: Customer,
    ) -> impl Future<Output = Result<Customer, StoreError>> + Send;

    /// Persist a single shopping list.
    fn update_shopping_list(
        &self,
        list: &ShoppingList,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
