//! In-memory store implementation.
//!
//! Backs the engine's unit and scenario tests, and doubles as a reference
//! implementation of the [`CustomerStore`] contract. Records live in a
//! `Mutex`-guarded vector in insertion order; create assigns a fresh
//! internal id. Call counts are recorded so tests can assert on how the
//! engine drove the store.

use std::sync::{Mutex, MutexGuard, PoisonError};

use customer_bridge_core::{CompanyNumber, Customer, ExternalId, InternalId, ShoppingList};

use super::{CustomerStore, StoreError};

/// A `CustomerStore` backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    records: Vec<Customer>,
    created: usize,
    updated: usize,
    shopping_list_updates: Vec<ShoppingList>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record directly, bypassing the engine.
    ///
    /// Assigns an internal id if the record has none. Returns the id so
    /// tests can fetch the record back.
    pub fn seed(&self, mut customer: Customer) -> InternalId {
        let id = customer.internal_id.unwrap_or_else(InternalId::random);
        customer.internal_id = Some(id);
        self.lock().records.push(customer);
        id
    }

    /// Fetch a record by internal id.
    #[must_use]
    pub fn get(&self, id: InternalId) -> Option<Customer> {
        self.lock()
            .records
            .iter()
            .find(|c| c.internal_id == Some(id))
            .cloned()
    }

    /// Snapshot of all records, in insertion order.
    #[must_use]
    pub fn records(&self) -> Vec<Customer> {
        self.lock().records.clone()
    }

    /// Number of create calls issued so far.
    #[must_use]
    pub fn created_count(&self) -> usize {
        self.lock().created
    }

    /// Number of customer update calls issued so far.
    #[must_use]
    pub fn updated_count(&self) -> usize {
        self.lock().updated
    }

    /// Shopping lists persisted so far, in call order.
    #[must_use]
    pub fn shopping_list_updates(&self) -> Vec<ShoppingList> {
        self.lock().shopping_list_updates.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CustomerStore for InMemoryStore {
    async fn find_by_external_id(
        &self,
        external_id: &ExternalId,
    ) -> Result<Option<Customer>, StoreError> {
        Ok(self
            .lock()
            .records
            .iter()
            .find(|c| c.external_id.as_ref() == Some(external_id))
            .cloned())
    }

    async fn find_by_master_external_id(
        &self,
        external_id: &ExternalId,
    ) -> Result<Option<Customer>, StoreError> {
        Ok(self
            .lock()
            .records
            .iter()
            .find(|c| c.master_external_id.as_ref() == Some(external_id))
            .cloned())
    }

    async fn find_by_company_number(
        &self,
        company_number: &CompanyNumber,
    ) -> Result<Option<Customer>, StoreError> {
        Ok(self
            .lock()
            .records
            .iter()
            .find(|c| c.company_number.as_ref() == Some(company_number))
            .cloned())
    }

    async fn create_customer(&self, mut customer: Customer) -> Result<Customer, StoreError> {
        if customer.internal_id.is_some() {
            return Err(StoreError::Conflict(
                "create of a record that already has an internal id".to_string(),
            ));
        }
        customer.internal_id = Some(InternalId::random());
        let mut inner = self.lock();
        inner.created += 1;
        inner.records.push(customer.clone());
        Ok(customer)
    }

    async fn update_customer(&self, customer: Customer) -> Result<Customer, StoreError> {
        let id = customer.internal_id.ok_or_else(|| {
            StoreError::Conflict("update of a record without an internal id".to_string())
        })?;
        let mut inner = self.lock();
        let slot = inner
            .records
            .iter_mut()
            .find(|c| c.internal_id == Some(id))
            .ok_or_else(|| StoreError::Conflict(format!("update of unknown record {id}")))?;
        *slot = customer.clone();
        inner.updated += 1;
        Ok(customer)
    }

    async fn update_shopping_list(&self, list: &ShoppingList) -> Result<(), StoreError> {
        self.lock().shopping_list_updates.push(list.clone());
        Ok(())
    }
}
