//! The sync orchestrator.
//!
//! Sequences one sync operation end to end: classify the incoming record
//! against the store, resolve conflicts, merge and persist the primary
//! record, reconcile duplicates, and fold in shopping lists. One logical
//! thread per call - store calls are awaited sequentially, with no internal
//! retries, timeouts, or transactional grouping. Callers that need a
//! timeout wrap the whole `sync` invocation.

use customer_bridge_core::{Customer, ExternalCustomer, ShoppingList};
use tracing::{debug, instrument};

use crate::error::SyncError;
use crate::matching::{self, CustomerMatches, DuplicateCandidate};
use crate::merge;
use crate::resolve;
use crate::store::CustomerStore;

/// Outcome of persisting the primary record.
#[derive(Debug, Clone)]
pub struct SyncResult {
    /// The persisted record, internal id populated.
    pub customer: Customer,
    /// Whether the record was newly created (it had no internal id before
    /// this sync call). Reflects only the primary record, never duplicates.
    pub created: bool,
}

/// The matching-and-merge engine, generic over the store it persists to.
#[derive(Debug)]
pub struct CustomerSync<S> {
    store: S,
}

impl<S: CustomerStore> CustomerSync<S> {
    /// Create an engine on top of the given store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Reconcile one external record with the store.
    ///
    /// Classifies the record as company or person, resolves the match,
    /// persists the primary record (create iff it has no internal id),
    /// reconciles every duplicate candidate, and appends and persists the
    /// incoming shopping lists.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::TypeConflict`] or
    /// [`SyncError::IdentifierConflict`] when the match cannot be
    /// reconciled, and [`SyncError::Store`] when a store call fails. A
    /// failure aborts the remaining steps; writes already issued remain.
    #[instrument(
        skip(self, external),
        fields(external_id = %external.external_id, company = external.is_company())
    )]
    pub async fn sync(&self, external: &ExternalCustomer) -> Result<SyncResult, SyncError> {
        let matches = match &external.company_number {
            Some(number) => resolve::resolve_company(
                matching::find_company_match(&self.store, &external.external_id, number).await?,
                &external.external_id,
                number,
            )?,
            None => resolve::resolve_person(
                matching::find_person_match(&self.store, &external.external_id).await?,
                &external.external_id,
            )?,
        };

        let CustomerMatches {
            primary,
            duplicates,
        } = matches;

        let mut result = self
            .persist_primary(primary.map(|p| p.customer), external)
            .await?;

        for candidate in duplicates {
            self.sync_duplicate(candidate, external).await?;
        }

        result.customer = self
            .sync_shopping_lists(result.customer, &external.shopping_lists)
            .await?;

        Ok(result)
    }

    /// Merge and persist the primary record.
    async fn persist_primary(
        &self,
        existing: Option<Customer>,
        external: &ExternalCustomer,
    ) -> Result<SyncResult, SyncError> {
        let customer = merge::merge_customer(existing, external);

        if customer.is_persisted() {
            let customer = self.store.update_customer(customer).await?;
            Ok(SyncResult {
                customer,
                created: false,
            })
        } else {
            debug!("no persisted primary record, creating");
            let customer = self.store.create_customer(customer).await?;
            Ok(SyncResult {
                customer,
                created: true,
            })
        }
    }

    /// Apply the restricted duplicate merge and persist the result.
    ///
    /// Each duplicate persists individually, after and independently of the
    /// primary record; a failure here aborts later duplicates but cannot
    /// undo the primary sync.
    async fn sync_duplicate(
        &self,
        candidate: DuplicateCandidate,
        external: &ExternalCustomer,
    ) -> Result<(), SyncError> {
        let duplicate = merge::merge_duplicate(candidate, external);

        if duplicate.is_persisted() {
            self.store.update_customer(duplicate).await?;
        } else {
            debug!("creating fresh duplicate record");
            self.store.create_customer(duplicate).await?;
        }

        Ok(())
    }

    /// Append the incoming lists to the customer and persist them.
    ///
    /// Each list persists individually in input order; the customer record
    /// persists exactly once afterwards, with the fully appended sequence.
    /// No-op when there are no lists.
    async fn sync_shopping_lists(
        &self,
        mut customer: Customer,
        lists: &[ShoppingList],
    ) -> Result<Customer, SyncError> {
        if lists.is_empty() {
            return Ok(customer);
        }

        for list in lists {
            customer.add_shopping_list(list.clone());
            self.store.update_shopping_list(list).await?;
        }

        Ok(self.store.update_customer(customer).await?)
    }
}
