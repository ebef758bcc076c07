//! Engine error types.
//!
//! Conflicts are fatal for the current sync call: the orchestrator does not
//! retry, and partial store writes already issued are left in place. Store
//! failures propagate untranslated.

use customer_bridge_core::{CompanyNumber, CustomerKind, ExternalId};
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can abort a sync operation.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An existing matched record's kind disagrees with the incoming
    /// record's kind.
    #[error("existing customer for external id {external_id} already exists and is not a {expected}")]
    TypeConflict {
        /// External identifier of the incoming record.
        external_id: ExternalId,
        /// Kind the incoming record required.
        expected: CustomerKind,
    },

    /// A company-number match already carries a different, non-empty
    /// external identifier.
    #[error(
        "existing customer for company number {company_number} doesn't match external id {external_id}, found {found} instead"
    )]
    IdentifierConflict {
        /// Company registration number that produced the match.
        company_number: CompanyNumber,
        /// External identifier of the incoming record.
        external_id: ExternalId,
        /// Conflicting identifier already on the matched record.
        found: ExternalId,
    },

    /// A store operation failed. Propagated as-is, aborting remaining steps.
    #[error(transparent)]
    Store(#[from] StoreError),
}
