//! Conflict resolution over a lookup classification.
//!
//! Inspects the [`CustomerMatches`] the lookup produced and either accepts
//! the primary candidate, demotes it to a duplicate requiring separate
//! reconciliation, or fails the sync with a conflict. Runs entirely in
//! memory: no store writes happen until the orchestrator persists the
//! resolved records.

use customer_bridge_core::{CompanyNumber, CustomerKind, ExternalId};
use tracing::{debug, warn};

use crate::error::SyncError;
use crate::matching::{CustomerMatches, DuplicateCandidate, MatchTerm, PrimaryMatch};

/// Resolve the company path.
///
/// - A primary candidate whose kind is not `Company` is a
///   [`SyncError::TypeConflict`].
/// - An external-id match whose stored company number differs from the
///   incoming one is not actually the same company: it is demoted into the
///   duplicate set with its master external id cleared, and the primary
///   slot is emptied so the orchestrator creates a fresh record.
/// - A company-number match that already carries a different, non-empty
///   external id is a [`SyncError::IdentifierConflict`]. Otherwise the
///   candidate adopts the incoming external id as both external and master
///   external id, and a [`DuplicateCandidate::New`] placeholder joins the
///   duplicate set so a fresh duplicate record is created alongside.
///
/// # Errors
///
/// Returns `TypeConflict` or `IdentifierConflict` as described above. Both
/// are fatal for the current sync call.
pub fn resolve_company(
    mut matches: CustomerMatches,
    external_id: &ExternalId,
    company_number: &CompanyNumber,
) -> Result<CustomerMatches, SyncError> {
    if let Some(primary) = &matches.primary
        && primary.customer.kind != Some(CustomerKind::Company)
    {
        return Err(SyncError::TypeConflict {
            external_id: external_id.clone(),
            expected: CustomerKind::Company,
        });
    }

    match matches.primary.take() {
        Some(PrimaryMatch {
            term: MatchTerm::ExternalId,
            mut customer,
        }) => {
            if customer.company_number.as_ref() == Some(company_number) {
                matches.primary = Some(PrimaryMatch {
                    term: MatchTerm::ExternalId,
                    customer,
                });
            } else {
                // Same external id, different company: the stored record
                // belongs to someone else. Reconcile it as a duplicate and
                // leave the primary slot empty so a new record is created.
                warn!(
                    %external_id,
                    stored = ?customer.company_number,
                    incoming = %company_number,
                    "company number mismatch, demoting match to duplicate"
                );
                customer.master_external_id = None;
                matches.duplicates.push(DuplicateCandidate::Existing(customer));
            }
        }
        Some(PrimaryMatch {
            term: MatchTerm::CompanyNumber,
            mut customer,
        }) => {
            if let Some(existing) = &customer.external_id
                && !existing.is_empty()
                && existing != external_id
            {
                return Err(SyncError::IdentifierConflict {
                    company_number: company_number.clone(),
                    external_id: external_id.clone(),
                    found: existing.clone(),
                });
            }
            debug!(%external_id, %company_number, "binding identifier-less record to external id");
            customer.external_id = Some(external_id.clone());
            customer.master_external_id = Some(external_id.clone());
            matches.primary = Some(PrimaryMatch {
                term: MatchTerm::CompanyNumber,
                customer,
            });
            matches.duplicates.push(DuplicateCandidate::New);
        }
        other => matches.primary = other,
    }

    Ok(matches)
}

/// Resolve the person path.
///
/// - A primary candidate whose kind is not `Person` is a
///   [`SyncError::TypeConflict`].
/// - A candidate found by anything other than its external id adopts the
///   incoming external id as both external and master external id.
///
/// # Errors
///
/// Returns `TypeConflict` as described above.
pub fn resolve_person(
    mut matches: CustomerMatches,
    external_id: &ExternalId,
) -> Result<CustomerMatches, SyncError> {
    if let Some(primary) = matches.primary.as_mut() {
        if primary.customer.kind != Some(CustomerKind::Person) {
            return Err(SyncError::TypeConflict {
                external_id: external_id.clone(),
                expected: CustomerKind::Person,
            });
        }

        if primary.term != MatchTerm::ExternalId {
            primary.customer.external_id = Some(external_id.clone());
            primary.customer.master_external_id = Some(external_id.clone());
        }
    }

    Ok(matches)
}
