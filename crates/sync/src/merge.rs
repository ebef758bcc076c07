//! Field merging from an external record onto an internal record.
//!
//! Pure transformations: each function takes records in and returns the
//! merged record, so the same candidate can never alias between the
//! primary and duplicate paths. Persistence is the orchestrator's job.

use customer_bridge_core::{Customer, CustomerKind, ExternalCustomer};

use crate::matching::DuplicateCandidate;

/// Merge external fields onto the primary record.
///
/// Starts from the matched record, or a fresh one seeded with the external
/// identifier when there is no match. Name, address, and preferred store
/// copy unconditionally. Companies get their registration number and kind
/// set and keep their bonus points untouched; persons get kind `Person`
/// and the external bonus-point balance.
#[must_use]
pub fn merge_customer(existing: Option<Customer>, external: &ExternalCustomer) -> Customer {
    let mut customer = existing
        .unwrap_or_else(|| Customer::with_external_id(external.external_id.clone()));

    customer.name = Some(external.name.clone());
    customer.address = external.address.clone();
    customer.preferred_store = external.preferred_store.clone();

    if let Some(number) = &external.company_number {
        customer.company_number = Some(number.clone());
        customer.kind = Some(CustomerKind::Company);
    } else {
        customer.kind = Some(CustomerKind::Person);
        apply_bonus_points(&mut customer, external);
    }

    customer
}

/// Merge the restricted duplicate field set onto a duplicate candidate.
///
/// A `New` candidate becomes a fresh record seeded with the external
/// identifier. Duplicates take only the name, plus the bonus-point balance
/// when the incoming record is a person.
#[must_use]
pub fn merge_duplicate(candidate: DuplicateCandidate, external: &ExternalCustomer) -> Customer {
    let mut duplicate = match candidate {
        DuplicateCandidate::Existing(customer) => customer,
        DuplicateCandidate::New => Customer::with_external_id(external.external_id.clone()),
    };

    duplicate.name = Some(external.name.clone());
    if !external.is_company() {
        apply_bonus_points(&mut duplicate, external);
    }

    duplicate
}

/// Overwrite the bonus-point balance with the external value.
///
/// Skips the write when the balance already matches; an optimization only,
/// the outcome is identical either way.
fn apply_bonus_points(customer: &mut Customer, external: &ExternalCustomer) {
    if customer.bonus_points != external.bonus_points {
        customer.bonus_points = external.bonus_points;
    }
}
