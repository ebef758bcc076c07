//! Matching lookup: classify an incoming external record against the store.
//!
//! Pure reads - nothing here writes to the store. The lookup queries up to
//! three distinct keys (external id, master external id, company number)
//! and returns a ranked [`CustomerMatches`] classification for the
//! conflict resolver to act on.

use customer_bridge_core::{CompanyNumber, Customer, ExternalId};
use tracing::debug;

use crate::store::{CustomerStore, StoreError};

/// The lookup key that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTerm {
    /// Matched by the current external identifier.
    ExternalId,
    /// Matched by the identifier the record was originally created under.
    MasterExternalId,
    /// Matched by company registration number.
    CompanyNumber,
}

/// The primary candidate a lookup produced, together with the key that
/// found it.
#[derive(Debug, Clone)]
pub struct PrimaryMatch {
    /// The lookup key that produced this match.
    pub term: MatchTerm,
    /// The matched record.
    pub customer: Customer,
}

/// A record that must be reconciled separately from the primary match.
///
/// The "create a new duplicate" case is an explicit variant rather than an
/// absent record, so there is no ambiguity between "no duplicate" and
/// "duplicate to be freshly created".
#[derive(Debug, Clone)]
pub enum DuplicateCandidate {
    /// An existing store record to update.
    Existing(Customer),
    /// A fresh record to create, seeded from the external identifier.
    New,
}

/// Result of a lookup: at most one primary candidate plus zero or more
/// duplicate candidates.
#[derive(Debug, Clone, Default)]
pub struct CustomerMatches {
    /// The primary candidate, if any key matched.
    pub primary: Option<PrimaryMatch>,
    /// Records to reconcile as duplicates.
    pub duplicates: Vec<DuplicateCandidate>,
}

impl CustomerMatches {
    /// Whether any duplicate candidates were collected.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

/// Look up candidates for an incoming company record.
///
/// Tries the external id first. On a hit, a secondary lookup by master
/// external id catches a record that is already a duplicate of someone
/// else; a distinct hit there joins the duplicate set. With no external-id
/// hit, falls back to the company registration number.
///
/// # Errors
///
/// Propagates any [`StoreError`] from the lookups.
pub async fn find_company_match<S: CustomerStore>(
    store: &S,
    external_id: &ExternalId,
    company_number: &CompanyNumber,
) -> Result<CustomerMatches, StoreError> {
    let mut matches = CustomerMatches::default();

    if let Some(customer) = store.find_by_external_id(external_id).await? {
        debug!(%external_id, "company matched by external id");
        if let Some(duplicate) = store.find_by_master_external_id(external_id).await?
            && duplicate != customer
        {
            debug!(%external_id, "found distinct record by master external id");
            matches.duplicates.push(DuplicateCandidate::Existing(duplicate));
        }
        matches.primary = Some(PrimaryMatch {
            term: MatchTerm::ExternalId,
            customer,
        });
    } else if let Some(customer) = store.find_by_company_number(company_number).await? {
        debug!(%company_number, "company matched by registration number");
        matches.primary = Some(PrimaryMatch {
            term: MatchTerm::CompanyNumber,
            customer,
        });
    }

    Ok(matches)
}

/// Look up candidates for an incoming person record.
///
/// Persons match only by external id.
///
/// # Errors
///
/// Propagates any [`StoreError`] from the lookup.
pub async fn find_person_match<S: CustomerStore>(
    store: &S,
    external_id: &ExternalId,
) -> Result<CustomerMatches, StoreError> {
    let mut matches = CustomerMatches::default();

    if let Some(customer) = store.find_by_external_id(external_id).await? {
        debug!(%external_id, "person matched by external id");
        matches.primary = Some(PrimaryMatch {
            term: MatchTerm::ExternalId,
            customer,
        });
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use customer_bridge_core::Customer;

    use super::*;
    use crate::store::InMemoryStore;

    fn external_id() -> ExternalId {
        ExternalId::new("12345")
    }

    fn company_number() -> CompanyNumber {
        CompanyNumber::new("470813-8895")
    }

    #[tokio::test]
    async fn test_company_match_by_external_id() {
        let store = InMemoryStore::new();
        store.seed(Customer::with_external_id(external_id()));

        let matches = find_company_match(&store, &external_id(), &company_number())
            .await
            .unwrap();

        let primary = matches.primary.as_ref().unwrap();
        assert_eq!(primary.term, MatchTerm::ExternalId);
        assert!(!matches.has_duplicates());
    }

    #[tokio::test]
    async fn test_company_match_collects_distinct_master_id_record() {
        let store = InMemoryStore::new();
        // The primary hit was found by external id only; a second record
        // still carries the id as its master external id.
        let primary = Customer {
            master_external_id: None,
            ..Customer::with_external_id(external_id())
        };
        store.seed(primary);
        let duplicate = Customer {
            master_external_id: Some(external_id()),
            ..Customer::default()
        };
        store.seed(duplicate);

        let matches = find_company_match(&store, &external_id(), &company_number())
            .await
            .unwrap();

        assert!(matches.primary.is_some());
        assert_eq!(matches.duplicates.len(), 1);
        assert!(matches!(
            matches.duplicates.first(),
            Some(DuplicateCandidate::Existing(c)) if c.master_external_id == Some(external_id())
        ));
    }

    #[tokio::test]
    async fn test_company_match_skips_master_id_hit_equal_to_primary() {
        let store = InMemoryStore::new();
        store.seed(Customer::with_external_id(external_id()));

        let matches = find_company_match(&store, &external_id(), &company_number())
            .await
            .unwrap();

        // The same record answers both lookups; it must not be duplicated.
        assert!(matches.primary.is_some());
        assert!(!matches.has_duplicates());
    }

    #[tokio::test]
    async fn test_company_match_falls_back_to_company_number() {
        let store = InMemoryStore::new();
        let customer = Customer {
            company_number: Some(company_number()),
            ..Customer::default()
        };
        store.seed(customer);

        let matches = find_company_match(&store, &external_id(), &company_number())
            .await
            .unwrap();

        let primary = matches.primary.unwrap();
        assert_eq!(primary.term, MatchTerm::CompanyNumber);
    }

    #[tokio::test]
    async fn test_company_match_empty_when_nothing_matches() {
        let store = InMemoryStore::new();

        let matches = find_company_match(&store, &external_id(), &company_number())
            .await
            .unwrap();

        assert!(matches.primary.is_none());
        assert!(!matches.has_duplicates());
    }

    #[tokio::test]
    async fn test_person_match_uses_external_id_only() {
        let store = InMemoryStore::new();
        let by_master_only = Customer {
            master_external_id: Some(external_id()),
            ..Customer::default()
        };
        store.seed(by_master_only);

        let matches = find_person_match(&store, &external_id()).await.unwrap();
        assert!(matches.primary.is_none());

        store.seed(Customer::with_external_id(external_id()));
        let matches = find_person_match(&store, &external_id()).await.unwrap();
        assert_eq!(matches.primary.unwrap().term, MatchTerm::ExternalId);
    }
}
