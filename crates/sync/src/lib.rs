//! Customer Bridge Sync - the matching-and-merge engine.
//!
//! This crate reconciles a customer record received from the external source
//! system with the records held in the internal store. Given an
//! [`ExternalCustomer`](customer_bridge_core::ExternalCustomer), it decides
//! which internal record (if any) the external record corresponds to,
//! resolves conflicts between candidates, merges fields with the
//! person/company rules, and persists the result through the
//! [`CustomerStore`](store::CustomerStore) capability trait.
//!
//! # Modules
//!
//! - [`store`] - The store capability trait plus an in-memory implementation
//! - [`matching`] - Lookup by external id / master external id / company
//!   number, and the match classification types
//! - [`resolve`] - Conflict resolution: type conflicts, identifier
//!   conflicts, and demotion of mismatched matches to duplicates
//! - [`merge`] - Field merging with the person/company bonus-point rules
//! - [`engine`] - The orchestrator tying it all together
//! - [`error`] - Engine error types
//!
//! # Example
//!
//! ```rust,ignore
//! use customer_bridge_sync::engine::CustomerSync;
//! use customer_bridge_sync::store::memory::InMemoryStore;
//!
//! let engine = CustomerSync::new(InMemoryStore::default());
//! let result = engine.sync(&external).await?;
//! assert!(result.created);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod engine;
pub mod error;
pub mod matching;
pub mod merge;
pub mod resolve;
pub mod store;

pub use engine::{CustomerSync, SyncResult};
pub use error::SyncError;
pub use store::{CustomerStore, StoreError};
