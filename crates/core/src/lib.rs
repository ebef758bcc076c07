//! Customer Bridge Core - Shared domain types.
//!
//! This crate provides the customer record types used across all Customer
//! Bridge components:
//! - `sync` - The matching-and-merge engine that reconciles external records
//!   against the internal store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no store access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Identifier newtypes, customer records, addresses, and
//!   shopping lists

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
