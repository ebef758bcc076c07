//! Newtype identifiers for type-safe record references.
//!
//! Use the `define_string_id!` macro to create type-safe wrappers around
//! string identifiers owned by the external source system. Internal ids are
//! UUIDs assigned by the store on create and get their own dedicated type.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a type-safe wrapper around a string identifier.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>` and `From<String>` implementations
///
/// # Example
///
/// ```rust
/// # use customer_bridge_core::define_string_id;
/// define_string_id!(ExternalId);
/// define_string_id!(CompanyNumber);
///
/// let id = ExternalId::new("12345");
/// let number = CompanyNumber::new("470813-8895");
///
/// // These are different types, so this won't compile:
/// // let _: ExternalId = number;
/// ```
#[macro_export]
macro_rules! define_string_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the identifier is the empty string.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Identifiers owned by the external source system
define_string_id!(ExternalId);
define_string_id!(CompanyNumber);

/// Internal record identifier, assigned by the store when a record is first
/// created. A record without one has never been persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InternalId(Uuid);

impl InternalId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for InternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for InternalId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<InternalId> for Uuid {
    fn from(id: InternalId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_ids_are_distinct_types() {
        let id = ExternalId::new("12345");
        assert_eq!(id.as_str(), "12345");
        assert_eq!(id.to_string(), "12345");
        assert_eq!(ExternalId::from("12345"), id);
    }

    #[test]
    fn test_string_id_serde_is_transparent() {
        let number = CompanyNumber::new("470813-8895");
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "\"470813-8895\"");
    }

    #[test]
    fn test_internal_ids_are_unique() {
        assert_ne!(InternalId::random(), InternalId::random());
    }
}
