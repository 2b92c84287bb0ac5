//! Strongly-typed identifiers for Ludo catalog documents.
//!
//! All identifiers in Ludo are:
//! - **Strongly typed**: Prevents mixing up different ID types at compile time
//! - **Lexicographically sortable**: ULIDs encode creation time and sort naturally
//! - **Globally unique**: No coordination required for generation
//!
//! # Example
//!
//! ```rust
//! use ludo_core::id::{ComponentId, StepId};
//!
//! let component = ComponentId::generate();
//! let step = StepId::generate();
//!
//! // IDs are different types - this won't compile:
//! // let wrong: ComponentId = step;
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

use crate::error::{Error, Result};

/// A unique identifier for an architecture component in the catalog.
///
/// Components are the seeded building blocks of the explained platform
/// (load balancer, CDN, game server cluster, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(Ulid);

impl ComponentId {
    /// Generates a new unique component ID.
    ///
    /// Uses ULID generation which is:
    /// - Lexicographically sortable by creation time
    /// - Globally unique without coordination
    /// - URL-safe and case-insensitive
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::new())
    }

    /// Creates a component ID from a raw ULID.
    #[must_use]
    pub const fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Returns the underlying ULID.
    #[must_use]
    pub const fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ComponentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ulid::from_string(s)
            .map(Self)
            .map_err(|e| Error::InvalidInput(format!("invalid component ID '{s}': {e}")))
    }
}

/// A unique identifier for a request-flow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(Ulid);

impl StepId {
    /// Generates a new unique step ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::new())
    }

    /// Creates a step ID from a raw ULID.
    #[must_use]
    pub const fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Returns the underlying ULID.
    #[must_use]
    pub const fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StepId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ulid::from_string(s)
            .map(Self)
            .map_err(|e| Error::InvalidInput(format!("invalid step ID '{s}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_id_round_trips_through_display() {
        let id = ComponentId::generate();
        let parsed: ComponentId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn component_id_rejects_garbage() {
        let err = "not-a-ulid".parse::<ComponentId>().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn ids_are_unique() {
        let a = StepId::generate();
        let b = StepId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let id = ComponentId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
