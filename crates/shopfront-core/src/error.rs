//! Error types for shopfront lookups.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// The collection an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    /// The users collection.
    User,
    /// The products collection.
    Product,
    /// The orders collection.
    Order,
}

impl Entity {
    /// Capitalized name, used at the start of client-facing messages.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Product => "Product",
            Self::Order => "Order",
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Product => "product",
            Self::Order => "order",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by single-entity lookups.
///
/// List queries never produce these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The path identifier is not a well-formed non-negative integer.
    #[error("invalid {entity} id: {raw:?}")]
    InvalidId {
        /// The collection being queried.
        entity: Entity,
        /// The identifier as received.
        raw: String,
    },

    /// The identifier is well-formed but matches nothing.
    ///
    /// This includes digit strings too large for any stored id.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The collection being queried.
        entity: Entity,
        /// The identifier as a decimal string.
        id: String,
    },
}

impl CatalogError {
    /// The collection this error refers to.
    #[must_use]
    pub const fn entity(&self) -> Entity {
        match self {
            Self::InvalidId { entity, .. } | Self::NotFound { entity, .. } => *entity,
        }
    }
}
