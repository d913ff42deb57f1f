//! Order records and their embedded references.

use serde::{Deserialize, Serialize};

use crate::{OrderId, Product, ProductId, User, UserId};

/// Status value counted as revenue by the aggregator.
pub const STATUS_COMPLETED: &str = "completed";

/// Status value counted as pending by the aggregator.
pub const STATUS_PENDING: &str = "pending";

/// An order placed by a user for a product.
///
/// `user` and `product` are empty in storage. They are filled with owned
/// snapshots when the order is enriched for a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier.
    pub id: OrderId,

    /// Referenced user. Not guaranteed to exist.
    pub user_id: UserId,

    /// Referenced product. Not guaranteed to exist.
    pub product_id: ProductId,

    /// Number of units ordered.
    pub quantity: u32,

    /// Order total in dollars.
    pub total: f64,

    /// Fulfilment status, e.g. `completed` or `pending`.
    pub status: String,

    /// Snapshot of the referenced user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Snapshot of the referenced product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

impl Order {
    /// Create an order record with no embedded references.
    #[must_use]
    pub fn new(
        id: u32,
        user_id: u32,
        product_id: u32,
        quantity: u32,
        total: f64,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: OrderId::new(id),
            user_id: UserId::new(user_id),
            product_id: ProductId::new(product_id),
            quantity,
            total,
            status: status.into(),
            user: None,
            product: None,
        }
    }

    /// Return a copy carrying the given snapshots.
    #[must_use]
    pub fn with_references(mut self, user: Option<User>, product: Option<Product>) -> Self {
        self.user = user;
        self.product = product;
        self
    }

    /// Whether the status matches, ignoring ASCII case.
    #[must_use]
    pub fn has_status(&self, status: &str) -> bool {
        self.status.eq_ignore_ascii_case(status)
    }

    /// Whether the order counts towards revenue. Case-sensitive.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }

    /// Whether the order is awaiting fulfilment. Case-sensitive.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == STATUS_PENDING
    }
}
