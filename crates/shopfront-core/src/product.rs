//! Product records.

use serde::{Deserialize, Serialize};

use crate::ProductId;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price in dollars.
    pub price: f64,

    /// Category label, e.g. `Electronics`.
    pub category: String,

    /// Whether the product is currently available.
    pub in_stock: bool,
}

impl Product {
    /// Create a product record.
    #[must_use]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        in_stock: bool,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            category: category.into(),
            in_stock,
        }
    }

    /// Whether the category matches, ignoring ASCII case.
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}
