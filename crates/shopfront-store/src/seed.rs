//! Seed data for the store.
//!
//! The service starts from the built-in catalog unless a JSON seed file is
//! configured. The file has the same shape the API returns:
//!
//! ```json
//! {
//!   "users": [{"id": 1, "name": "...", "email": "...", "role": "admin"}],
//!   "products": [{"id": 1, "name": "...", "price": 9.99, "category": "...", "inStock": true}],
//!   "orders": [{"id": 1, "userId": 1, "productId": 1, "quantity": 1, "total": 9.99, "status": "pending"}]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use shopfront_core::{Order, Product, User};

use crate::error::{Result, StoreError};

/// The three collections, as loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    /// Users, in definition order.
    #[serde(default)]
    pub users: Vec<User>,

    /// Products, in definition order.
    #[serde(default)]
    pub products: Vec<Product>,

    /// Orders, in definition order.
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl SeedData {
    /// The built-in demo catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            users: vec![
                User::new(1, "Alice Johnson", "alice@example.com", "admin"),
                User::new(2, "Bob Smith", "bob@example.com", "user"),
                User::new(3, "Carol Brown", "carol@example.com", "user"),
                User::new(4, "David Wilson", "david@example.com", "moderator"),
            ],
            products: vec![
                Product::new(1, "Laptop", 999.99, "Electronics", true),
                Product::new(2, "Book", 19.99, "Education", true),
                Product::new(3, "Chair", 149.99, "Furniture", false),
                Product::new(4, "Phone", 699.99, "Electronics", true),
            ],
            orders: vec![
                Order::new(1, 1, 1, 1, 999.99, "completed"),
                Order::new(2, 2, 2, 2, 39.98, "pending"),
                Order::new(3, 1, 4, 1, 699.99, "completed"),
            ],
        }
    }

    /// Parse seed data from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialization` if the JSON does not match the
    /// seed shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read seed data from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read, or
    /// `StoreError::Serialization` if it is not valid seed JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }
}
