//! Entity storage for shopfront.
//!
//! This crate holds the three collections in memory and exposes the query
//! operations the service calls.
//!
//! # Architecture
//!
//! - [`Store`]: read access to the collections and lookup by identifier
//! - [`MemoryStore`]: the immutable, process-lifetime implementation
//! - [`enrich`]: embeds user and product snapshots into orders
//! - [`Catalog`]: filter, enrich and aggregate on top of any [`Store`]
//!
//! # Example
//!
//! ```
//! use shopfront_core::UserQuery;
//! use shopfront_store::{Catalog, MemoryStore};
//!
//! let catalog = Catalog::new(MemoryStore::seeded());
//!
//! let admins = catalog.list_users(&UserQuery::default().with_role("admin"));
//! assert_eq!(admins.len(), 1);
//!
//! let alice = catalog.get_user("1").unwrap();
//! assert_eq!(alice.name, "Alice Johnson");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod enrich;
pub mod error;
pub mod memory;
pub mod seed;

pub use catalog::Catalog;
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use seed::SeedData;

use shopfront_core::{Order, OrderId, Product, ProductId, User, UserId};

/// Read-only access to the three collections.
///
/// Collections are returned in definition order. Lookups scan for an exact
/// identifier match and return the first hit.
pub trait Store: Send + Sync {
    /// All users.
    fn users(&self) -> &[User];

    /// All products.
    fn products(&self) -> &[Product];

    /// All orders, without embedded references.
    fn orders(&self) -> &[Order];

    /// Find a user by ID.
    fn find_user(&self, id: UserId) -> Option<&User> {
        self.users().iter().find(|user| user.id == id)
    }

    /// Find a product by ID.
    fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|product| product.id == id)
    }

    /// Find an order by ID.
    fn find_order(&self, id: OrderId) -> Option<&Order> {
        self.orders().iter().find(|order| order.id == id)
    }
}
