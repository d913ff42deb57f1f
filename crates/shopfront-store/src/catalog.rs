//! Query facade over a [`Store`].
//!
//! These are the operations the HTTP layer calls. List operations never
//! fail; single lookups distinguish a malformed identifier from a missing
//! record.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use shopfront_core::{
    CatalogError, Entity, Order, OrderId, OrderQuery, Product, ProductId, ProductQuery, Result,
    Stats, User, UserId, UserQuery,
};

use crate::enrich::enrich;
use crate::Store;

/// Read-only query operations over a shared store.
#[derive(Debug)]
pub struct Catalog<S> {
    store: Arc<S>,
}

impl<S> Clone for Catalog<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: Store> Catalog<S> {
    /// Wrap a store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::from_shared(Arc::new(store))
    }

    /// Wrap an already shared store.
    #[must_use]
    pub fn from_shared(store: Arc<S>) -> Self {
        Self { store }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// List users matching `query`.
    #[must_use]
    pub fn list_users(&self, query: &UserQuery) -> Vec<User> {
        let filter = query.filter();
        let users: Vec<User> = filter
            .apply(self.store.users())
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(?filter, count = users.len(), "Listed users");
        users
    }

    /// Get one user by raw path identifier.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidId` if `raw_id` is not a non-negative
    /// integer, or `CatalogError::NotFound` if no user has that id.
    pub fn get_user(&self, raw_id: &str) -> Result<User> {
        lookup(Entity::User, raw_id, |id: UserId| self.store.find_user(id).cloned())
    }

    /// List products matching `query`.
    #[must_use]
    pub fn list_products(&self, query: &ProductQuery) -> Vec<Product> {
        let filter = query.filter();
        let products: Vec<Product> = filter
            .apply(self.store.products())
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(?filter, count = products.len(), "Listed products");
        products
    }

    /// Get one product by raw path identifier.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidId` if `raw_id` is not a non-negative
    /// integer, or `CatalogError::NotFound` if no product has that id.
    pub fn get_product(&self, raw_id: &str) -> Result<Product> {
        lookup(Entity::Product, raw_id, |id: ProductId| self.store.find_product(id).cloned())
    }

    /// List orders matching `query`, each enriched with user and product.
    #[must_use]
    pub fn list_orders(&self, query: &OrderQuery) -> Vec<Order> {
        let filter = query.filter();
        let orders: Vec<Order> = filter
            .apply(self.store.orders())
            .into_iter()
            .map(|order| enrich(self.store.as_ref(), order))
            .collect();
        tracing::debug!(?filter, count = orders.len(), "Listed orders");
        orders
    }

    /// Get one order by raw path identifier, enriched.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidId` if `raw_id` is not a non-negative
    /// integer, or `CatalogError::NotFound` if no order has that id.
    pub fn get_order(&self, raw_id: &str) -> Result<Order> {
        lookup(Entity::Order, raw_id, |id: OrderId| {
            self.store
                .find_order(id)
                .map(|order| enrich(self.store.as_ref(), order))
        })
    }

    /// Summary statistics over the unfiltered collections.
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats::compute(
            self.store.users(),
            self.store.products(),
            self.store.orders(),
        )
    }
}

/// Parse `raw` and resolve it with `find`.
///
/// A decimal string too large for the id type cannot match any record, so
/// it is `NotFound` rather than `InvalidId`.
fn lookup<I, T>(entity: Entity, raw: &str, find: impl FnOnce(I) -> Option<T>) -> Result<T>
where
    I: FromStr + fmt::Display + Copy,
{
    match raw.parse::<I>() {
        Ok(id) => find(id).ok_or_else(|| CatalogError::NotFound {
            entity,
            id: id.to_string(),
        }),
        Err(_) if is_decimal(raw) => Err(CatalogError::NotFound {
            entity,
            id: raw.trim_start_matches('+').to_string(),
        }),
        Err(_) => Err(CatalogError::InvalidId {
            entity,
            raw: raw.to_string(),
        }),
    }
}

/// Optional `+` followed by one or more ASCII digits.
fn is_decimal(raw: &str) -> bool {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
