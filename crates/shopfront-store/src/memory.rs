//! In-memory store implementation.

use std::collections::HashSet;
use std::path::Path;

use shopfront_core::{Entity, Order, Product, User};

use crate::error::{Result, StoreError};
use crate::seed::SeedData;
use crate::Store;

/// Immutable in-memory store.
///
/// Built once at startup and shared read-only. There are no mutating
/// methods, so concurrent readers need no synchronization.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    users: Vec<User>,
    products: Vec<Product>,
    orders: Vec<Order>,
}

impl MemoryStore {
    /// Build a store from the built-in catalog.
    #[must_use]
    pub fn seeded() -> Self {
        let SeedData {
            users,
            products,
            orders,
        } = SeedData::builtin();
        Self {
            users,
            products,
            orders,
        }
    }

    /// Build a store from seed data.
    ///
    /// Embedded `user`/`product` fields on orders are discarded; storage
    /// only keeps the references.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if two records in one collection
    /// share an identifier, or `StoreError::InvalidRecord` if a record has
    /// a zero id, a negative price or total, or a zero quantity.
    pub fn from_seed(seed: SeedData) -> Result<Self> {
        seed.users.iter().try_for_each(validate_user)?;
        seed.products.iter().try_for_each(validate_product)?;
        seed.orders.iter().try_for_each(validate_order)?;

        ensure_unique(Entity::User, seed.users.iter().map(|u| u.id.get()))?;
        ensure_unique(Entity::Product, seed.products.iter().map(|p| p.id.get()))?;
        ensure_unique(Entity::Order, seed.orders.iter().map(|o| o.id.get()))?;

        let orders = seed
            .orders
            .into_iter()
            .map(|order| order.with_references(None, None))
            .collect();

        Ok(Self {
            users: seed.users,
            products: seed.products,
            orders,
        })
    }

    /// Build a store from a JSON seed file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it
    /// contains duplicate identifiers.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let store = Self::from_seed(SeedData::load(path)?)?;
        tracing::info!(
            path = %path.display(),
            users = store.users.len(),
            products = store.products.len(),
            orders = store.orders.len(),
            "Loaded seed file"
        );
        Ok(store)
    }
}

impl Store for MemoryStore {
    fn users(&self) -> &[User] {
        &self.users
    }

    fn products(&self) -> &[Product] {
        &self.products
    }

    fn orders(&self) -> &[Order] {
        &self.orders
    }
}

fn validate_user(user: &User) -> Result<()> {
    check(Entity::User, user.id.get(), user.id.get() >= 1, "id must be at least 1")
}

fn validate_product(product: &Product) -> Result<()> {
    let id = product.id.get();
    check(Entity::Product, id, id >= 1, "id must be at least 1")?;
    check(
        Entity::Product,
        id,
        product.price >= 0.0,
        "price must be non-negative",
    )
}

fn validate_order(order: &Order) -> Result<()> {
    let id = order.id.get();
    check(Entity::Order, id, id >= 1, "id must be at least 1")?;
    check(Entity::Order, id, order.quantity > 0, "quantity must be positive")?;
    check(Entity::Order, id, order.total >= 0.0, "total must be non-negative")
}

fn check(entity: Entity, id: u32, ok: bool, reason: &'static str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidRecord { entity, id, reason })
    }
}

fn ensure_unique(entity: Entity, ids: impl Iterator<Item = u32>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StoreError::DuplicateId { entity, id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{OrderId, ProductId, UserId};
    use std::io::Write;

    #[test]
    fn seeded_lookup_by_id() {
        let store = MemoryStore::seeded();
        let user = store.find_user(UserId::new(1)).unwrap();
        assert_eq!(user.name, "Alice Johnson");
        let product = store.find_product(ProductId::new(4)).unwrap();
        assert_eq!(product.name, "Phone");
        let order = store.find_order(OrderId::new(2)).unwrap();
        assert_eq!(order.status, "pending");
    }

    #[test]
    fn missing_id_is_none_not_default() {
        let store = MemoryStore::seeded();
        assert!(store.find_user(UserId::new(0)).is_none());
        assert!(store.find_user(UserId::new(9999)).is_none());
        assert!(store.find_product(ProductId::new(5)).is_none());
        assert!(store.find_order(OrderId::new(4)).is_none());
    }

    #[test]
    fn collections_keep_definition_order() {
        let store = MemoryStore::seeded();
        let ids: Vec<u32> = store.users().iter().map(|u| u.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn stored_orders_have_no_snapshots() {
        let mut seed = SeedData::builtin();
        let alice = seed.users[0].clone();
        seed.orders[0].user = Some(alice);

        let store = MemoryStore::from_seed(seed).unwrap();
        assert!(store.orders().iter().all(|o| o.user.is_none() && o.product.is_none()));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut seed = SeedData::builtin();
        seed.products.push(Product::new(2, "Another Book", 9.99, "Education", true));

        let err = MemoryStore::from_seed(seed).unwrap_err();
        assert!(matches!(
            err,
            StoreError::DuplicateId {
                entity: Entity::Product,
                id: 2
            }
        ));
    }

    #[test]
    fn zero_id_is_rejected() {
        let mut seed = SeedData::builtin();
        seed.users.push(User::new(0, "Nobody", "nobody@example.com", "user"));

        let err = MemoryStore::from_seed(seed).unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidRecord {
                entity: Entity::User,
                id: 0,
                ..
            }
        ));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut seed = SeedData::builtin();
        seed.orders.push(Order::new(4, 1, 1, 0, 0.0, "pending"));

        let err = MemoryStore::from_seed(seed).unwrap_err();
        assert_eq!(err.to_string(), "invalid order 4: quantity must be positive");
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let mut seed = SeedData::builtin();
        seed.orders.push(Order::new(4, 1, 1, 1, -5.0, "completed"));
        let err = MemoryStore::from_seed(seed).unwrap_err();
        assert_eq!(err.to_string(), "invalid order 4: total must be non-negative");

        let mut seed = SeedData::builtin();
        seed.products.push(Product::new(5, "Refund", -1.0, "Misc", true));
        let err = MemoryStore::from_seed(seed).unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidRecord {
                entity: Entity::Product,
                id: 5,
                ..
            }
        ));
    }

    #[test]
    fn builtin_seed_passes_validation() {
        assert!(MemoryStore::from_seed(SeedData::builtin()).is_ok());
    }

    #[test]
    fn open_reads_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"users": [{{"id": 10, "name": "Zed", "email": "zed@example.com", "role": "admin"}}]}}"#
        )
        .unwrap();

        let store = MemoryStore::open(file.path()).unwrap();
        assert_eq!(store.users().len(), 1);
        assert!(store.find_user(UserId::new(10)).is_some());
        assert!(store.products().is_empty());
    }
}
