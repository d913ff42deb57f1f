//! The filter pipeline.
//!
//! Stages run in a fixed order and each one narrows the output of the stage
//! before it. Relative order of the input is always preserved.

use crate::{Order, Product, User};

/// Parsed filter for the users collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Role to match.
    pub role: Option<String>,
    /// Requested maximum length.
    pub limit: Option<i64>,
}

impl UserFilter {
    /// Apply role, then limit.
    #[must_use]
    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        let mut out: Vec<&User> = users.iter().collect();
        if let Some(role) = &self.role {
            out.retain(|user| user.has_role(role));
        }
        truncate(&mut out, self.limit);
        out
    }
}

/// Parsed filter for the products collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Category to match.
    pub category: Option<String>,
    /// Stock flag to match.
    pub in_stock: Option<bool>,
    /// Requested maximum length.
    pub limit: Option<i64>,
}

impl ProductFilter {
    /// Apply category, then stock flag, then limit.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut out: Vec<&Product> = products.iter().collect();
        if let Some(category) = &self.category {
            out.retain(|product| product.in_category(category));
        }
        if let Some(in_stock) = self.in_stock {
            out.retain(|product| product.in_stock == in_stock);
        }
        truncate(&mut out, self.limit);
        out
    }
}

/// Parsed filter for the orders collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    /// User id to match. Signed so that a negative value matches nothing.
    pub user_id: Option<i64>,
    /// Status to match.
    pub status: Option<String>,
    /// Requested maximum length.
    pub limit: Option<i64>,
}

impl OrderFilter {
    /// Apply user id, then status, then limit.
    #[must_use]
    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        let mut out: Vec<&Order> = orders.iter().collect();
        if let Some(user_id) = self.user_id {
            out.retain(|order| i64::from(order.user_id.get()) == user_id);
        }
        if let Some(status) = &self.status {
            out.retain(|order| order.has_status(status));
        }
        truncate(&mut out, self.limit);
        out
    }
}

/// Truncate only for a positive limit strictly below the current length.
fn truncate<T>(items: &mut Vec<T>, limit: Option<i64>) {
    let Some(limit) = limit.and_then(|n| usize::try_from(n).ok()) else {
        return;
    };
    if limit > 0 && limit < items.len() {
        items.truncate(limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OrderQuery, ProductQuery, UserQuery};

    fn users() -> Vec<User> {
        vec![
            User::new(1, "Alice Johnson", "alice@example.com", "admin"),
            User::new(2, "Bob Smith", "bob@example.com", "user"),
            User::new(3, "Carol Brown", "carol@example.com", "user"),
            User::new(4, "David Wilson", "david@example.com", "moderator"),
        ]
    }

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, "Laptop", 999.99, "Electronics", true),
            Product::new(2, "Book", 19.99, "Education", true),
            Product::new(3, "Chair", 149.99, "Furniture", false),
            Product::new(4, "Phone", 699.99, "Electronics", true),
        ]
    }

    fn orders() -> Vec<Order> {
        vec![
            Order::new(1, 1, 1, 1, 999.99, "completed"),
            Order::new(2, 2, 2, 2, 39.98, "pending"),
            Order::new(3, 1, 4, 1, 699.99, "completed"),
        ]
    }

    fn ids<T, F: Fn(&T) -> u32>(items: &[&T], id: F) -> Vec<u32> {
        items.iter().map(|item| id(item)).collect()
    }

    #[test]
    fn role_filter_keeps_order_and_ignores_case() {
        let users = users();
        let out = UserQuery::default().with_role("USER").filter().apply(&users);
        assert_eq!(ids(&out, |u| u.id.get()), vec![2, 3]);
    }

    #[test]
    fn unknown_role_yields_empty() {
        let users = users();
        let out = UserQuery::default().with_role("guest").filter().apply(&users);
        assert!(out.is_empty());
    }

    #[test]
    fn limit_boundaries() {
        let products = products();
        let apply = |limit: &str| {
            let out = ProductQuery::default().with_limit(limit).filter().apply(&products);
            ids(&out, |p| p.id.get())
        };
        assert_eq!(apply("0"), vec![1, 2, 3, 4]);
        assert_eq!(apply("-1"), vec![1, 2, 3, 4]);
        assert_eq!(apply("abc"), vec![1, 2, 3, 4]);
        assert_eq!(apply("2"), vec![1, 2]);
        assert_eq!(apply("3"), vec![1, 2, 3]);
        assert_eq!(apply("4"), vec![1, 2, 3, 4]);
        assert_eq!(apply("100"), vec![1, 2, 3, 4]);
    }

    #[test]
    fn limit_applies_after_filtering() {
        let products = products();
        let out = ProductQuery::default()
            .with_category("electronics")
            .with_limit("1")
            .filter()
            .apply(&products);
        assert_eq!(ids(&out, |p| p.id.get()), vec![1]);
    }

    #[test]
    fn category_then_stock_narrow_sequentially() {
        let products = products();
        let out = ProductQuery::default()
            .with_category("Electronics")
            .with_in_stock("false")
            .filter()
            .apply(&products);
        assert!(out.is_empty());

        let out = ProductQuery::default()
            .with_in_stock("nope")
            .filter()
            .apply(&products);
        assert_eq!(ids(&out, |p| p.id.get()), vec![3]);
    }

    #[test]
    fn in_stock_partitions_products() {
        let products = products();
        let in_stock = ProductQuery::default()
            .with_in_stock("true")
            .filter()
            .apply(&products);
        let out_of_stock = ProductQuery::default()
            .with_in_stock("false")
            .filter()
            .apply(&products);
        assert_eq!(in_stock.len() + out_of_stock.len(), products.len());
        assert!(in_stock.iter().all(|p| p.in_stock));
        assert!(out_of_stock.iter().all(|p| !p.in_stock));
    }

    #[test]
    fn user_id_and_status_compose() {
        let orders = orders();
        let out = OrderQuery::default()
            .with_user_id("1")
            .with_status("COMPLETED")
            .filter()
            .apply(&orders);
        assert_eq!(ids(&out, |o| o.id.get()), vec![1, 3]);

        let out = OrderQuery::default()
            .with_user_id("2")
            .with_status("completed")
            .filter()
            .apply(&orders);
        assert!(out.is_empty());
    }

    #[test]
    fn malformed_user_id_is_skipped_not_empty() {
        let orders = orders();
        let out = OrderQuery::default()
            .with_user_id("one")
            .filter()
            .apply(&orders);
        assert_eq!(out.len(), 3);

        let out = OrderQuery::default()
            .with_user_id("-1")
            .filter()
            .apply(&orders);
        assert!(out.is_empty());
    }

    #[test]
    fn status_match_is_exact() {
        let orders = orders();
        let out = OrderQuery::default()
            .with_status("complete")
            .filter()
            .apply(&orders);
        assert!(out.is_empty());
    }
}
