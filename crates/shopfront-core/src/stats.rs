//! Summary statistics over the full collections.
//!
//! Aggregation ignores request filters entirely. Status checks here are
//! case-sensitive, unlike the `status` list filter.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Order, Product, User};

/// Aggregate view of all three collections.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of users.
    pub total_users: usize,
    /// Number of products.
    pub total_products: usize,
    /// Number of orders.
    pub total_orders: usize,
    /// Order revenue breakdown.
    pub revenue: RevenueStats,
    /// Product stock breakdown.
    pub products: ProductStats,
    /// User role breakdown.
    pub users: UserStats,
}

/// Revenue from orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RevenueStats {
    /// Sum of `total` over completed orders.
    pub total: f64,
    /// Orders with status exactly `completed`.
    pub completed_orders: usize,
    /// Orders with status exactly `pending`.
    pub pending_orders: usize,
}

/// Stock and category counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductStats {
    /// Products available.
    pub in_stock: usize,
    /// Products unavailable.
    pub out_of_stock: usize,
    /// Distinct categories, in first-seen order.
    pub categories: Vec<String>,
}

/// User counts by role.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserStats {
    /// Role to number of users with it. Only roles present appear.
    pub by_role: BTreeMap<String, usize>,
}

impl Stats {
    /// Compute statistics over the given collections.
    #[must_use]
    pub fn compute(users: &[User], products: &[Product], orders: &[Order]) -> Self {
        Self {
            total_users: users.len(),
            total_products: products.len(),
            total_orders: orders.len(),
            revenue: RevenueStats::compute(orders),
            products: ProductStats::compute(products),
            users: UserStats::compute(users),
        }
    }
}

impl RevenueStats {
    /// Sum completed revenue and count completed and pending orders.
    #[must_use]
    pub fn compute(orders: &[Order]) -> Self {
        let mut stats = Self::default();
        for order in orders {
            if order.is_completed() {
                stats.total += order.total;
                stats.completed_orders += 1;
            } else if order.is_pending() {
                stats.pending_orders += 1;
            }
        }
        stats
    }
}

impl ProductStats {
    /// Count stock flags and collect distinct categories.
    #[must_use]
    pub fn compute(products: &[Product]) -> Self {
        let mut stats = Self::default();
        for product in products {
            if product.in_stock {
                stats.in_stock += 1;
            } else {
                stats.out_of_stock += 1;
            }
            if !stats.categories.contains(&product.category) {
                stats.categories.push(product.category.clone());
            }
        }
        stats
    }
}

impl UserStats {
    /// Count users per role.
    #[must_use]
    pub fn compute(users: &[User]) -> Self {
        let mut by_role = BTreeMap::new();
        for user in users {
            *by_role.entry(user.role.clone()).or_insert(0) += 1;
        }
        Self { by_role }
    }
}
