//! Order enrichment.
//!
//! Resolves an order's `user_id` and `product_id` against the store and
//! embeds owned copies of whatever is found. A dangling reference leaves the
//! field empty.

use shopfront_core::Order;

use crate::Store;

/// Return a copy of `order` with user and product snapshots attached.
#[must_use]
pub fn enrich<S: Store + ?Sized>(store: &S, order: &Order) -> Order {
    let user = store.find_user(order.user_id).cloned();
    let product = store.find_product(order.product_id).cloned();

    if user.is_none() || product.is_none() {
        tracing::debug!(
            order_id = %order.id,
            user_id = %order.user_id,
            product_id = %order.product_id,
            user_found = user.is_some(),
            product_found = product.is_some(),
            "Order references unresolved entity"
        );
    }

    order.clone().with_references(user, product)
}
