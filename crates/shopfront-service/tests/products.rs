//! Product endpoint integration tests.

mod common;

use common::{ids, TestHarness};

// ============================================================================
// Filters
// ============================================================================

#[tokio::test]
async fn list_products_returns_all() {
    let harness = TestHarness::new();

    let (status, body) = harness.get_json("/api/products").await;

    assert_eq!(status, 200);
    assert_eq!(body["count"], 4);
    assert_eq!(body["data"][0]["inStock"], true);
    assert_eq!(body["data"][0]["price"], 999.99);
}

#[tokio::test]
async fn category_filter_is_exact_and_case_insensitive() {
    let harness = TestHarness::new();

    let (_, body) = harness.query_json("/api/products", &[("category", "electronics")]).await;
    assert_eq!(ids(&body["data"]), vec![1, 4]);

    let (_, body) = harness.query_json("/api/products", &[("category", "Electro")]).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn in_stock_partitions_catalog_and_matches_stats() {
    let harness = TestHarness::new();
    let (_, stats) = harness.get_json("/api/stats").await;

    let (_, in_stock) = harness.query_json("/api/products", &[("inStock", "TRUE")]).await;
    let (_, out_of_stock) = harness.query_json("/api/products", &[("inStock", "false")]).await;

    assert_eq!(in_stock["count"], stats["data"]["products"]["in_stock"]);
    assert_eq!(
        out_of_stock["count"],
        stats["data"]["products"]["out_of_stock"]
    );

    let mut all = ids(&in_stock["data"]);
    all.extend(ids(&out_of_stock["data"]));
    all.sort_unstable();
    assert_eq!(all, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn unrecognized_in_stock_value_means_false() {
    let harness = TestHarness::new();

    let (status, body) = harness.query_json("/api/products", &[("inStock", "maybe")]).await;

    assert_eq!(status, 200);
    assert_eq!(ids(&body["data"]), vec![3]);
}

#[tokio::test]
async fn category_and_stock_compose() {
    let harness = TestHarness::new();

    let (_, body) = harness
        .query_json(
            "/api/products",
            &[("category", "Electronics"), ("inStock", "true"), ("limit", "1")],
        )
        .await;

    assert_eq!(ids(&body["data"]), vec![1]);
}

// ============================================================================
// Limit
// ============================================================================

#[tokio::test]
async fn limit_zero_returns_full_list() {
    let harness = TestHarness::new();

    let (_, body) = harness.query_json("/api/products", &[("limit", "0")]).await;

    assert_eq!(ids(&body["data"]), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn limit_two_returns_first_two() {
    let harness = TestHarness::new();

    let (_, body) = harness.query_json("/api/products", &[("limit", "2")]).await;

    assert_eq!(body["count"], 2);
    assert_eq!(ids(&body["data"]), vec![1, 2]);
}

#[tokio::test]
async fn limit_above_length_returns_full_list() {
    let harness = TestHarness::new();

    let (_, body) = harness.query_json("/api/products", &[("limit", "100")]).await;

    assert_eq!(ids(&body["data"]), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn repeated_limit_uses_first_value() {
    let harness = TestHarness::new();

    let (status, body) = harness
        .query_json("/api/products", &[("limit", "3"), ("limit", "1")])
        .await;

    assert_eq!(status, 200);
    assert_eq!(ids(&body["data"]), vec![1, 2, 3]);
}

#[tokio::test]
async fn malformed_limit_is_ignored() {
    let harness = TestHarness::new();

    let (status, body) = harness.query_json("/api/products", &[("limit", "ten")]).await;

    assert_eq!(status, 200);
    assert_eq!(body["count"], 4);
}

// ============================================================================
// Get
// ============================================================================

#[tokio::test]
async fn get_product_success() {
    let harness = TestHarness::new();

    let (status, body) = harness.get_json("/api/products/3").await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["name"], "Chair");
    assert_eq!(body["data"]["inStock"], false);
}

#[tokio::test]
async fn get_product_invalid_id() {
    let harness = TestHarness::new();

    let (status, body) = harness.get_json("/api/products/-1").await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "Invalid product ID");
}

#[tokio::test]
async fn get_product_not_found() {
    let harness = TestHarness::new();

    let (status, body) = harness.get_json("/api/products/5").await;

    assert_eq!(status, 404);
    assert_eq!(body["message"], "Product not found");
}
