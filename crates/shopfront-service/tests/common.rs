//! Common test utilities for shopfront integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use axum::Router;
use axum_test::TestServer;

use shopfront_service::{create_router, AppState, ServiceConfig};
use shopfront_store::{MemoryStore, SeedData};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
}

impl TestHarness {
    /// Create a harness over the built-in catalog.
    pub fn new() -> Self {
        Self::with_store(MemoryStore::seeded())
    }

    /// Create a harness over custom seed data.
    pub fn with_seed(seed: SeedData) -> Self {
        Self::with_store(MemoryStore::from_seed(seed).expect("Invalid seed data"))
    }

    fn with_store(store: MemoryStore) -> Self {
        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            environment: "test".into(),
            ..ServiceConfig::default()
        };

        let state = AppState::new(store, config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server }
    }

    /// GET `path` and return the status code and JSON body.
    pub async fn get_json(&self, path: &str) -> (u16, serde_json::Value) {
        self.query_json(path, &[]).await
    }

    /// GET `path` with query parameters and return the status code and JSON body.
    pub async fn query_json(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> (u16, serde_json::Value) {
        let mut request = self.server.get(path);
        for (key, value) in params {
            request = request.add_query_param(key, value);
        }
        let response = request.await;
        let status = response.status_code().as_u16();
        (status, response.json())
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the `id` of every object in a JSON array.
pub fn ids(data: &serde_json::Value) -> Vec<u64> {
    data.as_array()
        .expect("data should be an array")
        .iter()
        .map(|item| item["id"].as_u64().expect("id should be an integer"))
        .collect()
}
