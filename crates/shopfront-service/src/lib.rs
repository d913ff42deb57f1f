//! Shopfront HTTP API Service.
//!
//! This crate exposes the read-only catalog over HTTP:
//!
//! - Users, products and orders, with list filters and lookup by id
//! - Orders enriched with the referenced user and product
//! - Aggregate statistics
//! - Health, service info and endpoint docs
//!
//! # Response envelope
//!
//! Every `/api` response is `{success, count?, data?, message?}`. Lookups
//! with a malformed id answer 400, missing records answer 404.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers are async for the router

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use response::ApiResponse;
pub use routes::create_router;
pub use state::AppState;
