//! Core types and query logic for shopfront.
//!
//! This crate provides everything the service needs that does not depend on
//! where the data lives:
//!
//! - **Identifiers**: `UserId`, `ProductId`, `OrderId`
//! - **Entities**: `User`, `Product`, `Order`
//! - **Queries**: `UserQuery`, `ProductQuery`, `OrderQuery` and their parsed filters
//! - **Aggregation**: `Stats` and its sections
//! - **Errors**: `CatalogError`, `Entity`
//!
//! # Leniency
//!
//! Query parameters arrive as raw strings. Malformed numeric parameters are
//! treated as absent rather than rejected, so list queries never fail.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod filter;
pub mod ids;
pub mod order;
pub mod product;
pub mod query;
pub mod stats;
pub mod user;

pub use error::{CatalogError, Entity, Result};
pub use filter::{OrderFilter, ProductFilter, UserFilter};
pub use ids::{IdError, OrderId, ProductId, UserId};
pub use order::{Order, STATUS_COMPLETED, STATUS_PENDING};
pub use product::Product;
pub use query::{OrderQuery, ProductQuery, UserQuery};
pub use stats::{ProductStats, RevenueStats, Stats, UserStats};
pub use user::User;
