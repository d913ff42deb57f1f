//! API handlers.

pub mod health;
pub mod index;
pub mod orders;
pub mod products;
pub mod stats;
pub mod users;
