//! Raw query parameters and their lenient parsing.
//!
//! Each list endpoint recognizes a fixed set of optional string parameters.
//! Anything else in the query string is ignored. When a key repeats, the
//! first value wins. Parsing never fails: a value that cannot be
//! interpreted disables its filter.

use serde::Deserialize;

use crate::filter::{OrderFilter, ProductFilter, UserFilter};

/// Query parameters for listing users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserQuery {
    /// Keep users with this role (ASCII case-insensitive).
    pub role: Option<String>,
    /// Keep at most this many users.
    pub limit: Option<String>,
}

impl UserQuery {
    /// Build from decoded `key=value` pairs, keeping the first value of each key.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "role" => first(&mut query.role, value),
                "limit" => first(&mut query.limit, value),
                _ => {}
            }
        }
        query
    }

    /// Set the `role` parameter.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the `limit` parameter.
    #[must_use]
    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    /// Interpret the raw parameters.
    #[must_use]
    pub fn filter(&self) -> UserFilter {
        UserFilter {
            role: text(self.role.as_deref()),
            limit: integer(self.limit.as_deref()),
        }
    }
}

/// Query parameters for listing products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductQuery {
    /// Keep products in this category (ASCII case-insensitive).
    pub category: Option<String>,
    /// Keep products whose stock flag equals this value.
    #[serde(rename = "inStock")]
    pub in_stock: Option<String>,
    /// Keep at most this many products.
    pub limit: Option<String>,
}

impl ProductQuery {
    /// Build from decoded `key=value` pairs, keeping the first value of each key.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "category" => first(&mut query.category, value),
                "inStock" => first(&mut query.in_stock, value),
                "limit" => first(&mut query.limit, value),
                _ => {}
            }
        }
        query
    }

    /// Set the `category` parameter.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the `inStock` parameter.
    #[must_use]
    pub fn with_in_stock(mut self, in_stock: impl Into<String>) -> Self {
        self.in_stock = Some(in_stock.into());
        self
    }

    /// Set the `limit` parameter.
    #[must_use]
    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    /// Interpret the raw parameters.
    #[must_use]
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            category: text(self.category.as_deref()),
            in_stock: flag(self.in_stock.as_deref()),
            limit: integer(self.limit.as_deref()),
        }
    }
}

/// Query parameters for listing orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrderQuery {
    /// Keep orders placed by this user.
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    /// Keep orders with this status (ASCII case-insensitive).
    pub status: Option<String>,
    /// Keep at most this many orders.
    pub limit: Option<String>,
}

impl OrderQuery {
    /// Build from decoded `key=value` pairs, keeping the first value of each key.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "userId" => first(&mut query.user_id, value),
                "status" => first(&mut query.status, value),
                "limit" => first(&mut query.limit, value),
                _ => {}
            }
        }
        query
    }

    /// Set the `userId` parameter.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set the `status` parameter.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the `limit` parameter.
    #[must_use]
    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    /// Interpret the raw parameters.
    #[must_use]
    pub fn filter(&self) -> OrderFilter {
        OrderFilter {
            user_id: integer(self.user_id.as_deref()),
            status: text(self.status.as_deref()),
            limit: integer(self.limit.as_deref()),
        }
    }
}

fn first(slot: &mut Option<String>, value: impl Into<String>) {
    if slot.is_none() {
        *slot = Some(value.into());
    }
}

/// An empty parameter is the same as a missing one.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

fn text(raw: Option<&str>) -> Option<String> {
    present(raw).map(str::to_owned)
}

/// `"true"` in any ASCII case is true; every other value is false.
fn flag(raw: Option<&str>) -> Option<bool> {
    present(raw).map(|s| s.eq_ignore_ascii_case("true"))
}

/// Signed decimal integer, or `None` when the value does not parse.
fn integer(raw: Option<&str>) -> Option<i64> {
    let raw = present(raw)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::debug!(value = %raw, "Ignoring non-integer query parameter");
            None
        }
    }
}
