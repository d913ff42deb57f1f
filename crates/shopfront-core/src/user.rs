//! User records.

use serde::{Deserialize, Serialize};

use crate::UserId;

/// A user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Role, e.g. `admin`, `user` or `moderator`. The set is open.
    pub role: String,
}

impl User {
    /// Create a user record.
    #[must_use]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Whether the role matches, ignoring ASCII case.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.role.eq_ignore_ascii_case(role)
    }
}
