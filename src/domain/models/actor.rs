//! Actor
//!
//! The authenticated caller on whose behalf a use case runs.

/// Authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: String,
    pub username: String,
    pub is_admin: bool,
}

impl Actor {
    #[must_use]
    pub fn new(user_id: impl Into<String>, username: impl Into<String>, is_admin: bool) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            is_admin,
        }
    }
}
