use serde::{Deserialize, Serialize};

/// Identifier of the single demo account this deployment operates as when no
/// user headers are supplied.
pub const DEMO_USER_ID: &str = "demo-user-id";

/// User context extracted from request headers; owner for every store write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    pub user_id: String,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
}

impl UserContext {
    /// Create a new UserContext with just a user ID
    pub fn new(user_id: String) -> Self {
        Self {
            user_id,
            user_email: None,
            user_name: None,
        }
    }

    /// Create a UserContext with full user information
    pub fn with_details(user_id: String, email: Option<String>, name: Option<String>) -> Self {
        Self {
            user_id,
            user_email: email,
            user_name: name,
        }
    }

    /// Context for the demo account used when requests carry no user headers.
    pub fn demo_user() -> Self {
        Self {
            user_id: DEMO_USER_ID.to_string(),
            user_email: Some("john.doe@example.com".to_string()),
            user_name: Some("John Doe".to_string()),
        }
    }
}

impl Default for UserContext {
    fn default() -> Self {
        Self::demo_user()
    }
}
