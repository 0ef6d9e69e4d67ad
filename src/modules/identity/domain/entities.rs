use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored account. Accounts are provisioned outside this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Elevated role flag granting moderation privileges
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn to_caller(&self) -> Caller {
        Caller {
            user_id: self.id,
            username: self.username.clone(),
            is_staff: self.is_staff,
        }
    }
}

/// Identity of the user behind the current request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub user_id: Uuid,
    pub username: String,
    pub is_staff: bool,
}

impl Caller {
    pub fn owns(&self, owner_id: Uuid) -> bool {
        self.user_id == owner_id
    }
}
