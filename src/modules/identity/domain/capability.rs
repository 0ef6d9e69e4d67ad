use super::entities::Caller;
use crate::shared::errors::{AppError, AppResult};

/// Privileges an operation can require of its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Administrator,
}

impl Capability {
    pub fn is_granted_to(&self, caller: &Caller) -> bool {
        match self {
            Capability::Administrator => caller.is_staff,
        }
    }

    /// The single permission gate. Must run before any state mutation.
    pub fn check(&self, caller: &Caller) -> AppResult<()> {
        if self.is_granted_to(caller) {
            return Ok(());
        }

        crate::log_warn!(
            "User {} denied: missing {:?} capability",
            caller.user_id,
            self
        );
        Err(AppError::Forbidden(match self {
            Capability::Administrator => "Admin access required".to_string(),
        }))
    }
}
