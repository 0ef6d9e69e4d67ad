use std::sync::Arc;

use super::token::TokenDecoder;
use crate::modules::identity::domain::{Caller, UserRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::log_debug;

/// Authentication collaborator: bearer credential in, caller identity out.
pub struct IdentityService {
    user_repo: Arc<dyn UserRepository>,
    decoder: TokenDecoder,
}

impl IdentityService {
    pub fn new(user_repo: Arc<dyn UserRepository>, decoder: TokenDecoder) -> Self {
        Self { user_repo, decoder }
    }

    /// Resolve the raw `Authorization` header value. Accepts both
    /// `Bearer <token>` and a bare token.
    pub async fn resolve_bearer(&self, authorization: Option<&str>) -> AppResult<Caller> {
        let token = authorization
            .map(strip_bearer_prefix)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::Unauthorized("Authorization token is missing".to_string()))?;

        let claims = self.decoder.decode(token)?;
        log_debug!("Resolved token for user_id: {}", claims.user_id);

        let user = self
            .user_repo
            .find_by_id(claims.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user.to_caller())
    }
}

fn strip_bearer_prefix(value: &str) -> &str {
    let value = value.trim();
    match value.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ => value,
    }
}
