use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::commands::AppState;
use crate::shared::errors::AppError;

/// Resolves the `Authorization` header and attaches the `Caller` to the
/// request extensions for downstream handlers.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .map(|value| {
            value
                .to_str()
                .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))
        })
        .transpose()?;

    let caller = state.identity.resolve_bearer(header).await?;

    req.extensions_mut().insert(caller);
    Ok(next.run(req).await)
}
