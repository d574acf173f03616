use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;

use chirp_types::api::Credentials;

use crate::error::{ServiceError, blocking};
use crate::extract::JsonBody;
use crate::state::AppState;

/// POST /register — 200 with the new account, 400 on invalid or taken username.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<Credentials>,
) -> Result<impl IntoResponse, ServiceError> {
    let account = blocking(move || state.accounts.register(&req)).await?;
    Ok(Json(account))
}

/// POST /login — 200 with the matched account, 401 otherwise, including
/// for a body that does not decode.
pub async fn login(
    State(state): State<AppState>,
    body: Result<JsonBody<Credentials>, ServiceError>,
) -> Result<impl IntoResponse, ServiceError> {
    let JsonBody(req) = body.map_err(|e| {
        debug!("Login rejected: {}", e);
        ServiceError::Unauthorized
    })?;
    let account = blocking(move || state.accounts.login(&req)).await?;
    Ok(Json(account))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
