use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use chirp_types::api::{NewMessage, UpdateMessage};
use chirp_types::models::Message;

use crate::error::{ServiceError, blocking};
use crate::extract::JsonBody;
use crate::state::AppState;

/// 200 with the message as JSON, or 200 with an empty body.
fn message_or_empty(message: Option<Message>) -> Response {
    match message {
        Some(m) => Json(m).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

/// POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<NewMessage>,
) -> Result<impl IntoResponse, ServiceError> {
    let message = blocking(move || state.messages.create(&req)).await?;

    Ok(Json(message))
}

/// GET /messages
pub async fn get_all_messages(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let messages = blocking(move || state.messages.list_all()).await?;
    Ok(Json(messages))
}

/// GET /messages/{message_id}
pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<i32>,
) -> Result<Response, ServiceError> {
    let message = blocking(move || state.messages.find_by_id(message_id)).await?;
    Ok(message_or_empty(message))
}

/// DELETE /messages/{message_id} — responds with the content as it was
/// before removal, or an empty body when nothing was deleted.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<i32>,
) -> Result<Response, ServiceError> {
    let deleted = blocking(move || {
        let Some(before) = state.messages.find_by_id(message_id)? else {
            return Ok(None);
        };
        let removed = state.messages.delete_by_id(message_id)?;
        Ok(removed.then_some(before))
    })
    .await?;

    Ok(message_or_empty(deleted))
}

/// PATCH /messages/{message_id}
pub async fn update_message(
    State(state): State<AppState>,
    Path(message_id): Path<i32>,
    JsonBody(req): JsonBody<UpdateMessage>,
) -> Result<impl IntoResponse, ServiceError> {
    let message =
        blocking(move || state.messages.update(message_id, &req.message_text)).await?;
    Ok(Json(message))
}

/// GET /accounts/{account_id}/messages
pub async fn get_account_messages(
    State(state): State<AppState>,
    Path(account_id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let messages = blocking(move || state.messages.list_by_posted_by(account_id)).await?;
    Ok(Json(messages))
}

#[cfg(test)]
#[path = "messages_test.rs"]
mod tests;
