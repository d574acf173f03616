use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ServiceError;

/// JSON request body that ignores `Content-Type` and rejects anything it
/// cannot decode as a [`ServiceError::Validation`], so clients only ever
/// see 400 for a bad body.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            debug!("Unreadable request body: {}", e);
            ServiceError::Validation("unreadable request body")
        })?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            debug!("Malformed JSON body: {}", e);
            ServiceError::Validation("malformed JSON body")
        })
    }
}
