use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use chirp_db::StoreError;

/// Every way a service call can fail. Not-found reads are `Ok(None)`, not
/// an error; `NotFound` is reserved for operations that require a row.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(&'static str),

    #[error("not found")]
    NotFound,

    #[error("username already taken")]
    Conflict,

    #[error("invalid credentials")]
    Unauthorized,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl ServiceError {
    /// Lift the typed constraint failures out of a store error.
    pub(crate) fn from_store(err: anyhow::Error) -> Self {
        match err.downcast_ref::<StoreError>() {
            Some(StoreError::Conflict) => Self::Conflict,
            Some(StoreError::UnknownAccount) => {
                Self::Validation("posted_by does not reference an account")
            }
            None => Self::Storage(err),
        }
    }
}

// Client errors carry no body.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(_) | Self::NotFound | Self::Conflict => {
                StatusCode::BAD_REQUEST.into_response()
            }
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            Self::Storage(e) => {
                error!("Storage error: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Run a synchronous service call off the async runtime.
pub(crate) async fn blocking<F, T>(f: F) -> Result<T, ServiceError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        ServiceError::Storage(e.into())
    })?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_conflict_maps_to_conflict() {
        let err = ServiceError::from_store(StoreError::Conflict.into());
        assert!(matches!(err, ServiceError::Conflict));
    }

    #[test]
    fn unknown_account_is_a_validation_failure() {
        let err = ServiceError::from_store(StoreError::UnknownAccount.into());
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn other_store_errors_stay_storage() {
        let err = ServiceError::from_store(anyhow::anyhow!("disk I/O error"));
        assert!(matches!(err, ServiceError::Storage(_)));
    }

    #[test]
    fn status_codes() {
        assert_eq!(ServiceError::Validation("x").into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(ServiceError::NotFound.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(ServiceError::Conflict.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(ServiceError::Unauthorized.into_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ServiceError::Storage(anyhow::anyhow!("boom")).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
