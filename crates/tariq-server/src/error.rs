use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tariq_core::error::TariqError;

// ---------------------------------------------------------------------------
// AppError, the unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Wrap a poisoned lock or a failed blocking task.
    pub fn internal(msg: impl std::fmt::Display) -> Self {
        Self(anyhow::anyhow!("{msg}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<TariqError>() {
            match e {
                TariqError::NotInitialized => StatusCode::BAD_REQUEST,
                TariqError::RecordNotFound { .. }
                | TariqError::AssignmentNotFound(_)
                | TariqError::EntryNotFound { .. }
                | TariqError::DeleteRequestNotFound(_) => StatusCode::NOT_FOUND,
                TariqError::EmptyField(_)
                | TariqError::UnknownTable(_)
                | TariqError::UnknownEntryKind(_)
                | TariqError::UnknownShift(_) => StatusCode::BAD_REQUEST,
                TariqError::Analysis(_) => StatusCode::BAD_GATEWAY,
                TariqError::Io(_) | TariqError::Yaml(_) | TariqError::Json(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
