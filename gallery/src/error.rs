use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Empty submissions are dropped silently, no notice.
    #[error("Empty passphrase")]
    EmptyPassphrase,

    #[error("The gallery is locked")]
    Locked,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::EmptyPassphrase => StatusCode::BAD_REQUEST.into_response(),
            AppError::Locked => (StatusCode::FORBIDDEN, self.to_string()).into_response(),
        }
    }
}
