//! Error types for the menu cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::Day;

// == Menu Error Enum ==
/// Unified error type for the menu cache server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// Required query parameter absent or empty
    #[error("Missing location or date")]
    MissingParams,

    /// Date parameter is not a valid `YYYY-MM-DD` calendar date
    #[error("Invalid date")]
    InvalidDate,

    /// The requested day's menu could not be obtained from cache or upstream
    #[error("Failed to fetch {0}'s menu")]
    UpstreamUnavailable(Day),
}

// == IntoResponse Implementation ==
// Bodies are plain text to match the wire contract of the menu endpoints.
impl IntoResponse for MenuError {
    fn into_response(self) -> Response {
        let status = match &self {
            MenuError::MissingParams | MenuError::InvalidDate => StatusCode::BAD_REQUEST,
            MenuError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
        };

        (status, self.to_string()).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the menu cache server.
pub type Result<T> = std::result::Result<T, MenuError>;
