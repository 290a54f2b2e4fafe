use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message returned for any failure to authenticate an API request.
pub const PLEASE_LOG_IN: &str = "Please log in";

/// Message returned when login credentials do not match.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `Authorization: Bearer` header.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The bearer token is malformed or its signature does not verify.
    #[error("Bearer token is invalid: {0}")]
    InvalidToken(String),

    /// The bearer token verified but is past its expiry.
    #[error("Bearer token has expired")]
    TokenExpired,

    /// The token names a user that no longer exists.
    #[error("User {0} from bearer token not found in database")]
    UserNotInDatabase(i32),

    /// Login email unknown or password mismatch.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Hashing a password or signing a token failed.
    #[error("Failed to process credentials: {0}")]
    Credential(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to status codes and fixed messages:
/// - `MissingToken` / `InvalidToken` / `TokenExpired` / `UserNotInDatabase` → 401 with "Please log in"
/// - `InvalidCredentials` → 401 with "Invalid email or password"
/// - `Credential` → 500 Internal Server Error with generic message
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid revealing which part of a credential was wrong.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken
            | Self::InvalidToken(_)
            | Self::TokenExpired
            | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: PLEASE_LOG_IN.to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: INVALID_CREDENTIALS.to_string(),
                }),
            )
                .into_response(),
            Self::Credential(msg) => {
                tracing::error!("Credential processing failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
