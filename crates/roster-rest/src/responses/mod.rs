//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{ErrorResponse, RosterError};
use serde::Serialize;

/// Application error type for Axum.
///
/// Wraps the core error so every handler converts failures to HTTP the
/// same way: the error's own status code plus a `{code, message}` body.
#[derive(Debug)]
pub struct AppError(pub RosterError);

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(ErrorResponse::from_error(&self.0));

        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_status_mapping() {
        let not_found = AppError(RosterError::not_found("User", 1));
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let conflict = AppError(RosterError::conflict("User or Email already exists"));
        assert_eq!(conflict.into_response().status(), StatusCode::BAD_REQUEST);

        let database = AppError(RosterError::Database("down".to_string()));
        assert_eq!(
            database.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
