//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use schoolauth_core::error::{AppError, ErrorCode, ErrorKind};

use crate::dto::response::MessageResponse;

/// An [`AppError`] on its way out of a handler.
///
/// The body is always `{"message": <code>}`. Infrastructure failures are
/// logged here with their detail and reach the client as `server_error`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing code for the wrapped error.
    pub fn code(&self) -> ErrorCode {
        if self.0.kind.is_infrastructure() {
            ErrorCode::ServerError
        } else {
            self.0.code
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, source = ?self.0.source, "Request failed");
        }

        let body = MessageResponse::new(self.code().as_str());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::bad_school("x"), StatusCode::BAD_REQUEST, ErrorCode::BadSchool),
            (AppError::bad_data("x"), StatusCode::BAD_REQUEST, ErrorCode::BadData),
            (
                AppError::invalid_credentials("x"),
                StatusCode::UNAUTHORIZED,
                ErrorCode::BadData,
            ),
            (AppError::login_exists("x"), StatusCode::CONFLICT, ErrorCode::LoginExists),
            (AppError::email_exists("x"), StatusCode::CONFLICT, ErrorCode::EmailExists),
            (
                AppError::database("x"),
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::ServerError,
            ),
            (
                AppError::timeout("x"),
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::ServerError,
            ),
        ];

        for (err, status, code) in cases {
            let api = ApiError::from(err);
            assert_eq!(api.status(), status);
            assert_eq!(api.code(), code);
        }
    }

    #[test]
    fn test_infrastructure_never_leaks_code() {
        let err = AppError::new(ErrorKind::Database, ErrorCode::LoginExists, "odd");
        assert_eq!(ApiError::from(err).code(), ErrorCode::ServerError);
    }
}
