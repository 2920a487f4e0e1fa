use axum::BoxError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::types::response::{ErrorBody, ErrorMessage, FieldErrors};

pub(crate) const DEFAULT_HELP_MESSAGE: &str =
    "Check the request against the API documentation and try again.";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Database migration error: {0}")]
    DatabaseMigration(#[from] sqlx::migrate::MigrateError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Header decode error: {0}")]
    HeaderDecode(#[from] axum::http::header::ToStrError),
    #[error("No credentials provided")]
    NoCredentials,
    #[error("Expired token")]
    ExpiredToken,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("Invalid username")]
    InvalidUsername,
    #[error("Invalid password: {0}")]
    InvalidPassword(String),
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Profile not found")]
    ProfileNotFound,
    #[error("Subscription not found")]
    SubscriptionNotFound,
    #[error("Validation failed")]
    Unprocessable(Vec<FieldErrors>),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("{:?}", self);

        let (status, error, message) = match self {
            Error::Sql(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ERROR_INTERNAL_SERVER_ERROR",
                ErrorMessage::Text("SQL error".into()),
            ),
            Error::Jwt(_) => (
                StatusCode::UNAUTHORIZED,
                "ERROR_UNAUTHORIZED",
                ErrorMessage::Text("Invalid token".into()),
            ),
            Error::Bcrypt(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ERROR_INTERNAL_SERVER_ERROR",
                ErrorMessage::Text("Password hashing error".into()),
            ),
            Error::Serialize(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ERROR_INTERNAL_SERVER_ERROR",
                ErrorMessage::Text("Serialization error".into()),
            ),
            Error::HeaderDecode(_) => (
                StatusCode::UNAUTHORIZED,
                "ERROR_UNAUTHORIZED",
                ErrorMessage::Text("Malformed authorization header".into()),
            ),
            Error::NoCredentials => (
                StatusCode::UNAUTHORIZED,
                "ERROR_UNAUTHORIZED",
                ErrorMessage::Text("No credentials provided".into()),
            ),
            Error::ExpiredToken => (
                StatusCode::UNAUTHORIZED,
                "ERROR_UNAUTHORIZED",
                ErrorMessage::Text("Expired token".into()),
            ),
            Error::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "ERROR_UNAUTHORIZED",
                ErrorMessage::Text("Unauthorized".into()),
            ),
            Error::Forbidden => (
                StatusCode::FORBIDDEN,
                "ERROR_FORBIDDEN",
                ErrorMessage::Text("Forbidden".into()),
            ),
            Error::InvalidUsername => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ERROR_UNPROCESSABLE_ENTITY",
                ErrorMessage::Text("Invalid username".into()),
            ),
            Error::InvalidPassword(reason) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ERROR_UNPROCESSABLE_ENTITY",
                ErrorMessage::Text(reason),
            ),
            Error::UserAlreadyExists => (
                StatusCode::CONFLICT,
                "ERROR_CONFLICT",
                ErrorMessage::Text("User already exists".into()),
            ),
            Error::UserNotFound => (
                StatusCode::NOT_FOUND,
                "ERROR_NOT_FOUND",
                ErrorMessage::Text("User not found".into()),
            ),
            Error::ProfileNotFound => (
                StatusCode::NOT_FOUND,
                "ERROR_NOT_FOUND",
                ErrorMessage::Text("Profile not found".into()),
            ),
            Error::SubscriptionNotFound => (
                StatusCode::NOT_FOUND,
                "ERROR_NOT_FOUND",
                ErrorMessage::Text("Subscription not found".into()),
            ),
            Error::Unprocessable(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ERROR_UNPROCESSABLE_ENTITY",
                ErrorMessage::Fields(fields),
            ),
            Error::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ERROR_INTERNAL_SERVER_ERROR",
                ErrorMessage::Text("Internal server error".into()),
            ),
        };

        (
            status,
            Json(ErrorBody {
                message,
                error,
                help: DEFAULT_HELP_MESSAGE,
            }),
        )
            .into_response()
    }
}

pub(crate) async fn handle_middleware_errors(err: BoxError) -> (StatusCode, &'static str) {
    tracing::error!("Unhandled error: {:?}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_401() {
        let response = Error::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn forbidden_maps_to_403() {
        let response = Error::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn validation_failure_maps_to_422() {
        let response = Error::Unprocessable(vec![]).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = Error::ProfileNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unmapped_store_failure_maps_to_500() {
        let response = Error::Sql(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
