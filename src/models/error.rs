use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use super::dto::ErrorResponse;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Decode(String),

    #[error("account with id {0} not found")]
    NotFound(i32),

    #[error("database error")]
    Persistence(#[from] sqlx::Error),

    #[error("method not allowed {0}")]
    MethodNotAllowed(Method),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Decode(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if let Error::Persistence(ref e) = self {
            error!("Persistence failure: {:?}", e);
        }
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_has_its_own_status() {
        assert_eq!(
            Error::Validation("invalid id x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(Error::Decode("bad".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::NotFound(3).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::Persistence(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::MethodNotAllowed(Method::PATCH).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn messages_do_not_leak_driver_details() {
        let err = Error::Persistence(sqlx::Error::Protocol("secret detail".into()));
        assert_eq!(err.to_string(), "database error");
        assert_eq!(Error::NotFound(42).to_string(), "account with id 42 not found");
        assert_eq!(
            Error::MethodNotAllowed(Method::PATCH).to_string(),
            "method not allowed PATCH"
        );
    }
}
