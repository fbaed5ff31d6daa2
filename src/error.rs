use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Application error, mapped onto an HTTP response at the routing boundary.
///
/// The not-found taxonomy is deliberately asymmetric: viewing a missing item
/// is a loud 404, while deleting a missing item or removing an absent cart
/// entry never produces this type at all (those are silent no-ops in the
/// catalog and session-state layers).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("resource not found")]
    NotFound,

    #[error("invalid form input: {0}")]
    Invalid(String),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Invalid(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("request failed: {self}");
            // Internals stay out of the response body
            return (status, "internal server error".to_string()).into_response();
        }

        (status, self.to_string()).into_response()
    }
}
