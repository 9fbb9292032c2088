use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error("path id does not match payload id")]
    IdentityMismatch,
    #[error("the record was modified concurrently; resubmit your changes")]
    Conflict,
    #[error("no {kind} matches \"{label}\"")]
    UnresolvedReference { kind: &'static str, label: String },
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound | AppError::IdentityMismatch => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::UnresolvedReference { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Conflict => StatusCode::CONFLICT,
            AppError::Db(_) | AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }
        let message = match &self {
            AppError::Validation(errors) => errors.join("; "),
            other => other.to_string(),
        };
        let body = crate::templates::error_page(status, message);
        (status, Html(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
