use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use annotator_core::{AnnotatorError, ShareError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Game(#[from] AnnotatorError),

    #[error(transparent)]
    Share(#[from] ShareError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Game(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Share(ShareError::Encode(e)) => {
                tracing::error!("Failed to encode shared game: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to encode game".to_string())
            }
            AppError::Share(e) => {
                tracing::warn!("Rejected share token: {e}");
                (StatusCode::BAD_REQUEST, e.to_string())
            }
        };

        (status, Json(json!({ "detail": message }))).into_response()
    }
}
