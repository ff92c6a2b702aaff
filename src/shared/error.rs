//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("La petición contiene campos inválidos")]
    Validation(Vec<String>),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Failure detail surfaced to API clients: the driver message followed by
    /// the root-cause message, when one exists.
    pub fn detail(&self) -> String {
        match self {
            AppError::Database(e) => chain_detail(e),
            AppError::Io(e) => chain_detail(e),
            other => other.to_string(),
        }
    }
}

fn chain_detail(e: &(dyn std::error::Error)) -> String {
    match e.source() {
        Some(source) => format!("{}: {}", e, source),
        None => e.to_string(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound(mensaje) => {
                (StatusCode::NOT_FOUND, json!({ "mensaje": mensaje }))
            }
            AppError::BadRequest(mensaje) => {
                (StatusCode::BAD_REQUEST, json!({ "mensaje": mensaje }))
            }
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, json!({ "errors": errors }))
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "mensaje": "Error al realizar la consulta en la BD",
                        "error": self.detail(),
                    }),
                )
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "mensaje": "Error al acceder al almacenamiento de archivos",
                        "error": self.detail(),
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
