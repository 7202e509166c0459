//! HTTP routes and handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use iris_core::{PredictRequest, PredictResponse};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = state.config.cors.layer();

    Router::new()
        .route("/health", get(health_check))
        .route("/predict", post(predict))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// Predict the species of one flower
async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let Json(req) = payload?;
    debug!("Received feature_array: {:?}", req.feature_array.values());

    let prediction = state.classifier.predict(&req.feature_array).await?;
    info!(
        "Predicted '{}' with {} in {}us",
        prediction.label,
        state.classifier.name(),
        prediction.latency_us
    );

    Ok(Json(PredictResponse::single(prediction.label)))
}

async fn fallback() -> AppError {
    AppError::NotFound
}

/// Error handling
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Body could not be parsed or failed validation
    #[error("{message}")]
    InvalidRequest { status: StatusCode, message: String },

    /// The model failed on well-formed input
    #[error("{0}")]
    Model(String),

    #[error("Not found")]
    NotFound,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest { status, .. } => *status,
            AppError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidRequest { .. } => "invalid_request_error",
            AppError::Model(_) => "model_error",
            AppError::NotFound => "not_found_error",
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<iris_core::Error> for AppError {
    fn from(err: iris_core::Error) -> Self {
        if err.is_client_error() {
            AppError::InvalidRequest {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            }
        } else {
            AppError::Model(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Model(msg) => error!("Prediction failed: {}", msg),
            AppError::InvalidRequest { message, .. } => warn!("Rejected request: {}", message),
            AppError::NotFound => {}
        }

        let body = json!({
            "error": {
                "message": self.to_string(),
                "type": self.error_type(),
            }
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: AppError = iris_core::Error::invalid_input("expected 4").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err: AppError = iris_core::Error::model("shape mismatch").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "model error: shape mismatch");
    }

    #[test]
    fn test_not_found() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.error_type(), "not_found_error");
    }
}
