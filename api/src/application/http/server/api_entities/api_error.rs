use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use floorplan_core::domain::common::entities::app_errors::CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: i64,
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match &error {
            CoreError::Validation(_) => ApiError::BadRequest(error.to_string()),
            CoreError::NotFound { .. } => ApiError::NotFound(error.to_string()),
            CoreError::Upstream(_) => ApiError::BadGateway(error.to_string()),
            CoreError::Consistency { .. } | CoreError::Store(_) => {
                ApiError::InternalServerError(error.to_string())
            }
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::NotFound(_) => "not_found",
            ApiError::BadGateway(_) => "bad_gateway",
            ApiError::InternalServerError(_) => "internal_server_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            status: i64::from(status.as_u16()),
        };
        (status, Json(body)).into_response()
    }
}
