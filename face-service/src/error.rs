use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::{CommonError, ErrorResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Models still loading")]
    NotReady,

    #[error("{0}")]
    Validation(String),

    #[error("Not Found")]
    NotFound { path: String },

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::NotReady => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CommonError> for ServiceError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::MissingField(_) | CommonError::InvalidData(_) => {
                ServiceError::Validation(err.to_string())
            }
            CommonError::Serialization(_) => ServiceError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ServiceError::PayloadTooLarge(rejection.body_text());
        }
        ServiceError::Validation(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Internal(format!("Image fetch failed: {}", err))
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() && status != StatusCode::SERVICE_UNAVAILABLE {
            tracing::error!("Request failed: {}", self);
        }

        let body = match self {
            ServiceError::NotFound { path } => ErrorResponse::not_found(path),
            other => ErrorResponse::failure(other.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
