use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_valid::ValidationRejection;

use crate::common::ApiResponse;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a request can end with. Store failures are not among them: the
/// repository degrades those to empty results.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not Found")]
    NotFound,

    #[error("Device {0} Not Found")]
    DeviceNotFound(String),

    #[error("Bad Query Params: {0}")]
    Query(#[from] QueryRejection),

    #[error("Bad Path Params: {0}")]
    Path(#[from] PathRejection),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl From<axum_valid::ValidRejection<ApiError>> for ApiError {
    fn from(rejection: axum_valid::ValidRejection<ApiError>) -> Self {
        match rejection {
            ValidationRejection::Valid(error) => ApiError::Validation(error.to_string()),
            ValidationRejection::Inner(error) => error,
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound | ApiError::DeviceNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Query(_) | ApiError::Path(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let body = axum::Json(ApiResponse::<()>::err(
            status_code.as_u16(),
            self.to_string(),
        ));

        (status_code, body).into_response()
    }
}
