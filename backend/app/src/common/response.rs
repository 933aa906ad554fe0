use axum::response::IntoResponse;
use serde::Serialize;

/// JSON envelope shared by every route: `{code, message, data}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok<M: AsRef<str>>(message: M, data: T) -> Self {
        Self {
            code: 200,
            message: String::from(message.as_ref()),
            data: Some(data),
        }
    }

    pub fn err<M: AsRef<str>>(code: u16, message: M) -> Self {
        Self {
            code,
            message: String::from(message.as_ref()),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}
