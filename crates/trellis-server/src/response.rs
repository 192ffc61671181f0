use axum::Json;
use axum::response::{IntoResponse, Response};
use trellis_core::Error;

/// Result type for handlers that fail with a structured error
pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper turning a [`trellis_core::Error`] into an HTTP response
///
/// The response body is the serialized status payload and the
/// transport status code is the reason's numeric code. Server-side
/// failures are logged before responding; client errors are not.
#[derive(Debug)]
pub struct ApiError(Error);

impl ApiError {
    /// The wrapped error
    #[must_use]
    pub const fn inner(&self) -> &Error {
        &self.0
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.reason().code();
        if code.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        (code, Json(self.0.status())).into_response()
    }
}
