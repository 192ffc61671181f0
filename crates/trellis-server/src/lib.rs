//! HTTP response layer for trellis errors
//!
//! Converts a [`trellis_core::Error`] into an axum response: the body
//! is the serialized status payload and the transport status code
//! comes from the reason mapping.

mod response;

pub use response::{ApiError, ApiResult};
