use std::fmt;

use http::StatusCode;
use serde::Serialize;

/// Classification of an error into a fixed category
///
/// Stored as a raw code (the `http::StatusCode` pattern) so values
/// outside the named set still classify: they fall back to the
/// internal-error mapping instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reason(i32);

impl Reason {
    /// No classification; the default
    pub const UNKNOWN: Self = Self(0);
    /// Request was malformed or failed validation
    pub const INVALID: Self = Self(1);
    /// Missing or rejected credentials
    pub const UNAUTHORIZED: Self = Self(2);
    /// Referenced resource does not exist
    pub const NOT_FOUND: Self = Self(3);
    /// Request conflicts with the current state of the resource
    pub const CONFLICT: Self = Self(4);
    /// Failure inside the service itself
    pub const INTERNAL: Self = Self(5);
    /// Requested operation is not supported
    pub const NOT_IMPLEMENTED: Self = Self(6);

    /// Build from a raw classification code
    #[must_use]
    pub const fn from_raw(code: i32) -> Self {
        Self(code)
    }

    /// Raw classification code
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        self.0
    }

    /// Machine-readable reason for the status payload
    #[must_use]
    pub const fn status_reason(self) -> StatusReason {
        match self {
            Self::INVALID => StatusReason::BadRequest,
            Self::UNAUTHORIZED => StatusReason::Unauthorized,
            Self::NOT_FOUND => StatusReason::NotFound,
            Self::CONFLICT => StatusReason::Conflict,
            _ => StatusReason::InternalError,
        }
    }

    /// Transport status code for this classification
    #[must_use]
    pub const fn code(self) -> StatusCode {
        match self {
            Self::INVALID => StatusCode::BAD_REQUEST,
            Self::UNAUTHORIZED => StatusCode::UNAUTHORIZED,
            Self::NOT_FOUND => StatusCode::NOT_FOUND,
            Self::CONFLICT => StatusCode::CONFLICT,
            Self::NOT_IMPLEMENTED => StatusCode::NOT_IMPLEMENTED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UNKNOWN => f.write_str("unknown"),
            Self::INVALID => f.write_str("invalid"),
            Self::UNAUTHORIZED => f.write_str("unauthorized"),
            Self::NOT_FOUND => f.write_str("not found"),
            Self::CONFLICT => f.write_str("conflict"),
            Self::INTERNAL => f.write_str("internal"),
            Self::NOT_IMPLEMENTED => f.write_str("not implemented"),
            Self(code) => write!(f, "unknown ({code})"),
        }
    }
}

/// Machine-readable error category carried in a status payload
///
/// Serialized with the CamelCase wire spelling consumers match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusReason {
    BadRequest,
    Unauthorized,
    NotFound,
    Conflict,
    InternalError,
}

impl StatusReason {
    /// Wire spelling of this reason
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "BadRequest",
            Self::Unauthorized => "Unauthorized",
            Self::NotFound => "NotFound",
            Self::Conflict => "Conflict",
            Self::InternalError => "InternalError",
        }
    }
}

impl fmt::Display for StatusReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
