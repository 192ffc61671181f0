//! Structured error construction and classification
//!
//! Call sites build a single [`Error`] carrying a machine-readable
//! [`Reason`], a human-readable message, and an optional wrapped
//! cause, then derive a transport [`Status`] payload from it at the
//! HTTP boundary. Layers add context by rewrapping a lower error:
//!
//! ```
//! use trellis_core::{err, Reason};
//!
//! let lower = err!(Reason::NOT_FOUND, "route not configured");
//! let upper = err!(Reason::INTERNAL, "resolving upstream", lower);
//! assert_eq!(upper.to_string(), "internal; resolving upstream");
//! assert_eq!(upper.status().code, 500);
//! ```
//!
//! Domain errors stay decoupled from axum; the server layer owns the
//! conversion into actual HTTP responses.

mod error;
mod reason;
mod status;

pub use error::{Arg, BoxError, Error};
pub use reason::{Reason, StatusReason};
pub use status::{Status, StatusCause, StatusDetails, StatusState};
