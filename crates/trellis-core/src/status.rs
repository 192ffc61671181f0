use serde::Serialize;

use crate::{Error, StatusReason};

/// Overall outcome discriminator carried by a status payload
///
/// This facility only models failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusState {
    Failure,
}

/// Transport-level representation of an [`Error`]
///
/// Serialized as the service's error response body; the `code` field
/// doubles as the transport status code. Pure output, derived on
/// demand and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Always [`StatusState::Failure`]
    pub status: StatusState,
    /// The error's message, verbatim
    pub message: String,
    /// Machine-readable category from the reason mapping
    pub reason: StatusReason,
    /// Cause chain, omitted when the error wraps nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<StatusDetails>,
    /// Numeric status code from the reason mapping
    pub code: u16,
}

/// Diagnostic detail attached to a [`Status`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDetails {
    /// One entry per link of the wrapped-cause chain
    pub causes: Vec<StatusCause>,
}

/// A single link of the wrapped-cause chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCause {
    /// That link's display text
    pub message: String,
}

impl Error {
    /// Status payload for this error
    #[must_use]
    pub fn status(&self) -> Status {
        Status {
            status: StatusState::Failure,
            message: self.message().to_owned(),
            reason: self.reason().status_reason(),
            details: self.status_details(),
            code: self.reason().code().as_u16(),
        }
    }

    /// Cause list derived from the wrapped chain
    ///
    /// Walks from the direct cause, stepping through the standard
    /// source chain until it ends. An empty chain yields `None`, not an
    /// empty list.
    #[must_use]
    pub fn status_details(&self) -> Option<StatusDetails> {
        let mut causes = Vec::new();
        let mut link = self.cause();
        while let Some(err) = link {
            causes.push(StatusCause { message: err.to_string() });
            link = err.source();
        }

        if causes.is_empty() {
            None
        } else {
            Some(StatusDetails { causes })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use crate::{Arg, Reason, err};

    use super::*;

    #[test]
    fn wrapped_error_becomes_a_cause_entry() {
        let inner = err!(Reason::NOT_FOUND, "missing");
        let outer = err!(Reason::INTERNAL, "wrapping", inner);

        let status = outer.status();
        assert_eq!(status.status, StatusState::Failure);
        assert_eq!(status.message, "wrapping");
        assert_eq!(status.reason, StatusReason::InternalError);
        assert_eq!(status.code, 500);

        let details = status.details.expect("details present");
        assert_eq!(details.causes.len(), 1);
        assert_eq!(details.causes[0].message, "not found; missing");
    }

    #[test]
    fn chain_is_walked_to_the_bottom() {
        let io_err = io::Error::other("connection reset");
        let inner = err!(Reason::NOT_FOUND, "missing", Arg::cause(io_err));
        let outer = err!(Reason::INTERNAL, "wrapping", inner);

        let details = outer.status().details.expect("details present");
        let messages: Vec<&str> = details.causes.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, ["not found; missing", "connection reset"]);
    }

    #[test]
    fn no_cause_means_absent_details() {
        let status = err!(Reason::INVALID, "bad field").status();
        assert!(status.details.is_none());
    }

    #[test]
    fn status_is_idempotent() {
        let inner = err!(Reason::NOT_FOUND, "missing");
        let outer = err!(Reason::INTERNAL, "wrapping", inner);
        assert_eq!(outer.status(), outer.status());
    }

    #[test]
    fn serializes_with_the_wire_shape() {
        let inner = err!(Reason::NOT_FOUND, "missing");
        let outer = err!(Reason::INTERNAL, "wrapping", inner);

        let json = serde_json::to_value(outer.status()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "Failure",
                "message": "wrapping",
                "reason": "InternalError",
                "details": { "causes": [{ "message": "not found; missing" }] },
                "code": 500,
            })
        );
    }

    #[test]
    fn absent_details_are_omitted_from_the_wire() {
        let json = serde_json::to_value(err!(Reason::INVALID, "bad field").status()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "Failure",
                "message": "bad field",
                "reason": "BadRequest",
                "code": 400,
            })
        );
    }
}
