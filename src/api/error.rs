//! Error types for vehicle API calls.
//!
//! Every variant renders to a human-readable message; the feedback
//! surface shows that message verbatim, so `Status` carries the text the
//! service put in its error body rather than a generic status line.

use thiserror::Error;

use crate::domain::RecordError;

/// Errors that can occur while talking to the vehicle service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Could not reach the service or the transfer failed.
    #[error("connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The request exceeded the configured timeout.
    #[error("request timed out after {duration}s")]
    Timeout { duration: u64 },

    /// The service answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body was not valid JSON for the expected shape.
    #[error("malformed response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    /// The response decoded but the record itself is unusable.
    #[error("invalid record: {source}")]
    InvalidRecord {
        #[from]
        source: RecordError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_displays_body_message_verbatim() {
        let err = ApiError::Status {
            status: 404,
            message: "Not found".to_string(),
        };
        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn record_error_converts() {
        let err = ApiError::from(RecordError::MissingId);
        assert_eq!(err.to_string(), "invalid record: record has no id");
    }
}
