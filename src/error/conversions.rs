//! Type Conversions for GreenApiError
//!
//! From implementations for error types produced by the crate's stack.

use super::types::{GreenApiError, TransportError};

impl From<serde_json::Error> for GreenApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(format!("request timed out: {err}"))
        } else {
            Self::new(err.to_string())
        }
    }
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {err}"))
    }
}
