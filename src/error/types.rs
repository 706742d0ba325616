//! Core error types.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GreenApiError>;

/// Errors returned by façade methods and request builders.
#[derive(Error, Debug)]
pub enum GreenApiError {
    /// An argument or option value failed validation. Nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An option of the wrong family was passed to a builder.
    #[error("{builder}: option of family `{option}` is not accepted here")]
    Composition {
        builder: &'static str,
        option: &'static str,
    },

    /// The request object could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The dispatcher failed to complete the call.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Client configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GreenApiError {
    /// Create a composition error for `builder` rejecting `option`.
    pub fn composition(builder: &'static str, option: &'static str) -> Self {
        Self::Composition { builder, option }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Wire name of the field that failed validation, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation(err) => Some(err.field),
            _ => None,
        }
    }
}

/// A rejected input value.
///
/// `field` is the wire name of the field (`chatId`, `message`, ...), `value`
/// the offending input as the caller passed it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid `{field}` ({value:?}): {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub value: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: &'static str, value: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            field,
            value: value.into(),
            reason,
        }
    }
}

/// Why a value was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    #[error("not a valid chat identifier")]
    InvalidChatId,

    #[error("not a valid http(s) URL")]
    InvalidUrl,

    #[error("length {actual} exceeds the maximum of {max} characters")]
    TooLong { max: usize, actual: usize },

    #[error("value {actual} is outside {min}..={max}")]
    OutOfRange { min: u64, max: u64, actual: u64 },

    #[error("not a finite number")]
    NotFinite,

    #[error("must lie within -{limit}..={limit} degrees")]
    DegreesOutOfRange { limit: u16 },

    #[error("at least {min} items required, got {actual}")]
    TooFew { min: usize, actual: usize },

    #[error("at most {max} items allowed, got {actual}")]
    TooMany { max: usize, actual: usize },

    #[error("duplicate entry")]
    Duplicate,

    #[error("value is not one of: {}", .allowed.join(", "))]
    NotAllowed { allowed: &'static [&'static str] },
}

/// Opaque failure produced by a [`Dispatcher`](crate::dispatch::Dispatcher).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Transport error: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display_names_field_and_reason() {
        let err = ValidationError::new(
            "message",
            "x",
            ValidationReason::TooLong { max: 1, actual: 2 },
        );
        assert_eq!(
            err.to_string(),
            "invalid `message` (\"x\"): length 2 exceeds the maximum of 1 characters"
        );
    }

    #[test]
    fn not_allowed_lists_vocabulary() {
        let reason = ValidationReason::NotAllowed {
            allowed: &["group", "supergroup"],
        };
        assert_eq!(reason.to_string(), "value is not one of: group, supergroup");
    }

    #[test]
    fn field_is_exposed_only_for_validation() {
        let err: GreenApiError =
            ValidationError::new("chatId", "", ValidationReason::InvalidChatId).into();
        assert!(err.is_validation());
        assert_eq!(err.field(), Some("chatId"));

        let err: GreenApiError = TransportError::new("connection reset").into();
        assert!(err.is_transport());
        assert_eq!(err.field(), None);
    }

    #[test]
    fn composition_error_names_builder_and_family() {
        let err = GreenApiError::composition("createInstance", "SendPoll");
        assert_eq!(
            err.to_string(),
            "createInstance: option of family `SendPoll` is not accepted here"
        );
    }
}
