//! Error Handling Module
//!
//! - `GreenApiError`: the single error type returned by every façade method
//! - `ValidationError` / `ValidationReason`: input rejected before dispatch
//! - `TransportError`: opaque dispatcher failure, passed through unchanged
//!
//! # Example
//!
//! ```rust,ignore
//! use greenapi::error::{GreenApiError, ValidationReason};
//!
//! match client.read_mark().read_chat("not a chat").await {
//!     Err(GreenApiError::Validation(err)) => {
//!         assert_eq!(err.field, "chatId");
//!         assert!(matches!(err.reason, ValidationReason::InvalidChatId));
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

mod conversions;
pub mod types;

pub use types::*;
