//! The dispatch boundary.
//!
//! Façades never perform I/O themselves. They describe a call as a
//! [`DispatchRequest`] and hand it to a [`Dispatcher`], which owns the
//! transport, credentials, timeouts and file reads. [`HttpDispatcher`]
//! (`crate::transport`) is the reqwest implementation; tests plug in their
//! own.
//!
//! [`HttpDispatcher`]: crate::transport::HttpDispatcher

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::encoding::EncodingDirectives;
use crate::error::{GreenApiError, TransportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    /// Local file the dispatcher reads and uploads.
    FilePath(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub value: FormValue,
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FormValue::Text(value.into()),
        }
    }

    pub fn path(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            value: FormValue::FilePath(path.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Form(Vec<FormPart>),
    Binary(Vec<u8>),
}

/// One fully built call.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRequest {
    pub method: HttpMethod,
    /// Remote method name, e.g. `sendMessage`.
    pub endpoint: &'static str,
    pub body: RequestBody,
    pub directives: EncodingDirectives,
}

/// Response as received, uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub status_text: String,
    pub body: Vec<u8>,
    /// When the response was received.
    pub timestamp: DateTime<Utc>,
}

impl ResponseEnvelope {
    pub fn new(status_code: u16, status_text: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status_code,
            status_text: status_text.into(),
            body,
            timestamp: Utc::now(),
        }
    }

    /// Envelope whose status text is `"<code> <reason>"`, or just the code
    /// when the status has no known reason phrase (e.g. 466).
    pub fn from_status(status_code: u16, reason: Option<&str>, body: Vec<u8>) -> Self {
        let status_text = match reason.filter(|r| !r.is_empty()) {
            Some(reason) => format!("{status_code} {reason}"),
            None => status_code.to_string(),
        };
        Self::new(status_code, status_text, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, GreenApiError> {
        serde_json::from_slice(&self.body).map_err(|e| GreenApiError::Serialization(e.to_string()))
    }
}

/// Performs a built call and returns what the remote side answered.
///
/// Implementations must be shareable across tasks; the façades hold them as
/// `Arc<dyn Dispatcher>`.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, request: DispatchRequest) -> Result<ResponseEnvelope, TransportError>;
}
