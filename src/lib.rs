//! greenapi
//!
//! Typed client for the GREEN-API chat platform.
//!
//! Every capability area (account, groups, partner, queues, read marks,
//! sending, service) is a thin façade over one generic dispatch point. A
//! façade method validates its arguments, builds a request object, applies
//! the caller's options in order, serializes it, picks an encoding and hands
//! the result to a [`Dispatcher`]. Nothing reaches the dispatcher unless the
//! whole build succeeded.
//!
//! # Example
//!
//! ```rust,ignore
//! use greenapi::prelude::*;
//!
//! let client = GreenApiClient::new(InstanceConfig::from_env()?)?;
//! let response = client
//!     .sending()
//!     .send_message("79001234567@c.us", "hello", [])
//!     .await?;
//! println!("{} {}", response.status_code, response.text());
//! ```
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod config;
pub mod defaults;
pub mod dispatch;
pub mod encoding;
pub mod error;
pub mod request;
pub mod transport;
pub mod utils;
pub mod validation;

pub use client::{GreenApiClient, PartnerClient};
pub use config::{HttpConfig, InstanceConfig, PartnerConfig};
pub use dispatch::{DispatchRequest, Dispatcher, HttpMethod, RequestBody, ResponseEnvelope};
pub use encoding::{ContentTypeTag, EncodingDirectives, EncodingMode, Host, Transfer};
pub use error::{GreenApiError, Result, TransportError, ValidationError, ValidationReason};
pub use transport::HttpDispatcher;
pub use validation::ValidationRules;

/// Commonly used types, options and façades.
pub mod prelude {
    pub use crate::api::{
        AccountApi, GroupsApi, PartnerApi, QueuesApi, ReadMarkApi, SendingApi, ServiceApi,
    };
    pub use crate::client::{GreenApiClient, PartnerClient};
    pub use crate::config::{HttpConfig, InstanceConfig, PartnerConfig};
    pub use crate::dispatch::{Dispatcher, ResponseEnvelope};
    pub use crate::error::{GreenApiError, Result};
    pub use crate::request::account::SetSettingsOption;
    pub use crate::request::groups::{CreateGroupOption, UpdateGroupSettingsOption};
    pub use crate::request::partner::CreateInstanceOption;
    pub use crate::request::sending::{
        Contact, SendFileByUploadOption, SendFileByUrlOption, SendMessageOption, SendPollOption,
    };
    pub use crate::request::service::{DeleteMessageOption, SendTypingOption};
    pub use crate::request::{AnyOption, RequestOption, YesNo};
}
