//! Default configuration values.

use std::time::Duration;

/// Platform hosts.
pub mod hosts {
    /// Host for regular API calls.
    pub const API_URL: &str = "https://api.green-api.com";

    /// Host for file uploads.
    pub const MEDIA_URL: &str = "https://media.green-api.com";

    /// Host for partner calls.
    pub const PARTNER_URL: &str = "https://api.green-api.com";
}

/// HTTP client defaults.
pub mod http {
    use super::*;

    /// Default request timeout.
    ///
    /// Uploads to the media host can take a while on slow links, so this is
    /// generous.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Default timeout for establishing a connection.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent header.
    pub const USER_AGENT: &str = concat!("greenapi-rust/", env!("CARGO_PKG_VERSION"));
}

/// Environment variables read by `from_env` constructors.
pub mod env {
    pub const ID_INSTANCE: &str = "GREEN_API_ID_INSTANCE";
    pub const TOKEN_INSTANCE: &str = "GREEN_API_TOKEN_INSTANCE";
    pub const API_URL: &str = "GREEN_API_URL";
    pub const MEDIA_URL: &str = "GREEN_API_MEDIA_URL";
    pub const PARTNER_TOKEN: &str = "GREEN_API_PARTNER_TOKEN";
    pub const PARTNER_URL: &str = "GREEN_API_PARTNER_URL";
    pub const PARTNER_EMAIL: &str = "GREEN_API_PARTNER_EMAIL";
}
