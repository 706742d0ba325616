//! HTTP dispatch over reqwest.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{Instrument, debug, info_span, warn};

use crate::config::{HttpConfig, InstanceConfig, PartnerConfig};
use crate::dispatch::{
    DispatchRequest, Dispatcher, FormPart, FormValue, HttpMethod, RequestBody, ResponseEnvelope,
};
use crate::encoding::{ContentTypeTag, FILE_FIELD, Host};
use crate::error::{GreenApiError, Result, TransportError};
use crate::utils::mime::{file_name_of, guess_mime};

/// Header carrying the name of a raw upload.
pub const FILENAME_HEADER: &str = "GA-Filename";

#[derive(Debug, Clone)]
enum Scope {
    Instance(InstanceConfig),
    Partner(PartnerConfig),
}

/// Sends built calls to the platform over HTTP.
///
/// Any HTTP status comes back as a [`ResponseEnvelope`]; only failures to
/// connect, read the response or read an upload source are errors.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    client: reqwest::Client,
    scope: Scope,
}

impl HttpDispatcher {
    /// Dispatcher for calls made on behalf of one instance.
    pub fn for_instance(config: InstanceConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(config.http_config())?,
            scope: Scope::Instance(config),
        })
    }

    /// Dispatcher for partner-scoped calls.
    pub fn for_partner(config: PartnerConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(config.http_config())?,
            scope: Scope::Partner(config),
        })
    }

    /// Replace the HTTP client, e.g. to share a connection pool.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Full URL of `endpoint`. Contains the token; never log it.
    fn url(&self, endpoint: &str, host: Host) -> String {
        match &self.scope {
            Scope::Instance(config) => {
                let base = match host {
                    Host::DefaultHost => config.api_url(),
                    Host::MediaHost => config.media_url(),
                };
                format!(
                    "{}/waInstance{}/{}/{}",
                    base.trim_end_matches('/'),
                    config.id_instance(),
                    endpoint,
                    config.api_token()
                )
            }
            Scope::Partner(config) => format!(
                "{}/partner/{}/{}",
                config.partner_url().trim_end_matches('/'),
                endpoint,
                config.partner_token()
            ),
        }
    }

    async fn execute(
        &self,
        request: DispatchRequest,
    ) -> std::result::Result<ResponseEnvelope, TransportError> {
        let url = self.url(request.endpoint, request.directives.host);
        let builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };

        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(document) => builder.json(&document),
            RequestBody::Form(parts) => builder.multipart(build_form(parts).await?),
            RequestBody::Binary(content) => {
                let tag = request
                    .directives
                    .content_type
                    .unwrap_or_else(|| ContentTypeTag::detect(&content, ""));
                let part = Part::bytes(content)
                    .file_name(tag.file_name.clone())
                    .mime_str(&tag.mime)?;
                builder
                    .header(FILENAME_HEADER, tag.file_name)
                    .multipart(Form::new().part(FILE_FIELD, part))
            }
        };

        let response = builder.send().await.inspect_err(|e| {
            warn!(error = %e, timeout = e.is_timeout(), "request failed");
        })?;
        let status = response.status();
        let body = response.bytes().await.inspect_err(|e| {
            warn!(error = %e, "failed to read response body");
        })?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        Ok(ResponseEnvelope::from_status(
            status.as_u16(),
            status.canonical_reason(),
            body.to_vec(),
        ))
    }
}

/// Connection pool honoring timeouts, proxy, user agent and extra headers.
fn http_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().default_headers(config.header_map()?);
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(timeout) = config.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    if let Some(agent) = &config.user_agent {
        builder = builder.user_agent(agent);
    }
    if let Some(proxy) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy).map_err(|e| {
            GreenApiError::Configuration(format!("proxy {proxy:?} is not usable: {e}"))
        })?;
        builder = builder.proxy(proxy);
    }
    builder
        .build()
        .map_err(|e| GreenApiError::Configuration(format!("cannot build HTTP client: {e}")))
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn dispatch(
        &self,
        request: DispatchRequest,
    ) -> std::result::Result<ResponseEnvelope, TransportError> {
        let span = info_span!(
            "greenapi.dispatch",
            endpoint = request.endpoint,
            method = request.method.as_str()
        );
        self.execute(request).instrument(span).await
    }
}

/// Multipart form from flattened parts. Path parts are read from disk and
/// typed by extension, then by content.
async fn build_form(parts: Vec<FormPart>) -> std::result::Result<Form, TransportError> {
    let mut form = Form::new();
    for FormPart { name, value } in parts {
        form = match value {
            FormValue::Text(text) => form.text(name, text),
            FormValue::FilePath(path) => {
                let bytes = tokio::fs::read(&path).await.map_err(|e| {
                    warn!(path = %path.display(), error = %e, "failed to read upload");
                    TransportError::new(format!("failed to read {}: {e}", path.display()))
                })?;
                let mime = guess_mime(&path, &bytes);
                let file_name = file_name_of(&path.to_string_lossy(), FILE_FIELD);
                let part = Part::bytes(bytes).file_name(file_name).mime_str(&mime)?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}
