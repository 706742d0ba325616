//! Category façades.
//!
//! One struct per capability area, one method per remote operation. All of
//! them go through [`Caller`], so every method has the same shape:
//!
//! ```text
//! POST: builder(args, options, rules) -> Caller::post(endpoint, request, transfer)
//! GET:  Caller::get(endpoint)
//! ```
//!
//! `Caller::post` stops on a builder error before anything is encoded or
//! dispatched.

use serde::Serialize;
use tracing::debug;

use crate::dispatch::{DispatchRequest, Dispatcher, HttpMethod, RequestBody, ResponseEnvelope};
use crate::encoding::{EncodingDirectives, Transfer, shape_body};
use crate::error::Result;
use crate::request::encode;
use crate::validation::ValidationRules;

mod account;
mod groups;
mod partner;
mod queues;
mod readmark;
mod sending;
mod service;

pub use account::AccountApi;
pub use groups::GroupsApi;
pub use partner::PartnerApi;
pub use queues::QueuesApi;
pub use readmark::ReadMarkApi;
pub use sending::SendingApi;
pub use service::ServiceApi;

/// Borrowed dispatch context shared by all façades of one client.
#[derive(Clone, Copy)]
pub(crate) struct Caller<'a> {
    dispatcher: &'a dyn Dispatcher,
    rules: &'a ValidationRules,
}

impl<'a> Caller<'a> {
    pub(crate) fn new(dispatcher: &'a dyn Dispatcher, rules: &'a ValidationRules) -> Self {
        Self { dispatcher, rules }
    }

    pub(crate) fn rules(&self) -> &'a ValidationRules {
        self.rules
    }

    pub(crate) async fn get(&self, endpoint: &'static str) -> Result<ResponseEnvelope> {
        self.send(DispatchRequest {
            method: HttpMethod::Get,
            endpoint,
            body: RequestBody::Empty,
            directives: EncodingDirectives::structured(),
        })
        .await
    }

    pub(crate) async fn post<T: Serialize>(
        &self,
        endpoint: &'static str,
        request: Result<T>,
        transfer: Transfer<'_>,
    ) -> Result<ResponseEnvelope> {
        let request = {
            let built = request.inspect_err(|e| {
                debug!(
                    endpoint,
                    field = e.field().unwrap_or_default(),
                    error = %e,
                    "request rejected before dispatch"
                );
            })?;
            let directives = transfer.directives();
            let body = shape_body(encode(&built)?, &directives)?;
            DispatchRequest {
                method: HttpMethod::Post,
                endpoint,
                body,
                directives,
            }
        };
        self.send(request).await
    }

    /// Raw bytes upload; the content type is sniffed from `content`.
    pub(crate) async fn post_bytes(
        &self,
        endpoint: &'static str,
        content: Vec<u8>,
        file_name: &str,
    ) -> Result<ResponseEnvelope> {
        let directives = Transfer::RawBytes {
            content: &content,
            file_name,
        }
        .directives();
        self.send(DispatchRequest {
            method: HttpMethod::Post,
            endpoint,
            body: RequestBody::Binary(content),
            directives,
        })
        .await
    }

    async fn send(&self, request: DispatchRequest) -> Result<ResponseEnvelope> {
        debug!(
            endpoint = request.endpoint,
            method = request.method.as_str(),
            mode = ?request.directives.mode,
            host = ?request.directives.host,
            "dispatching request"
        );
        Ok(self.dispatcher.dispatch(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::GreenApiClient;
    use crate::error::TransportError;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_test::traced_test;

    #[derive(Default)]
    struct Counting(AtomicUsize);

    #[async_trait]
    impl Dispatcher for Counting {
        async fn dispatch(
            &self,
            _request: DispatchRequest,
        ) -> std::result::Result<ResponseEnvelope, TransportError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(ResponseEnvelope::new(200, "OK", Vec::new()))
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn logs_dispatch_and_rejection() {
        let counter = Arc::new(Counting::default());
        let client = GreenApiClient::with_dispatcher(counter.clone());

        client
            .read_mark()
            .read_chat("79001234567@c.us")
            .await
            .unwrap();
        assert!(logs_contain("dispatching request"));
        assert!(logs_contain("readChat"));

        client.read_mark().read_chat("nope").await.unwrap_err();
        assert!(logs_contain("request rejected before dispatch"));
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }
}
