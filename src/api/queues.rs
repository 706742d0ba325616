use super::Caller;
use crate::dispatch::ResponseEnvelope;
use crate::error::Result;

/// Outgoing message queue and incoming webhook queue.
pub struct QueuesApi<'a> {
    caller: Caller<'a>,
}

impl<'a> QueuesApi<'a> {
    pub(crate) fn new(caller: Caller<'a>) -> Self {
        Self { caller }
    }

    pub async fn show_messages_queue(&self) -> Result<ResponseEnvelope> {
        self.caller.get("showMessagesQueue").await
    }

    pub async fn get_messages_count(&self) -> Result<ResponseEnvelope> {
        self.caller.get("getMessagesCount").await
    }

    pub async fn clear_messages_queue(&self) -> Result<ResponseEnvelope> {
        self.caller.get("clearMessagesQueue").await
    }

    pub async fn get_webhooks_count(&self) -> Result<ResponseEnvelope> {
        self.caller.get("getWebhooksCount").await
    }

    pub async fn clear_webhooks_queue(&self) -> Result<ResponseEnvelope> {
        self.caller.get("clearWebhooksQueue").await
    }
}
