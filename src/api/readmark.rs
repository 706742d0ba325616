use super::Caller;
use crate::dispatch::ResponseEnvelope;
use crate::encoding::Transfer;
use crate::error::Result;
use crate::request::readmark::build_chat;

pub struct ReadMarkApi<'a> {
    caller: Caller<'a>,
}

impl<'a> ReadMarkApi<'a> {
    pub(crate) fn new(caller: Caller<'a>) -> Self {
        Self { caller }
    }

    /// Mark every message in the chat as read.
    pub async fn read_chat(&self, chat_id: &str) -> Result<ResponseEnvelope> {
        let request = build_chat(chat_id, self.caller.rules());
        self.caller.post("readChat", request, Transfer::Document).await
    }
}
