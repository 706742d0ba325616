use super::Caller;
use crate::dispatch::ResponseEnvelope;
use crate::encoding::Transfer;
use crate::error::Result;
use crate::request::readmark::build_chat;
use crate::request::service::{
    DeleteMessageOption, RequestCheckAccount, SendTypingOption, build_delete_message,
    build_edit_message, build_send_typing,
};

/// Contacts, chats and message maintenance.
pub struct ServiceApi<'a> {
    caller: Caller<'a>,
}

impl<'a> ServiceApi<'a> {
    pub(crate) fn new(caller: Caller<'a>) -> Self {
        Self { caller }
    }

    /// Whether `phone_number` has an account on the platform.
    pub async fn check_account(&self, phone_number: u64) -> Result<ResponseEnvelope> {
        let request = RequestCheckAccount { phone_number };
        self.caller
            .post("CheckAccount", Ok(request), Transfer::Document)
            .await
    }

    pub async fn get_avatar(&self, chat_id: &str) -> Result<ResponseEnvelope> {
        let request = build_chat(chat_id, self.caller.rules());
        self.caller.post("getAvatar", request, Transfer::Document).await
    }

    pub async fn get_contacts(&self) -> Result<ResponseEnvelope> {
        self.caller.get("getContacts").await
    }

    pub async fn get_contact_info(&self, chat_id: &str) -> Result<ResponseEnvelope> {
        let request = build_chat(chat_id, self.caller.rules());
        self.caller
            .post("getContactInfo", request, Transfer::Document)
            .await
    }

    pub async fn get_chats(&self) -> Result<ResponseEnvelope> {
        self.caller.get("GetChats").await
    }

    pub async fn edit_message(
        &self,
        chat_id: &str,
        id_message: &str,
        message: &str,
    ) -> Result<ResponseEnvelope> {
        let request = build_edit_message(chat_id, id_message, message, self.caller.rules());
        self.caller
            .post("editMessage", request, Transfer::Document)
            .await
    }

    pub async fn delete_message(
        &self,
        chat_id: &str,
        id_message: &str,
        options: impl IntoIterator<Item = DeleteMessageOption>,
    ) -> Result<ResponseEnvelope> {
        let request = build_delete_message(chat_id, id_message, options, self.caller.rules());
        self.caller
            .post("deleteMessage", request, Transfer::Document)
            .await
    }

    pub async fn archive_chat(&self, chat_id: &str) -> Result<ResponseEnvelope> {
        let request = build_chat(chat_id, self.caller.rules());
        self.caller
            .post("archiveChat", request, Transfer::Document)
            .await
    }

    pub async fn unarchive_chat(&self, chat_id: &str) -> Result<ResponseEnvelope> {
        let request = build_chat(chat_id, self.caller.rules());
        self.caller
            .post("unarchiveChat", request, Transfer::Document)
            .await
    }

    /// Show a typing indicator for `typing_time` milliseconds.
    pub async fn send_typing(
        &self,
        chat_id: &str,
        typing_time: u32,
        options: impl IntoIterator<Item = SendTypingOption>,
    ) -> Result<ResponseEnvelope> {
        let request = build_send_typing(chat_id, typing_time, options, self.caller.rules());
        self.caller.post("sendTyping", request, Transfer::Document).await
    }
}
