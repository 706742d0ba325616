use super::Caller;
use crate::dispatch::ResponseEnvelope;
use crate::encoding::{Host, Transfer};
use crate::error::Result;
use crate::request::sending::{
    Contact, RequestSendContact, SendFileByUploadOption, SendFileByUrlOption, SendMessageOption,
    SendPollOption, build_send_file_by_upload, build_send_file_by_url, build_send_location,
    build_send_message, build_send_poll,
};

/// Outgoing messages, files, polls, locations and contacts.
pub struct SendingApi<'a> {
    caller: Caller<'a>,
}

impl<'a> SendingApi<'a> {
    pub(crate) fn new(caller: Caller<'a>) -> Self {
        Self { caller }
    }

    pub async fn send_message(
        &self,
        chat_id: &str,
        message: &str,
        options: impl IntoIterator<Item = SendMessageOption>,
    ) -> Result<ResponseEnvelope> {
        let request = build_send_message(chat_id, message, options, self.caller.rules());
        self.caller
            .post("sendMessage", request, Transfer::Document)
            .await
    }

    /// Send the local file at `file_path` through the media host. The
    /// recipient sees it as `file_name`.
    pub async fn send_file_by_upload(
        &self,
        chat_id: &str,
        file_path: &str,
        file_name: &str,
        options: impl IntoIterator<Item = SendFileByUploadOption>,
    ) -> Result<ResponseEnvelope> {
        let request =
            build_send_file_by_upload(chat_id, file_path, file_name, options, self.caller.rules());
        self.caller
            .post(
                "sendFileByUpload",
                request,
                Transfer::FileByPath {
                    host: Host::MediaHost,
                },
            )
            .await
    }

    pub async fn send_file_by_url(
        &self,
        chat_id: &str,
        url_file: &str,
        file_name: &str,
        options: impl IntoIterator<Item = SendFileByUrlOption>,
    ) -> Result<ResponseEnvelope> {
        let request =
            build_send_file_by_url(chat_id, url_file, file_name, options, self.caller.rules());
        self.caller
            .post("sendFileByUrl", request, Transfer::Document)
            .await
    }

    /// Upload bytes to the media host and get back a link usable with
    /// [`send_file_by_url`](Self::send_file_by_url). The content type is
    /// detected from `content`; `file_name` only names the upload.
    pub async fn upload_file(
        &self,
        content: impl Into<Vec<u8>>,
        file_name: &str,
    ) -> Result<ResponseEnvelope> {
        self.caller
            .post_bytes("uploadFile", content.into(), file_name)
            .await
    }

    /// Send a poll. `answers` keep their order; 2 to 12, all distinct.
    pub async fn send_poll<S: AsRef<str>>(
        &self,
        chat_id: &str,
        question: &str,
        answers: &[S],
        options: impl IntoIterator<Item = SendPollOption>,
    ) -> Result<ResponseEnvelope> {
        let request = build_send_poll(chat_id, question, answers, options, self.caller.rules());
        self.caller.post("sendPoll", request, Transfer::Document).await
    }

    pub async fn send_location(
        &self,
        chat_id: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<ResponseEnvelope> {
        let request = build_send_location(chat_id, latitude, longitude, self.caller.rules());
        self.caller
            .post("sendLocation", request, Transfer::Document)
            .await
    }

    pub async fn send_contact(&self, chat_id: &str, contact: Contact) -> Result<ResponseEnvelope> {
        let request: Result<_> = self
            .caller
            .rules()
            .validate_chat_id("chatId", chat_id)
            .map(|()| RequestSendContact {
                chat_id: chat_id.to_string(),
                contact,
            })
            .map_err(Into::into);
        self.caller
            .post("sendContact", request, Transfer::Document)
            .await
    }
}
