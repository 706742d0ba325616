//! Message sending requests.

use serde::Serialize;

use super::{RequestOption, apply_options};
use crate::error::Result;
use crate::validation::{
    ValidationRules, limits, validate_latitude, validate_longitude, validate_poll_options,
    validate_text_length,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSendMessage {
    pub chat_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quoted_message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendMessageOption {
    /// Send the message as a reply quoting this message id.
    QuotedMessageId(String),
    /// Show a preview for links in the text. The platform default is on.
    LinkPreview(bool),
}

impl RequestOption<RequestSendMessage> for SendMessageOption {
    fn apply(self, r: &mut RequestSendMessage, _rules: &ValidationRules) -> Result<()> {
        match self {
            SendMessageOption::QuotedMessageId(id) => r.quoted_message_id = Some(id),
            SendMessageOption::LinkPreview(v) => r.link_preview = Some(v),
        }
        Ok(())
    }
}

pub fn build_send_message<I>(
    chat_id: &str,
    message: &str,
    options: I,
    rules: &ValidationRules,
) -> Result<RequestSendMessage>
where
    I: IntoIterator<Item = SendMessageOption>,
{
    rules.validate_chat_id("chatId", chat_id)?;
    validate_text_length(&limits::MESSAGE, message)?;

    let mut r = RequestSendMessage {
        chat_id: chat_id.to_string(),
        message: message.to_string(),
        quoted_message_id: None,
        link_preview: None,
    };
    apply_options(&mut r, options, rules)?;
    Ok(r)
}

/// `sendFileByUpload` form; `file` is a local path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSendFileByUpload {
    pub chat_id: String,
    pub file: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendFileByUploadOption {
    Caption(String),
}

impl RequestOption<RequestSendFileByUpload> for SendFileByUploadOption {
    fn apply(self, r: &mut RequestSendFileByUpload, _rules: &ValidationRules) -> Result<()> {
        match self {
            SendFileByUploadOption::Caption(caption) => {
                validate_text_length(&limits::CAPTION, &caption)?;
                r.caption = Some(caption);
            }
        }
        Ok(())
    }
}

pub fn build_send_file_by_upload<I>(
    chat_id: &str,
    file_path: &str,
    file_name: &str,
    options: I,
    rules: &ValidationRules,
) -> Result<RequestSendFileByUpload>
where
    I: IntoIterator<Item = SendFileByUploadOption>,
{
    rules.validate_chat_id("chatId", chat_id)?;

    let mut r = RequestSendFileByUpload {
        chat_id: chat_id.to_string(),
        file: file_path.to_string(),
        file_name: file_name.to_string(),
        caption: None,
    };
    apply_options(&mut r, options, rules)?;
    Ok(r)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSendFileByUrl {
    pub chat_id: String,
    pub url_file: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendFileByUrlOption {
    Caption(String),
}

impl RequestOption<RequestSendFileByUrl> for SendFileByUrlOption {
    fn apply(self, r: &mut RequestSendFileByUrl, _rules: &ValidationRules) -> Result<()> {
        match self {
            SendFileByUrlOption::Caption(caption) => {
                validate_text_length(&limits::CAPTION, &caption)?;
                r.caption = Some(caption);
            }
        }
        Ok(())
    }
}

pub fn build_send_file_by_url<I>(
    chat_id: &str,
    url_file: &str,
    file_name: &str,
    options: I,
    rules: &ValidationRules,
) -> Result<RequestSendFileByUrl>
where
    I: IntoIterator<Item = SendFileByUrlOption>,
{
    rules.validate_chat_id("chatId", chat_id)?;
    rules.validate_url("urlFile", url_file)?;

    let mut r = RequestSendFileByUrl {
        chat_id: chat_id.to_string(),
        url_file: url_file.to_string(),
        file_name: file_name.to_string(),
        caption: None,
    };
    apply_options(&mut r, options, rules)?;
    Ok(r)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    pub option_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSendPoll {
    pub chat_id: String,
    /// The poll question.
    pub message: String,
    pub options: Vec<PollOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_answers: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendPollOption {
    MultipleAnswers(bool),
}

impl RequestOption<RequestSendPoll> for SendPollOption {
    fn apply(self, r: &mut RequestSendPoll, _rules: &ValidationRules) -> Result<()> {
        match self {
            SendPollOption::MultipleAnswers(v) => r.multiple_answers = Some(v),
        }
        Ok(())
    }
}

/// Poll answers keep the caller's order.
pub fn build_send_poll<S, I>(
    chat_id: &str,
    question: &str,
    answers: &[S],
    options: I,
    rules: &ValidationRules,
) -> Result<RequestSendPoll>
where
    S: AsRef<str>,
    I: IntoIterator<Item = SendPollOption>,
{
    rules.validate_chat_id("chatId", chat_id)?;
    validate_text_length(&limits::POLL_QUESTION, question)?;
    validate_poll_options(answers)?;

    let mut r = RequestSendPoll {
        chat_id: chat_id.to_string(),
        message: question.to_string(),
        options: answers
            .iter()
            .map(|a| PollOption {
                option_name: a.as_ref().to_string(),
            })
            .collect(),
        multiple_answers: None,
    };
    apply_options(&mut r, options, rules)?;
    Ok(r)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSendLocation {
    pub chat_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Coordinates are checked after the chat id, latitude first.
pub fn build_send_location(
    chat_id: &str,
    latitude: f64,
    longitude: f64,
    rules: &ValidationRules,
) -> Result<RequestSendLocation> {
    rules.validate_chat_id("chatId", chat_id)?;
    validate_latitude(latitude)?;
    validate_longitude(longitude)?;
    Ok(RequestSendLocation {
        chat_id: chat_id.to_string(),
        latitude,
        longitude,
    })
}

/// A contact card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub phone_contact: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl Contact {
    pub fn new(phone_contact: u64) -> Self {
        Self {
            phone_contact,
            ..Default::default()
        }
    }

    pub fn with_first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    pub fn with_last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = Some(name.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSendContact {
    pub chat_id: String,
    pub contact: Contact,
}
