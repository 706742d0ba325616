//! Service requests: contacts, message edits, typing indicators.

use serde::Serialize;

use super::{RequestOption, apply_options};
use crate::error::Result;
use crate::validation::{
    ValidationRules, limits, validate_one_of, validate_text_length, validate_typing_time,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCheckAccount {
    pub phone_number: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEditMessage {
    pub chat_id: String,
    pub message: String,
    pub id_message: String,
}

pub fn build_edit_message(
    chat_id: &str,
    id_message: &str,
    message: &str,
    rules: &ValidationRules,
) -> Result<RequestEditMessage> {
    rules.validate_chat_id("chatId", chat_id)?;
    validate_text_length(&limits::MESSAGE, message)?;
    Ok(RequestEditMessage {
        chat_id: chat_id.to_string(),
        message: message.to_string(),
        id_message: id_message.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDeleteMessage {
    pub chat_id: String,
    pub id_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_sender_delete: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMessageOption {
    /// Delete only on the sender's side.
    OnlySenderDelete(bool),
}

impl RequestOption<RequestDeleteMessage> for DeleteMessageOption {
    fn apply(self, r: &mut RequestDeleteMessage, _rules: &ValidationRules) -> Result<()> {
        match self {
            DeleteMessageOption::OnlySenderDelete(v) => r.only_sender_delete = Some(v),
        }
        Ok(())
    }
}

pub fn build_delete_message<I>(
    chat_id: &str,
    id_message: &str,
    options: I,
    rules: &ValidationRules,
) -> Result<RequestDeleteMessage>
where
    I: IntoIterator<Item = DeleteMessageOption>,
{
    rules.validate_chat_id("chatId", chat_id)?;
    let mut r = RequestDeleteMessage {
        chat_id: chat_id.to_string(),
        id_message: id_message.to_string(),
        only_sender_delete: None,
    };
    apply_options(&mut r, options, rules)?;
    Ok(r)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSendTyping {
    pub chat_id: String,
    /// Milliseconds.
    pub typing_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typing_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendTypingOption {
    /// Override the indicator duration, 1000..=20000 ms.
    TypingTime(u32),
    /// Indicator kind, one of [`limits::TYPING_TYPES`].
    TypingType(String),
}

impl RequestOption<RequestSendTyping> for SendTypingOption {
    fn apply(self, r: &mut RequestSendTyping, _rules: &ValidationRules) -> Result<()> {
        match self {
            SendTypingOption::TypingTime(ms) => {
                validate_typing_time(ms)?;
                r.typing_time = ms;
            }
            SendTypingOption::TypingType(kind) => {
                validate_one_of("typingType", &kind, limits::TYPING_TYPES)?;
                r.typing_type = Some(kind);
            }
        }
        Ok(())
    }
}

pub fn build_send_typing<I>(
    chat_id: &str,
    typing_time: u32,
    options: I,
    rules: &ValidationRules,
) -> Result<RequestSendTyping>
where
    I: IntoIterator<Item = SendTypingOption>,
{
    rules.validate_chat_id("chatId", chat_id)?;
    validate_typing_time(typing_time)?;

    let mut r = RequestSendTyping {
        chat_id: chat_id.to_string(),
        typing_time,
        typing_type: None,
    };
    apply_options(&mut r, options, rules)?;
    Ok(r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationReason;
    use crate::request::encode;
    use serde_json::json;

    const CHAT: &str = "1234567890";

    #[test]
    fn typing_options_are_applied() {
        let r = build_send_typing(
            CHAT,
            5_000,
            [
                SendTypingOption::TypingTime(8_000),
                SendTypingOption::TypingType("upload_photo".into()),
            ],
            &ValidationRules::default(),
        )
        .unwrap();
        assert_eq!(
            encode(&r).unwrap(),
            json!({"chatId": CHAT, "typingTime": 8000, "typingType": "upload_photo"})
        );
    }

    #[test]
    fn typing_rejects_unknown_type_and_bad_time() {
        let err = build_send_typing(
            CHAT,
            5_000,
            [SendTypingOption::TypingType("juggling".into())],
            &ValidationRules::default(),
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("typingType"));

        let err = build_send_typing(CHAT, 500, [], &ValidationRules::default()).unwrap_err();
        match err {
            crate::error::GreenApiError::Validation(v) => assert_eq!(
                v.reason,
                ValidationReason::OutOfRange {
                    min: 1_000,
                    max: 20_000,
                    actual: 500
                }
            ),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn delete_message_flag_is_optional() {
        let r = build_delete_message(CHAT, "42", [], &ValidationRules::default()).unwrap();
        assert_eq!(encode(&r).unwrap(), json!({"chatId": CHAT, "idMessage": "42"}));

        let r = build_delete_message(
            CHAT,
            "42",
            [DeleteMessageOption::OnlySenderDelete(true)],
            &ValidationRules::default(),
        )
        .unwrap();
        assert_eq!(encode(&r).unwrap()["onlySenderDelete"], true);
    }

    #[test]
    fn edit_message_body() {
        let r = build_edit_message(CHAT, "42", "fixed", &ValidationRules::default()).unwrap();
        assert_eq!(
            encode(&r).unwrap(),
            json!({"chatId": CHAT, "message": "fixed", "idMessage": "42"})
        );
    }
}
