//! Account requests: instance settings and authorization.

use serde::Serialize;

use super::{RequestOption, YesNo, apply_options};
use crate::error::Result;
use crate::validation::ValidationRules;

/// `setSettings` body. Every field is optional; booleans travel as `YesNo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSetSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_send_messages_milliseconds: Option<u64>,
    #[serde(
        rename = "markIncomingMessagesReaded",
        skip_serializing_if = "Option::is_none"
    )]
    pub mark_incoming_messages_read: Option<YesNo>,
    #[serde(
        rename = "markIncomingMessagesReadedOnReply",
        skip_serializing_if = "Option::is_none"
    )]
    pub mark_incoming_messages_read_on_reply: Option<YesNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outgoing_webhook: Option<YesNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outgoing_message_webhook: Option<YesNo>,
    #[serde(
        rename = "outgoingAPIMessageWebhook",
        skip_serializing_if = "Option::is_none"
    )]
    pub outgoing_api_message_webhook: Option<YesNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_webhook: Option<YesNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming_webhook: Option<YesNo>,
}

/// Optional instance settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetSettingsOption {
    /// URL notifications are posted to. Must be an http(s) URL.
    WebhookUrl(String),
    /// Token sent to the notification server.
    WebhookUrlToken(String),
    /// Delay between outgoing messages, milliseconds.
    DelaySendMessages(u64),
    /// Mark incoming messages as read.
    MarkIncomingMessagesRead(bool),
    /// Mark incoming messages as read when replying through the API.
    MarkIncomingMessagesReadOnReply(bool),
    /// Notify about outgoing message statuses.
    OutgoingWebhook(bool),
    /// Notify about messages sent from the phone.
    OutgoingMessageWebhook(bool),
    /// Notify about messages sent through the API.
    OutgoingApiMessageWebhook(bool),
    /// Notify about authorization state changes.
    StateWebhook(bool),
    /// Notify about incoming messages and files.
    IncomingWebhook(bool),
}

impl RequestOption<RequestSetSettings> for SetSettingsOption {
    fn apply(self, r: &mut RequestSetSettings, rules: &ValidationRules) -> Result<()> {
        match self {
            SetSettingsOption::WebhookUrl(url) => {
                rules.validate_url("webhookUrl", &url)?;
                r.webhook_url = Some(url);
            }
            SetSettingsOption::WebhookUrlToken(token) => r.webhook_url_token = Some(token),
            SetSettingsOption::DelaySendMessages(ms) => {
                r.delay_send_messages_milliseconds = Some(ms)
            }
            SetSettingsOption::MarkIncomingMessagesRead(v) => {
                r.mark_incoming_messages_read = Some(v.into())
            }
            SetSettingsOption::MarkIncomingMessagesReadOnReply(v) => {
                r.mark_incoming_messages_read_on_reply = Some(v.into())
            }
            SetSettingsOption::OutgoingWebhook(v) => r.outgoing_webhook = Some(v.into()),
            SetSettingsOption::OutgoingMessageWebhook(v) => {
                r.outgoing_message_webhook = Some(v.into())
            }
            SetSettingsOption::OutgoingApiMessageWebhook(v) => {
                r.outgoing_api_message_webhook = Some(v.into())
            }
            SetSettingsOption::StateWebhook(v) => r.state_webhook = Some(v.into()),
            SetSettingsOption::IncomingWebhook(v) => r.incoming_webhook = Some(v.into()),
        }
        Ok(())
    }
}

pub fn build_set_settings<I>(options: I, rules: &ValidationRules) -> Result<RequestSetSettings>
where
    I: IntoIterator<Item = SetSettingsOption>,
{
    let mut r = RequestSetSettings::default();
    apply_options(&mut r, options, rules)?;
    Ok(r)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStartAuthorization {
    pub phone_number: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSendAuthorizationCode {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl RequestSendAuthorizationCode {
    /// An empty password counts as none.
    pub fn new(code: impl Into<String>, password: Option<String>) -> Self {
        Self {
            code: code.into(),
            password: password.filter(|p| !p.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSendAuthorizationPassword {
    pub password: String,
}

/// `setProfilePicture` form; `file` is a local path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSetProfilePicture {
    pub file: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GreenApiError, ValidationReason};
    use crate::request::encode;
    use serde_json::json;

    fn rules() -> ValidationRules {
        ValidationRules::default()
    }

    #[test]
    fn no_options_serializes_to_empty_document() {
        let r = build_set_settings([], &rules()).unwrap();
        assert_eq!(encode(&r).unwrap(), json!({}));
    }

    #[test]
    fn state_webhook_maps_to_yes_no_or_absence() {
        let on = build_set_settings([SetSettingsOption::StateWebhook(true)], &rules()).unwrap();
        assert_eq!(encode(&on).unwrap()["stateWebhook"], "yes");

        let off = build_set_settings([SetSettingsOption::StateWebhook(false)], &rules()).unwrap();
        assert_eq!(encode(&off).unwrap()["stateWebhook"], "no");

        let none = build_set_settings([SetSettingsOption::IncomingWebhook(true)], &rules()).unwrap();
        assert!(encode(&none).unwrap().get("stateWebhook").is_none());
    }

    #[test]
    fn all_settings_use_wire_names() {
        let r = build_set_settings(
            [
                SetSettingsOption::WebhookUrl("https://webhook.url".into()),
                SetSettingsOption::WebhookUrlToken("auth_token".into()),
                SetSettingsOption::DelaySendMessages(5000),
                SetSettingsOption::MarkIncomingMessagesRead(true),
                SetSettingsOption::MarkIncomingMessagesReadOnReply(false),
                SetSettingsOption::OutgoingWebhook(true),
                SetSettingsOption::OutgoingMessageWebhook(false),
                SetSettingsOption::OutgoingApiMessageWebhook(true),
                SetSettingsOption::StateWebhook(true),
                SetSettingsOption::IncomingWebhook(false),
            ],
            &rules(),
        )
        .unwrap();

        assert_eq!(
            encode(&r).unwrap(),
            json!({
                "webhookUrl": "https://webhook.url",
                "webhookUrlToken": "auth_token",
                "delaySendMessagesMilliseconds": 5000,
                "markIncomingMessagesReaded": "yes",
                "markIncomingMessagesReadedOnReply": "no",
                "outgoingWebhook": "yes",
                "outgoingMessageWebhook": "no",
                "outgoingAPIMessageWebhook": "yes",
                "stateWebhook": "yes",
                "incomingWebhook": "no",
            })
        );
    }

    #[test]
    fn invalid_webhook_url_aborts_build() {
        let err = build_set_settings(
            [
                SetSettingsOption::StateWebhook(true),
                SetSettingsOption::WebhookUrl("not a url".into()),
            ],
            &rules(),
        )
        .unwrap_err();
        match err {
            GreenApiError::Validation(v) => {
                assert_eq!(v.field, "webhookUrl");
                assert_eq!(v.reason, ValidationReason::InvalidUrl);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn repeated_option_is_idempotent() {
        let once = build_set_settings([SetSettingsOption::DelaySendMessages(500)], &rules()).unwrap();
        let twice = build_set_settings(
            [
                SetSettingsOption::DelaySendMessages(500),
                SetSettingsOption::DelaySendMessages(500),
            ],
            &rules(),
        )
        .unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn last_write_wins() {
        let r = build_set_settings(
            [
                SetSettingsOption::OutgoingWebhook(true),
                SetSettingsOption::OutgoingWebhook(false),
            ],
            &rules(),
        )
        .unwrap();
        assert_eq!(r.outgoing_webhook, Some(YesNo::No));
    }

    #[test]
    fn empty_authorization_password_is_omitted() {
        let r = RequestSendAuthorizationCode::new("12345", Some(String::new()));
        assert_eq!(encode(&r).unwrap(), json!({"code": "12345"}));

        let r = RequestSendAuthorizationCode::new("12345", Some("secret".into()));
        assert_eq!(encode(&r).unwrap(), json!({"code": "12345", "password": "secret"}));
    }
}
