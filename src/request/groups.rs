//! Group chat requests.

use serde::Serialize;

use super::{RequestOption, apply_options};
use crate::error::Result;
use crate::validation::{ValidationRules, limits, validate_one_of};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCreateGroup {
    pub group_name: String,
    pub chat_ids: Vec<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateGroupOption {
    /// `group` or `supergroup`.
    Type(String),
    IsAnonymous(bool),
}

impl RequestOption<RequestCreateGroup> for CreateGroupOption {
    fn apply(self, r: &mut RequestCreateGroup, _rules: &ValidationRules) -> Result<()> {
        match self {
            CreateGroupOption::Type(group_type) => {
                validate_one_of("type", &group_type, limits::GROUP_TYPES)?;
                r.group_type = Some(group_type);
            }
            CreateGroupOption::IsAnonymous(v) => r.is_anonymous = Some(v),
        }
        Ok(())
    }
}

/// Validates every member id, then applies `options`.
pub fn build_create_group<I>(
    group_name: &str,
    chat_ids: &[String],
    options: I,
    rules: &ValidationRules,
) -> Result<RequestCreateGroup>
where
    I: IntoIterator<Item = CreateGroupOption>,
{
    rules.validate_chat_ids(chat_ids.iter().map(|id| ("chatIds", id.as_str())))?;

    let mut r = RequestCreateGroup {
        group_name: group_name.to_string(),
        chat_ids: chat_ids.to_vec(),
        group_type: None,
        is_anonymous: None,
    };
    apply_options(&mut r, options, rules)?;
    Ok(r)
}

/// Participant permissions; each one left `None` is not touched remotely.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestUpdateGroupSettings {
    pub chat_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_participants_send_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_participants_send_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_participants_send_polls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_participants_send_other_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_participants_add_web_page_previews: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_participants_edit_group_settings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_participants_add_members: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_participants_pin_messages: Option<bool>,
}

impl RequestUpdateGroupSettings {
    fn new(chat_id: &str) -> Self {
        Self {
            chat_id: chat_id.to_string(),
            allow_participants_send_messages: None,
            allow_participants_send_media: None,
            allow_participants_send_polls: None,
            allow_participants_send_other_messages: None,
            allow_participants_add_web_page_previews: None,
            allow_participants_edit_group_settings: None,
            allow_participants_add_members: None,
            allow_participants_pin_messages: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateGroupSettingsOption {
    AllowParticipantsSendMessages(bool),
    AllowParticipantsSendMedia(bool),
    AllowParticipantsSendPolls(bool),
    AllowParticipantsSendOtherMessages(bool),
    AllowParticipantsAddWebPagePreviews(bool),
    AllowParticipantsEditGroupSettings(bool),
    AllowParticipantsAddMembers(bool),
    AllowParticipantsPinMessages(bool),
}

impl RequestOption<RequestUpdateGroupSettings> for UpdateGroupSettingsOption {
    fn apply(self, r: &mut RequestUpdateGroupSettings, _rules: &ValidationRules) -> Result<()> {
        use UpdateGroupSettingsOption::*;
        let (slot, allow) = match self {
            AllowParticipantsSendMessages(v) => (&mut r.allow_participants_send_messages, v),
            AllowParticipantsSendMedia(v) => (&mut r.allow_participants_send_media, v),
            AllowParticipantsSendPolls(v) => (&mut r.allow_participants_send_polls, v),
            AllowParticipantsSendOtherMessages(v) => {
                (&mut r.allow_participants_send_other_messages, v)
            }
            AllowParticipantsAddWebPagePreviews(v) => {
                (&mut r.allow_participants_add_web_page_previews, v)
            }
            AllowParticipantsEditGroupSettings(v) => {
                (&mut r.allow_participants_edit_group_settings, v)
            }
            AllowParticipantsAddMembers(v) => (&mut r.allow_participants_add_members, v),
            AllowParticipantsPinMessages(v) => (&mut r.allow_participants_pin_messages, v),
        };
        *slot = Some(allow);
        Ok(())
    }
}

pub fn build_update_group_settings<I>(
    chat_id: &str,
    options: I,
    rules: &ValidationRules,
) -> Result<RequestUpdateGroupSettings>
where
    I: IntoIterator<Item = UpdateGroupSettingsOption>,
{
    rules.validate_chat_id("chatId", chat_id)?;
    let mut r = RequestUpdateGroupSettings::new(chat_id);
    apply_options(&mut r, options, rules)?;
    Ok(r)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestUpdateGroupName {
    pub chat_id: String,
    pub group_name: String,
}

/// Shared by add/remove participant and admin changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestModifyGroupParticipant {
    pub chat_id: String,
    pub participant_chat_id: String,
}

pub fn build_modify_group_participant(
    chat_id: &str,
    participant_chat_id: &str,
    rules: &ValidationRules,
) -> Result<RequestModifyGroupParticipant> {
    rules.validate_chat_ids([
        ("chatId", chat_id),
        ("participantChatId", participant_chat_id),
    ])?;
    Ok(RequestModifyGroupParticipant {
        chat_id: chat_id.to_string(),
        participant_chat_id: participant_chat_id.to_string(),
    })
}

/// `setGroupPicture` form; `file` is a local path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSetGroupPicture {
    pub file: String,
    pub chat_id: String,
}
