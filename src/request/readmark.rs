//! Read-mark requests, and the single-chat body several services share.

use serde::Serialize;

use crate::error::Result;
use crate::validation::ValidationRules;

/// A body naming one chat: `readChat`, `getGroupData`, `leaveGroup`,
/// `getAvatar`, `getContactInfo`, `archiveChat`, `unarchiveChat`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestChat {
    pub chat_id: String,
}

pub fn build_chat(chat_id: &str, rules: &ValidationRules) -> Result<RequestChat> {
    rules.validate_chat_id("chatId", chat_id)?;
    Ok(RequestChat {
        chat_id: chat_id.to_string(),
    })
}
