use super::Caller;
use crate::dispatch::ResponseEnvelope;
use crate::encoding::{Host, Transfer};
use crate::error::Result;
use crate::request::groups::{
    CreateGroupOption, RequestSetGroupPicture, RequestUpdateGroupName, UpdateGroupSettingsOption,
    build_create_group, build_modify_group_participant, build_update_group_settings,
};
use crate::request::readmark::build_chat;

/// Group creation, membership and settings.
pub struct GroupsApi<'a> {
    caller: Caller<'a>,
}

impl<'a> GroupsApi<'a> {
    pub(crate) fn new(caller: Caller<'a>) -> Self {
        Self { caller }
    }

    /// Create a group named `group_name` with the given members.
    pub async fn create_group(
        &self,
        group_name: &str,
        chat_ids: &[String],
        options: impl IntoIterator<Item = CreateGroupOption>,
    ) -> Result<ResponseEnvelope> {
        let request = build_create_group(group_name, chat_ids, options, self.caller.rules());
        self.caller
            .post("createGroup", request, Transfer::Document)
            .await
    }

    pub async fn update_group_name(
        &self,
        chat_id: &str,
        group_name: &str,
    ) -> Result<ResponseEnvelope> {
        let request: Result<_> = self
            .caller
            .rules()
            .validate_chat_id("chatId", chat_id)
            .map(|()| RequestUpdateGroupName {
                chat_id: chat_id.to_string(),
                group_name: group_name.to_string(),
            })
            .map_err(Into::into);
        self.caller
            .post("updateGroupName", request, Transfer::Document)
            .await
    }

    /// Change group permissions. Permissions not named by `options` are
    /// left as they are.
    pub async fn update_group_settings(
        &self,
        chat_id: &str,
        options: impl IntoIterator<Item = UpdateGroupSettingsOption>,
    ) -> Result<ResponseEnvelope> {
        let request = build_update_group_settings(chat_id, options, self.caller.rules());
        self.caller
            .post("updateGroupSettings", request, Transfer::Document)
            .await
    }

    pub async fn get_group_data(&self, chat_id: &str) -> Result<ResponseEnvelope> {
        let request = build_chat(chat_id, self.caller.rules());
        self.caller
            .post("getGroupData", request, Transfer::Document)
            .await
    }

    pub async fn add_group_participant(
        &self,
        chat_id: &str,
        participant_chat_id: &str,
    ) -> Result<ResponseEnvelope> {
        self.modify_participant("addGroupParticipant", chat_id, participant_chat_id)
            .await
    }

    pub async fn remove_group_participant(
        &self,
        chat_id: &str,
        participant_chat_id: &str,
    ) -> Result<ResponseEnvelope> {
        self.modify_participant("removeGroupParticipant", chat_id, participant_chat_id)
            .await
    }

    pub async fn set_group_admin(
        &self,
        chat_id: &str,
        participant_chat_id: &str,
    ) -> Result<ResponseEnvelope> {
        self.modify_participant("setGroupAdmin", chat_id, participant_chat_id)
            .await
    }

    pub async fn remove_admin(
        &self,
        chat_id: &str,
        participant_chat_id: &str,
    ) -> Result<ResponseEnvelope> {
        self.modify_participant("removeAdmin", chat_id, participant_chat_id)
            .await
    }

    /// Upload the file at `file_path` as the group avatar.
    pub async fn set_group_picture(
        &self,
        file_path: &str,
        chat_id: &str,
    ) -> Result<ResponseEnvelope> {
        let request: Result<_> = self
            .caller
            .rules()
            .validate_chat_id("chatId", chat_id)
            .map(|()| RequestSetGroupPicture {
                file: file_path.to_string(),
                chat_id: chat_id.to_string(),
            })
            .map_err(Into::into);
        self.caller
            .post(
                "setGroupPicture",
                request,
                Transfer::FileByPath {
                    host: Host::DefaultHost,
                },
            )
            .await
    }

    pub async fn leave_group(&self, chat_id: &str) -> Result<ResponseEnvelope> {
        let request = build_chat(chat_id, self.caller.rules());
        self.caller
            .post("leaveGroup", request, Transfer::Document)
            .await
    }

    async fn modify_participant(
        &self,
        endpoint: &'static str,
        chat_id: &str,
        participant_chat_id: &str,
    ) -> Result<ResponseEnvelope> {
        let request = build_modify_group_participant(chat_id, participant_chat_id, self.caller.rules());
        self.caller.post(endpoint, request, Transfer::Document).await
    }
}
