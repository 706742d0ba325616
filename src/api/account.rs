use super::Caller;
use crate::dispatch::ResponseEnvelope;
use crate::encoding::{Host, Transfer};
use crate::error::Result;
use crate::request::account::{
    RequestSendAuthorizationCode, RequestSendAuthorizationPassword, RequestSetProfilePicture,
    RequestStartAuthorization, SetSettingsOption, build_set_settings,
};

/// Instance state, settings and authorization.
pub struct AccountApi<'a> {
    caller: Caller<'a>,
}

impl<'a> AccountApi<'a> {
    pub(crate) fn new(caller: Caller<'a>) -> Self {
        Self { caller }
    }

    pub async fn get_settings(&self) -> Result<ResponseEnvelope> {
        self.caller.get("getSettings").await
    }

    /// Change instance settings. Only the fields set by `options` are sent.
    pub async fn set_settings(
        &self,
        options: impl IntoIterator<Item = SetSettingsOption>,
    ) -> Result<ResponseEnvelope> {
        let request = build_set_settings(options, self.caller.rules());
        self.caller
            .post("setSettings", request, Transfer::Document)
            .await
    }

    pub async fn get_state_instance(&self) -> Result<ResponseEnvelope> {
        self.caller.get("getStateInstance").await
    }

    pub async fn reboot(&self) -> Result<ResponseEnvelope> {
        self.caller.get("reboot").await
    }

    pub async fn logout(&self) -> Result<ResponseEnvelope> {
        self.caller.get("logout").await
    }

    pub async fn qr(&self) -> Result<ResponseEnvelope> {
        self.caller.get("qr").await
    }

    /// Begin phone-number authorization.
    pub async fn start_authorization(&self, phone_number: u64) -> Result<ResponseEnvelope> {
        let request = RequestStartAuthorization { phone_number };
        self.caller
            .post("startAuthorization", Ok(request), Transfer::Document)
            .await
    }

    /// Submit the code received by the account. An empty `password` is
    /// treated as absent.
    pub async fn send_authorization_code(
        &self,
        code: &str,
        password: Option<&str>,
    ) -> Result<ResponseEnvelope> {
        let request = RequestSendAuthorizationCode::new(code, password.map(str::to_string));
        self.caller
            .post("sendAuthorizationCode", Ok(request), Transfer::Document)
            .await
    }

    pub async fn send_authorization_password(&self, password: &str) -> Result<ResponseEnvelope> {
        let request = RequestSendAuthorizationPassword {
            password: password.to_string(),
        };
        self.caller
            .post("sendAuthorizationPassword", Ok(request), Transfer::Document)
            .await
    }

    /// Upload the file at `file_path` as the account avatar.
    pub async fn set_profile_picture(&self, file_path: &str) -> Result<ResponseEnvelope> {
        let request = RequestSetProfilePicture {
            file: file_path.to_string(),
        };
        self.caller
            .post(
                "setProfilePicture",
                Ok(request),
                Transfer::FileByPath {
                    host: Host::DefaultHost,
                },
            )
            .await
    }

    pub async fn get_account_settings(&self) -> Result<ResponseEnvelope> {
        self.caller.get("getAccountSettings").await
    }
}
