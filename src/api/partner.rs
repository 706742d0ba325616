use super::Caller;
use crate::dispatch::ResponseEnvelope;
use crate::encoding::Transfer;
use crate::error::Result;
use crate::request::AnyOption;
use crate::request::partner::{RequestDeleteInstanceAccount, build_create_instance};

/// Instance provisioning under a partner account.
pub struct PartnerApi<'a> {
    caller: Caller<'a>,
}

impl<'a> PartnerApi<'a> {
    pub(crate) fn new(caller: Caller<'a>) -> Self {
        Self { caller }
    }

    pub async fn get_instances(&self) -> Result<ResponseEnvelope> {
        self.caller.get("getInstances").await
    }

    /// Create an instance. `options` may mix instance options with account
    /// settings options; any other family is rejected.
    ///
    /// ```rust,ignore
    /// partner
    ///     .create_instance([
    ///         CreateInstanceOption::Name("support".into()).into(),
    ///         SetSettingsOption::IncomingWebhook(true).into(),
    ///     ])
    ///     .await?;
    /// ```
    pub async fn create_instance(
        &self,
        options: impl IntoIterator<Item = AnyOption>,
    ) -> Result<ResponseEnvelope> {
        let request = build_create_instance(options, self.caller.rules());
        self.caller
            .post("createInstance", request, Transfer::Document)
            .await
    }

    pub async fn delete_instance_account(&self, id_instance: u64) -> Result<ResponseEnvelope> {
        let request = RequestDeleteInstanceAccount { id_instance };
        self.caller
            .post("deleteInstanceAccount", Ok(request), Transfer::Document)
            .await
    }
}
