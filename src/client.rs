//! Client entry points.
//!
//! A client owns one [`Dispatcher`] and one set of [`ValidationRules`];
//! façades borrow both. Cloning a client is cheap.

use std::sync::Arc;

use crate::api::{
    AccountApi, Caller, GroupsApi, PartnerApi, QueuesApi, ReadMarkApi, SendingApi, ServiceApi,
};
use crate::config::{InstanceConfig, PartnerConfig};
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::transport::HttpDispatcher;
use crate::validation::ValidationRules;

/// Client for one instance.
///
/// ```rust,ignore
/// let client = GreenApiClient::new(InstanceConfig::new(1101000001, token))?;
/// client.service().send_typing("79001234567@c.us", 3000, []).await?;
/// ```
#[derive(Clone)]
pub struct GreenApiClient {
    dispatcher: Arc<dyn Dispatcher>,
    rules: ValidationRules,
}

impl GreenApiClient {
    /// Client talking HTTP to the hosts in `config`.
    pub fn new(config: InstanceConfig) -> Result<Self> {
        Ok(Self::with_dispatcher(Arc::new(HttpDispatcher::for_instance(
            config,
        )?)))
    }

    /// Client over any dispatcher.
    pub fn with_dispatcher(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            dispatcher,
            rules: ValidationRules::default(),
        }
    }

    /// Replace the identifier and URL predicates.
    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    fn caller(&self) -> Caller<'_> {
        Caller::new(&*self.dispatcher, &self.rules)
    }

    pub fn account(&self) -> AccountApi<'_> {
        AccountApi::new(self.caller())
    }

    pub fn groups(&self) -> GroupsApi<'_> {
        GroupsApi::new(self.caller())
    }

    pub fn queues(&self) -> QueuesApi<'_> {
        QueuesApi::new(self.caller())
    }

    pub fn read_mark(&self) -> ReadMarkApi<'_> {
        ReadMarkApi::new(self.caller())
    }

    pub fn sending(&self) -> SendingApi<'_> {
        SendingApi::new(self.caller())
    }

    pub fn service(&self) -> ServiceApi<'_> {
        ServiceApi::new(self.caller())
    }
}

impl std::fmt::Debug for GreenApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreenApiClient").finish_non_exhaustive()
    }
}

/// Client for partner-scoped calls.
#[derive(Clone)]
pub struct PartnerClient {
    dispatcher: Arc<dyn Dispatcher>,
    rules: ValidationRules,
}

impl PartnerClient {
    pub fn new(config: PartnerConfig) -> Result<Self> {
        Ok(Self::with_dispatcher(Arc::new(HttpDispatcher::for_partner(
            config,
        )?)))
    }

    pub fn with_dispatcher(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            dispatcher,
            rules: ValidationRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn partner(&self) -> PartnerApi<'_> {
        PartnerApi::new(Caller::new(&*self.dispatcher, &self.rules))
    }
}

impl std::fmt::Debug for PartnerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartnerClient").finish_non_exhaustive()
    }
}
