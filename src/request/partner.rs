//! Partner requests: instance provisioning.

use serde::Serialize;

use super::AnyOption;
use super::RequestOption;
use super::account::RequestSetSettings;
use crate::error::{GreenApiError, Result};
use crate::validation::ValidationRules;

const CREATE_INSTANCE: &str = "createInstance";

/// `createInstance` body: instance settings plus an optional name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequestCreateInstance {
    #[serde(flatten)]
    pub settings: RequestSetSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateInstanceOption {
    Name(String),
}

impl RequestOption<RequestCreateInstance> for CreateInstanceOption {
    fn apply(self, r: &mut RequestCreateInstance, _rules: &ValidationRules) -> Result<()> {
        match self {
            CreateInstanceOption::Name(name) => r.name = Some(name),
        }
        Ok(())
    }
}

/// Accepts settings options and instance options, in any mix.
impl RequestOption<RequestCreateInstance> for AnyOption {
    fn apply(self, r: &mut RequestCreateInstance, rules: &ValidationRules) -> Result<()> {
        match self {
            AnyOption::SetSettings(option) => option.apply(&mut r.settings, rules),
            AnyOption::CreateInstance(option) => option.apply(r, rules),
            other => Err(GreenApiError::composition(CREATE_INSTANCE, other.family())),
        }
    }
}

pub fn build_create_instance<I>(options: I, rules: &ValidationRules) -> Result<RequestCreateInstance>
where
    I: IntoIterator<Item = AnyOption>,
{
    let mut r = RequestCreateInstance::default();
    super::apply_options(&mut r, options, rules)?;
    Ok(r)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDeleteInstanceAccount {
    pub id_instance: u64,
}
