//! Request objects, option combinators and builders.
//!
//! Each operation has a request struct holding its required fields and
//! `Option` slots for everything optional. Options are small enums, one per
//! family, that implement [`RequestOption`] for the request they target. A
//! builder constructs the minimal request, runs [`apply_options`] and hands
//! back the typed request; [`encode`] turns it into a JSON document.
//!
//! # Design
//! - Absent optional fields are `None` and skipped on serialization, so an
//!   untouched request serializes to its required fields only.
//! - The first failing option aborts the build. Later options never run and
//!   the request is dropped unserialized.
//! - Options never accumulate: applying one twice equals applying it once.

use serde::Serialize;

use crate::error::Result;
use crate::validation::ValidationRules;

pub mod account;
pub mod groups;
pub mod partner;
pub mod readmark;
pub mod sending;
pub mod service;

use account::SetSettingsOption;
use groups::{CreateGroupOption, UpdateGroupSettingsOption};
use partner::CreateInstanceOption;
use sending::{
    SendFileByUploadOption, SendFileByUrlOption, SendMessageOption, SendPollOption,
};
use service::{DeleteMessageOption, SendTypingOption};

/// A deferred mutation of request `R` that sets one optional field.
pub trait RequestOption<R> {
    fn apply(self, target: &mut R, rules: &ValidationRules) -> Result<()>;
}

/// Apply `options` to `target` in order, stopping at the first error.
pub fn apply_options<R, O, I>(target: &mut R, options: I, rules: &ValidationRules) -> Result<()>
where
    O: RequestOption<R>,
    I: IntoIterator<Item = O>,
{
    for option in options {
        option.apply(target, rules)?;
    }
    Ok(())
}

/// Serialize a request object into a JSON document.
pub fn encode<T: Serialize>(request: &T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(request)?)
}

/// Textual boolean used by account settings on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

/// Any option of any family.
///
/// Builders that accept more than one family take a list of these and reject
/// the families they do not know with
/// [`GreenApiError::Composition`](crate::error::GreenApiError::Composition).
#[derive(Debug, Clone, PartialEq)]
pub enum AnyOption {
    SetSettings(SetSettingsOption),
    CreateInstance(CreateInstanceOption),
    CreateGroup(CreateGroupOption),
    UpdateGroupSettings(UpdateGroupSettingsOption),
    SendMessage(SendMessageOption),
    SendFileByUpload(SendFileByUploadOption),
    SendFileByUrl(SendFileByUrlOption),
    SendPoll(SendPollOption),
    SendTyping(SendTypingOption),
    DeleteMessage(DeleteMessageOption),
}

macro_rules! any_option_families {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        impl AnyOption {
            /// Name of the option family.
            pub fn family(&self) -> &'static str {
                match self {
                    $(AnyOption::$variant(_) => stringify!($variant),)*
                }
            }
        }

        $(
            impl From<$ty> for AnyOption {
                fn from(option: $ty) -> Self {
                    AnyOption::$variant(option)
                }
            }
        )*
    };
}

any_option_families!(
    SetSettings(SetSettingsOption),
    CreateInstance(CreateInstanceOption),
    CreateGroup(CreateGroupOption),
    UpdateGroupSettings(UpdateGroupSettingsOption),
    SendMessage(SendMessageOption),
    SendFileByUpload(SendFileByUploadOption),
    SendFileByUrl(SendFileByUrlOption),
    SendPoll(SendPollOption),
    SendTyping(SendTypingOption),
    DeleteMessage(DeleteMessageOption),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GreenApiError, ValidationError, ValidationReason};
    use std::cell::Cell;

    #[derive(Default)]
    struct Target {
        value: Option<u32>,
    }

    /// Sets `value`, failing when asked to, and counts every run.
    struct Counted<'a> {
        value: u32,
        fail: bool,
        runs: &'a Cell<usize>,
    }

    impl RequestOption<Target> for Counted<'_> {
        fn apply(self, target: &mut Target, _rules: &ValidationRules) -> Result<()> {
            self.runs.set(self.runs.get() + 1);
            if self.fail {
                return Err(
                    ValidationError::new("value", self.value.to_string(), ValidationReason::Duplicate)
                        .into(),
                );
            }
            target.value = Some(self.value);
            Ok(())
        }
    }

    #[test]
    fn first_failure_stops_later_options() {
        let runs = Cell::new(0);
        let mut target = Target::default();
        let options = (0..5).map(|i| Counted {
            value: i,
            fail: i == 2,
            runs: &runs,
        });

        let err = apply_options(&mut target, options, &ValidationRules::default()).unwrap_err();

        assert!(matches!(err, GreenApiError::Validation(_)));
        assert_eq!(runs.get(), 3, "options after the failing one must not run");
        assert_eq!(target.value, Some(1));
    }

    #[test]
    fn empty_option_list_leaves_target_untouched() {
        let mut target = Target::default();
        apply_options(
            &mut target,
            Vec::<Counted<'_>>::new(),
            &ValidationRules::default(),
        )
        .unwrap();
        assert_eq!(target.value, None);
    }

    #[test]
    fn yes_no_wire_form() {
        assert_eq!(serde_json::to_value(YesNo::from(true)).unwrap(), "yes");
        assert_eq!(serde_json::to_value(YesNo::from(false)).unwrap(), "no");
    }

    #[test]
    fn any_option_family_names() {
        let opt: AnyOption = SendPollOption::MultipleAnswers(true).into();
        assert_eq!(opt.family(), "SendPoll");
        let opt: AnyOption = SetSettingsOption::StateWebhook(true).into();
        assert_eq!(opt.family(), "SetSettings");
    }
}
