//! Input validators.
//!
//! Every validator is a pure function over its arguments and returns the
//! offending value inside a [`ValidationError`]. Nothing here touches the
//! network or the file system.
//!
//! The identifier and URL grammars are not fixed by the platform's public
//! contract, so [`ValidationRules`] carries them as plain predicates that a
//! caller can replace. The defaults accept:
//!
//! | predicate | accepted | rejected |
//! |---|---|---|
//! | chat id | `1234567890`, `-1001234567890`, `79001234567@c.us`, `79001234567-1581234048@g.us` | `""`, `abc`, `123 456`, `79001234567@c.com`, `@c.us` |
//! | url | `https://webhook.url`, `http://localhost:8080/hook` | `""`, `webhook.url`, `ftp://files.example.com/a`, `https://` |

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ValidationError, ValidationReason};

/// Static limits and vocabularies shared read-only by every request.
pub mod limits {
    use std::ops::RangeInclusive;

    /// A length-bounded text field.
    ///
    /// `key` names the field in [`TEXT_FIELDS`], `wire` is the name it carries
    /// in the serialized request.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TextField {
        pub key: &'static str,
        pub wire: &'static str,
        pub max: usize,
    }

    pub const MESSAGE: TextField = TextField {
        key: "message",
        wire: "message",
        max: 20_000,
    };

    pub const CAPTION: TextField = TextField {
        key: "caption",
        wire: "caption",
        max: 20_000,
    };

    pub const POLL_QUESTION: TextField = TextField {
        key: "pollQuestion",
        wire: "message",
        max: 255,
    };

    pub const POLL_OPTION: TextField = TextField {
        key: "pollOption",
        wire: "optionName",
        max: 100,
    };

    pub static TEXT_FIELDS: &[TextField] = &[MESSAGE, CAPTION, POLL_QUESTION, POLL_OPTION];

    /// Look up a text field's limits by key.
    pub fn text_field(key: &str) -> Option<&'static TextField> {
        TEXT_FIELDS.iter().find(|f| f.key == key)
    }

    pub const POLL_OPTION_COUNT: RangeInclusive<usize> = 2..=12;

    /// Typing indicator duration, milliseconds.
    pub const TYPING_TIME_RANGE: RangeInclusive<u32> = 1_000..=20_000;

    pub static TYPING_TYPES: &[&str] = &[
        "text",
        "record_voice_note",
        "upload_voice_note",
        "record_video_note",
        "upload_video_note",
        "record_video",
        "upload_video",
        "upload_photo",
        "upload_document",
        "choose_sticker",
        "choose_location",
        "choose_contact",
    ];

    pub static GROUP_TYPES: &[&str] = &["group", "supergroup"];
}

// `None` only if the literal fails to compile; every id is then rejected.
static CHAT_ID_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^(?:-?\d{1,20}|\d{1,20}@c\.us|\d{1,20}(?:-\d{1,20})?@g\.us)$").ok()
});

/// Default chat identifier predicate.
pub fn is_chat_id(value: &str) -> bool {
    CHAT_ID_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}

/// Default URL predicate: absolute `http`/`https` URL with a host.
pub fn is_http_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Pluggable identifier and URL predicates.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRules {
    pub chat_id: fn(&str) -> bool,
    pub url: fn(&str) -> bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            chat_id: is_chat_id,
            url: is_http_url,
        }
    }
}

impl ValidationRules {
    pub fn with_chat_id(mut self, predicate: fn(&str) -> bool) -> Self {
        self.chat_id = predicate;
        self
    }

    pub fn with_url(mut self, predicate: fn(&str) -> bool) -> Self {
        self.url = predicate;
        self
    }

    /// Check one identifier carried in `field`.
    pub fn validate_chat_id(&self, field: &'static str, value: &str) -> Result<(), ValidationError> {
        if (self.chat_id)(value) {
            Ok(())
        } else {
            Err(ValidationError::new(
                field,
                value,
                ValidationReason::InvalidChatId,
            ))
        }
    }

    /// Check several identifiers in order, failing on the first invalid one.
    pub fn validate_chat_ids<'a, I>(&self, ids: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = (&'static str, &'a str)>,
    {
        ids.into_iter()
            .try_for_each(|(field, value)| self.validate_chat_id(field, value))
    }

    pub fn validate_url(&self, field: &'static str, value: &str) -> Result<(), ValidationError> {
        if (self.url)(value) {
            Ok(())
        } else {
            Err(ValidationError::new(field, value, ValidationReason::InvalidUrl))
        }
    }
}

/// Reject `value` when it holds more characters than `field.max`.
pub fn validate_text_length(
    field: &limits::TextField,
    value: &str,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > field.max {
        return Err(ValidationError::new(
            field.wire,
            value,
            ValidationReason::TooLong {
                max: field.max,
                actual,
            },
        ));
    }
    Ok(())
}

/// Reject `value` when it is not a member of `allowed`.
pub fn validate_one_of(
    field: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            value,
            ValidationReason::NotAllowed { allowed },
        ))
    }
}

pub fn validate_typing_time(value: u32) -> Result<(), ValidationError> {
    let range = limits::TYPING_TIME_RANGE;
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "typingTime",
            value.to_string(),
            ValidationReason::OutOfRange {
                min: u64::from(*range.start()),
                max: u64::from(*range.end()),
                actual: u64::from(value),
            },
        ))
    }
}

/// Latitude must be finite and within ±90 degrees.
pub fn validate_latitude(value: f64) -> Result<(), ValidationError> {
    validate_degrees("latitude", value, 90)
}

/// Longitude must be finite and within ±180 degrees.
pub fn validate_longitude(value: f64) -> Result<(), ValidationError> {
    validate_degrees("longitude", value, 180)
}

fn validate_degrees(field: &'static str, value: f64, limit: u16) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(
            field,
            value.to_string(),
            ValidationReason::NotFinite,
        ));
    }
    if value.abs() > f64::from(limit) {
        return Err(ValidationError::new(
            field,
            value.to_string(),
            ValidationReason::DegreesOutOfRange { limit },
        ));
    }
    Ok(())
}

/// Poll answers: bounded count, bounded length, no duplicates.
///
/// Checks run in that order; within the list the first offending option is
/// reported.
pub fn validate_poll_options<S: AsRef<str>>(options: &[S]) -> Result<(), ValidationError> {
    let count = limits::POLL_OPTION_COUNT;
    if options.len() < *count.start() {
        return Err(ValidationError::new(
            "options",
            options.len().to_string(),
            ValidationReason::TooFew {
                min: *count.start(),
                actual: options.len(),
            },
        ));
    }
    if options.len() > *count.end() {
        return Err(ValidationError::new(
            "options",
            options.len().to_string(),
            ValidationReason::TooMany {
                max: *count.end(),
                actual: options.len(),
            },
        ));
    }

    let mut seen = HashSet::with_capacity(options.len());
    for option in options {
        let option = option.as_ref();
        validate_text_length(&limits::POLL_OPTION, option)?;
        if !seen.insert(option) {
            return Err(ValidationError::new(
                limits::POLL_OPTION.wire,
                option,
                ValidationReason::Duplicate,
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_id_grammar() {
        for ok in [
            "1234567890",
            "-1001234567890",
            "79001234567@c.us",
            "79001234567-1581234048@g.us",
            "120363025955000000@g.us",
        ] {
            assert!(is_chat_id(ok), "{ok} should be accepted");
        }
        for bad in ["", "abc", "123 456", "79001234567@c.com", "@c.us", "1@c.us "] {
            assert!(!is_chat_id(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn chat_id_pattern_compiles() {
        assert!(CHAT_ID_PATTERN.is_some());
    }

    #[test]
    fn coordinates_must_be_finite_degrees() {
        assert!(validate_latitude(55.7558).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_longitude(180.0).is_ok());

        let err = validate_latitude(f64::NAN).unwrap_err();
        assert_eq!(err.field, "latitude");
        assert_eq!(err.reason, ValidationReason::NotFinite);

        let err = validate_longitude(f64::NEG_INFINITY).unwrap_err();
        assert_eq!(err.field, "longitude");
        assert_eq!(err.reason, ValidationReason::NotFinite);

        let err = validate_latitude(90.5).unwrap_err();
        assert_eq!(err.reason, ValidationReason::DegreesOutOfRange { limit: 90 });
        assert!(validate_longitude(-180.01).is_err());
    }

    #[test]
    fn url_grammar() {
        assert!(is_http_url("https://webhook.url"));
        assert!(is_http_url("http://localhost:8080/hook"));
        for bad in ["", "webhook.url", "ftp://files.example.com/a", "https://"] {
            assert!(!is_http_url(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn chat_ids_fail_on_first_invalid() {
        let rules = ValidationRules::default();
        let err = rules
            .validate_chat_ids([
                ("chatId", "79001234567@c.us"),
                ("participantChatId", "nope"),
                ("extra", "also nope"),
            ])
            .unwrap_err();
        assert_eq!(err.field, "participantChatId");
        assert_eq!(err.value, "nope");
    }

    #[test]
    fn rules_are_pluggable() {
        let rules = ValidationRules::default().with_chat_id(|s| s.starts_with("user:"));
        assert!(rules.validate_chat_id("chatId", "user:42").is_ok());
        assert!(rules.validate_chat_id("chatId", "79001234567@c.us").is_err());
    }

    #[test]
    fn text_length_is_inclusive_and_per_field() {
        for field in limits::TEXT_FIELDS {
            let at_max = "a".repeat(field.max);
            assert!(validate_text_length(field, &at_max).is_ok(), "{}", field.key);

            let over = "a".repeat(field.max + 1);
            let err = validate_text_length(field, &over).unwrap_err();
            assert_eq!(
                err.reason,
                ValidationReason::TooLong {
                    max: field.max,
                    actual: field.max + 1
                }
            );
        }
    }

    #[test]
    fn text_length_counts_characters_not_bytes() {
        let question = "я".repeat(limits::POLL_QUESTION.max);
        assert!(validate_text_length(&limits::POLL_QUESTION, &question).is_ok());
    }

    #[test]
    fn text_field_table_lookup() {
        assert_eq!(limits::text_field("pollQuestion").map(|f| f.max), Some(255));
        assert_eq!(limits::text_field("caption").map(|f| f.max), Some(20_000));
        assert!(limits::text_field("unknown").is_none());
    }

    #[test]
    fn poll_option_cardinality() {
        let err = validate_poll_options(&["A"]).unwrap_err();
        assert_eq!(err.reason, ValidationReason::TooFew { min: 2, actual: 1 });

        let thirteen: Vec<String> = (0..13).map(|i| format!("opt{i}")).collect();
        let err = validate_poll_options(&thirteen).unwrap_err();
        assert_eq!(err.reason, ValidationReason::TooMany { max: 12, actual: 13 });

        assert!(validate_poll_options(&["A", "B"]).is_ok());
    }

    #[test]
    fn poll_option_duplicates_report_first() {
        let err = validate_poll_options(&["A", "B", "B", "A"]).unwrap_err();
        assert_eq!(err.reason, ValidationReason::Duplicate);
        assert_eq!(err.value, "B");
    }

    #[test]
    fn poll_option_length() {
        let long = "x".repeat(101);
        let err = validate_poll_options(&["A", long.as_str()]).unwrap_err();
        assert_eq!(err.field, "optionName");
        assert!(matches!(err.reason, ValidationReason::TooLong { max: 100, .. }));
    }

    #[test]
    fn typing_vocabulary_and_range() {
        assert!(validate_one_of("typingType", "upload_photo", limits::TYPING_TYPES).is_ok());
        assert!(validate_one_of("typingType", "dance", limits::TYPING_TYPES).is_err());
        assert!(validate_typing_time(1_000).is_ok());
        assert!(validate_typing_time(20_000).is_ok());
        assert!(validate_typing_time(999).is_err());
        assert!(validate_typing_time(20_001).is_err());
    }
}
