use greenapi::request::encode;
use greenapi::request::sending::build_send_poll;
use greenapi::validation::{
    ValidationRules, is_chat_id, limits, validate_poll_options, validate_text_length,
    validate_typing_time,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn digit_ids_are_accepted(digits in "[1-9][0-9]{0,19}") {
        prop_assert!(is_chat_id(&digits));
        let personal = format!("{digits}@c.us");
        let negative = format!("-{digits}");
        prop_assert!(is_chat_id(&personal));
        prop_assert!(is_chat_id(&negative));
    }

    #[test]
    fn ids_with_letters_are_rejected(prefix in "[0-9]{1,10}", junk in "[a-z ]{1,5}") {
        let bad = format!("{prefix}{junk}");
        prop_assert!(!is_chat_id(&bad));
    }

    #[test]
    fn poll_option_length_counts_characters(s in "[a-zé]{0,100}") {
        prop_assert!(validate_text_length(&limits::POLL_OPTION, &s).is_ok());
    }

    #[test]
    fn one_past_the_limit_always_fails(extra in 1usize..50) {
        let over = "ж".repeat(limits::POLL_QUESTION.max + extra);
        prop_assert!(validate_text_length(&limits::POLL_QUESTION, &over).is_err());
    }

    #[test]
    fn typing_time_range(ms in 0u32..40_000) {
        let ok = (1_000..=20_000).contains(&ms);
        prop_assert_eq!(validate_typing_time(ms).is_ok(), ok);
    }

    #[test]
    fn distinct_answers_keep_their_order(
        answers in proptest::collection::btree_set("[A-Za-z]{1,12}", 2..=12)
    ) {
        let answers: Vec<String> = answers.into_iter().rev().collect();
        prop_assert!(validate_poll_options(&answers).is_ok());

        let poll = build_send_poll("1234567890", "Pick one", &answers, [], &ValidationRules::default())
            .unwrap();
        let doc = encode(&poll).unwrap();
        let names: Vec<&str> = doc["options"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["optionName"].as_str().unwrap())
            .collect();
        prop_assert_eq!(names, answers.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn repeated_answer_is_rejected(answer in "[a-z]{1,10}", n in 2usize..=12) {
        let answers = vec![answer; n];
        prop_assert!(validate_poll_options(&answers).is_err());
    }
}
