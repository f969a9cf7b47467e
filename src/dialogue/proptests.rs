//! Property-based tests for classification and routing

use super::catalog;
use super::classifier::{classify, normalize, Intent, RULES};
use super::*;
use proptest::prelude::*;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

fn arb_missionary_keyword() -> impl Strategy<Value = &'static str> {
    prop::sample::select(RULES[0].keywords)
}

fn arb_any_keyword() -> impl Strategy<Value = &'static str> {
    let all: Vec<&'static str> = RULES
        .iter()
        .flat_map(|r| r.keywords.iter().copied())
        .collect();
    prop::sample::select(all)
}

proptest! {
    #[test]
    fn first_contact_is_always_welcome(text in ".{0,80}", user in "[a-z0-9]{1,12}") {
        let reply = block_on(async {
            DialogueEngine::in_memory().respond(&text, &user).await.unwrap()
        });
        prop_assert_eq!(reply.topic, catalog::WELCOME_TAG);
    }

    #[test]
    fn missionary_keyword_beats_everything(
        prefix in "[a-zA-Z ]{0,20}",
        keyword in arb_missionary_keyword(),
        other in arb_any_keyword(),
        suffix in "[a-zA-Z ]{0,20}",
    ) {
        let text = format!("{prefix}{other} {keyword}{suffix}");
        prop_assert_eq!(classify(&text).tag(), "missionario");
    }

    #[test]
    fn repeated_message_gets_same_reply(text in ".{0,60}") {
        let (first, second) = block_on(async {
            let engine = DialogueEngine::in_memory();
            engine.respond("", "u").await.unwrap();
            let first = engine.respond(&text, "u").await.unwrap();
            let second = engine.respond(&text, "u").await.unwrap();
            (first, second)
        });
        prop_assert_eq!(first, second);
    }

    #[test]
    fn no_keyword_means_fallback(text in ".{0,60}") {
        let normalized = normalize(&text);
        let any_hit = RULES
            .iter()
            .flat_map(|r| r.keywords.iter())
            .any(|k| normalized.contains(k));
        prop_assume!(!any_hit);
        prop_assert_eq!(classify(&text), Intent::Fallback);
    }

    #[test]
    fn case_and_padding_do_not_matter(text in "[a-z ]{0,40}", pad in "[ \t\n]{0,4}") {
        let noisy = format!("{pad}{}{pad}", text.to_uppercase());
        prop_assert_eq!(classify(&noisy), classify(&text));
    }

    #[test]
    fn routed_replies_only_offer_known_options(text in ".{0,60}") {
        let entry = classify(&text).entry();
        for option in entry.options {
            prop_assert!(catalog::contains(option) || catalog::is_contact_route(option));
        }
    }
}
