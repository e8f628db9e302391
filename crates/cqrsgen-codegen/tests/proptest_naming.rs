//! Property-based tests for event naming
//!
//! Tests that derived event names keep the subject, voice and `ed` ending for
//! any camel-case command, whatever letters the verb is made of.

use cqrsgen_codegen::naming::{event_name, is_plural, participle_stem, split_words};
use proptest::prelude::*;

// Strategy: a lower-case verb
fn arb_verb() -> impl Strategy<Value = String> {
    "[a-z]{1,10}"
}

// Strategy: a capitalized word
fn arb_word() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,8}"
}

proptest! {
    /// Property: every event name ends with `ed`
    #[test]
    fn proptest_event_name_is_past_tense(
        aggregate in arb_word(),
        verb in arb_verb(),
        words in prop::collection::vec(arb_word(), 0..4),
    ) {
        let command = format!("{verb}{}", words.concat());

        prop_assert!(event_name(&aggregate, &command).ends_with("ed"));
    }

    /// Property: a single-word command uses the aggregate as subject
    #[test]
    fn proptest_single_word_command_uses_aggregate_subject(
        aggregate in arb_word(),
        verb in arb_verb(),
    ) {
        let voice = if is_plural(&verb) { "Were" } else { "Was" };

        let event = event_name(&aggregate, &verb);

        let expected_prefix = format!("{aggregate}{voice}");
        prop_assert!(event.starts_with(&expected_prefix));
    }

    /// Property: the words after the verb form the subject and the last letter picks the voice
    #[test]
    fn proptest_trailing_words_form_subject(
        aggregate in arb_word(),
        verb in arb_verb(),
        words in prop::collection::vec(arb_word(), 1..4),
    ) {
        let subject = words.concat();
        let command = format!("{verb}{subject}");
        let voice = if is_plural(&command) { "Were" } else { "Was" };

        let event = event_name(&aggregate, &command);

        let expected_prefix = format!("{subject}{voice}");
        prop_assert!(event.starts_with(&expected_prefix));
    }

    /// Property: splitting and concatenating reproduces the name
    #[test]
    fn proptest_split_words_is_lossless(name in "[a-zA-Z]{0,20}") {
        prop_assert_eq!(split_words(&name).concat(), name);
    }

    /// Property: a stem grows by at most one letter and never ends in `e`
    #[test]
    fn proptest_participle_stem_shape(verb in arb_verb()) {
        let stem = participle_stem(&verb);

        prop_assert!(stem.len() <= verb.len() + 1);
        prop_assert!(!stem.ends_with('e'));
    }
}
