use docsmith_lexicon::{a_or_an, check_acronym, past_tense, split, starts_with_word, syllable_count};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_past_tense_ends_in_ed(word in "[a-z]{1,12}") {
        let past = past_tense(&word);
        prop_assert!(past.ends_with("ed"));
        prop_assert!(past.starts_with(&word));
    }

    #[test]
    fn prop_past_tense_is_idempotent(word in "[a-z]{1,12}") {
        let once = past_tense(&word);
        prop_assert_eq!(past_tense(&once), once);
    }

    #[test]
    fn prop_split_words_are_clean(name in "@?[A-Za-z_]{0,24}") {
        for word in split(&name, false) {
            prop_assert!(!word.is_empty());
            prop_assert!(!word.contains('_'));
            prop_assert!(!word.contains('@'));
        }
    }

    #[test]
    fn prop_split_snake_case_roundtrip(words in proptest::collection::vec("[a-z]{2,6}", 1..5)) {
        let name = words.join("_");
        let expected: Vec<String> = words.iter().map(|w| check_acronym(w).to_string()).collect();
        prop_assert_eq!(split(&name, false), expected);
    }

    #[test]
    fn prop_starts_with_word_at_pascal_boundary(word in "[a-z]{1,8}", rest in "[A-Z][a-z]{0,8}") {
        let name = format!("{word}{rest}");
        prop_assert!(starts_with_word(&name, &word));
        prop_assert!(!starts_with_word(&word, &word));
    }

    #[test]
    fn prop_article_is_a_or_an(word in "\\PC{0,10}") {
        let article = a_or_an(&word);
        prop_assert!(article == "a" || article == "an");
    }

    #[test]
    fn prop_syllables_never_negative_for_letters(word in "[a-zA-Z]{0,16}") {
        prop_assert!(syllable_count(&word) >= 0);
    }
}

#[test]
fn segmentation_of_capital_runs() {
    assert_eq!(split("XMLParserFactory", false), vec!["xmlparser", "factory"]);
}
