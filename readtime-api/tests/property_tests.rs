//! Property tests for word counting and rounding

use proptest::prelude::*;
use readtime_api::*;
use std::time::Duration;

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.,!?'()\\[\\]/:-]{1,12}"
}

fn separator() -> impl Strategy<Value = String> {
    "[ \t\r\n]{1,6}"
}

fn words_and_separators() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    prop::collection::vec(word(), 1..40).prop_flat_map(|words| {
        let n = words.len();
        (Just(words), prop::collection::vec(separator(), n))
    })
}

fn join(words: &[String], separators: &[String]) -> String {
    let mut text = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            text.push_str(&separators[i - 1]);
        }
        text.push_str(word);
    }
    text
}

proptest! {
    #[test]
    fn no_boundaries_is_one_word(text in "[^ \t\r\n]{1,200}") {
        prop_assert_eq!(estimate(&text).words, 1);
    }

    #[test]
    fn only_boundaries_is_zero(text in "[ \t\r\n]{0,200}") {
        let result = estimate(&text);
        prop_assert_eq!(result.words, 0);
        prop_assert_eq!(result.duration, Duration::ZERO);
        prop_assert_eq!(result.text, "0 min read");
    }

    #[test]
    fn separator_runs_collapse((words, separators) in words_and_separators()) {
        let spaced = join(&words, &separators);
        let single = words.join(" ");
        prop_assert_eq!(estimate(&spaced).words, words.len());
        prop_assert_eq!(estimate(&spaced).words, estimate(&single).words);
    }

    #[test]
    fn edge_runs_are_ignored(
        (words, separators) in words_and_separators(),
        lead in separator(),
        trail in separator(),
    ) {
        let body = join(&words, &separators);
        let padded = format!("{lead}{body}{trail}");
        prop_assert_eq!(estimate(&padded).words, estimate(&body).words);
    }

    #[test]
    fn exact_multiples_round_exactly(k in 1usize..6, speed in 1u32..60) {
        let words = k * speed as usize;
        let text = "w ".repeat(words);
        let result = estimate_with(&text, [EstimateOption::words_per_minute(speed)]).unwrap();
        prop_assert_eq!(result.minutes(), k as u64);

        let text = "w ".repeat(words + 1);
        let result = estimate_with(&text, [EstimateOption::words_per_minute(speed)]).unwrap();
        prop_assert_eq!(result.minutes(), k as u64 + 1);
    }

    #[test]
    fn text_matches_duration(text in "[a-z \n]{0,400}", speed in 1u32..300) {
        let result = estimate_with(&text, [EstimateOption::words_per_minute(speed)]).unwrap();
        prop_assert_eq!(result.text.clone(), format!("{} min read", result.minutes()));
        if result.words > 0 {
            prop_assert!(result.minutes() >= 1);
        }
    }
}
