//! Property-based tests for segmentation invariants

use proptest::prelude::*;
use smsplit_core::*;

/// Words of printable non-whitespace characters, joined by whitespace runs
fn message_strategy() -> impl Strategy<Value = String> {
    let word = "[a-zA-Z0-9.,!?'éü日本]{1,24}";
    let gap = prop::sample::select(vec![" ", "  ", "\t", "\n", " \r\n "]);
    prop::collection::vec((word, gap), 1..120).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(word, gap)| format!("{word}{gap}"))
            .collect::<String>()
    })
}

fn options_strategy() -> impl Strategy<Value = SegmentOptions> {
    (
        prop_oneof![Just(160usize), 20usize..400],
        prop_oneof![Just(SuffixSizing::Estimated), Just(SuffixSizing::Exact)],
    )
        .prop_map(|(budget, sizing)| SegmentOptions::with_budget(budget).sizing(sizing))
}

proptest! {
    /// Every suffix reads "Part i of N" with i = 1..N and N the real count.
    #[test]
    fn suffixes_are_consistent(message in message_strategy(), options in options_strategy()) {
        let parts = Segmenter::new(options).segment_to_strings(&message).unwrap();
        let total = parts.len();

        for (i, part) in parts.iter().enumerate() {
            let expected = format!(" ... - Part {} of {}", i + 1, total);
            prop_assert!(part.ends_with(&expected), "{:?} lacks {:?}", part, expected);
        }
    }

    /// Stripping suffixes and re-splitting reproduces the word sequence.
    #[test]
    fn words_are_preserved_in_order(message in message_strategy(), options in options_strategy()) {
        let segmentation = Segmenter::new(options).segment(&message).unwrap();

        let rebuilt: Vec<&str> = segmentation
            .iter()
            .flat_map(|part| part.content().split_whitespace())
            .collect();
        let original: Vec<&str> = message.split_whitespace().collect();
        prop_assert_eq!(rebuilt, original);
    }

    /// Each content span holds whole words separated by exactly one space.
    #[test]
    fn spans_are_single_spaced_and_non_empty(message in message_strategy()) {
        let segmentation = Segmenter::default().segment(&message).unwrap();

        prop_assert!(!segmentation.is_empty());
        for part in &segmentation {
            let content = part.content();
            prop_assert!(!content.is_empty());
            prop_assert_eq!(content.trim(), content);
            prop_assert!(!content.contains("  "));
            prop_assert!(!content.contains(['\t', '\n', '\r']));
        }
    }

    /// Segmenting twice yields identical output.
    #[test]
    fn segmentation_is_deterministic(message in message_strategy(), options in options_strategy()) {
        let segmenter = Segmenter::new(options);
        prop_assert_eq!(segmenter.segment(&message), segmenter.segment(&message));
    }

    /// With exact sizing a part only overflows when one word cannot fit alone.
    #[test]
    fn exact_sizing_fits_budget(message in message_strategy(), budget in 40usize..400) {
        let options = SegmentOptions::with_budget(budget).sizing(SuffixSizing::Exact);
        let segmentation = Segmenter::new(options).segment(&message).unwrap();
        let content_budget = segmentation.content_budget();

        for part in segmentation.overflowing() {
            prop_assert_eq!(part.content().split_whitespace().count(), 1);
            prop_assert!(part.content().chars().count() > content_budget);
        }
    }

    /// Splitting long words plus exact sizing keeps every part in budget.
    #[test]
    fn split_policy_fits_budget(len in 1usize..2000, budget in 40usize..200) {
        let message = "q".repeat(len);
        let options = SegmentOptions::with_budget(budget)
            .sizing(SuffixSizing::Exact)
            .oversize(OversizePolicy::Split);
        let segmentation = Segmenter::new(options).segment(&message).unwrap();

        prop_assert_eq!(segmentation.overflowing().count(), 0);
        let rebuilt: String = segmentation.iter().map(Part::content).collect();
        prop_assert_eq!(rebuilt, message);
    }

    /// Whitespace-only input is always rejected.
    #[test]
    fn blank_input_is_rejected(blank in "[ \t\r\n]{0,40}") {
        prop_assert_eq!(segment(&blank, DEFAULT_BUDGET), Err(SegmentError::EmptyInput));
    }
}
