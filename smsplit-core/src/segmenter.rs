//! Message segmentation
//!
//! The suffix of every part embeds the final part count, yet the suffix
//! width also shrinks the room left for content. [`Segmenter`] resolves this
//! with one of two strategies:
//!
//! - [`SuffixSizing::Estimated`]: guess the part count from the message
//!   length, size the content budget for that guess once, pack, then label
//!   parts with the real count. Single pass; the labels can be wider than
//!   the guess accounted for.
//! - [`SuffixSizing::Exact`]: repeat the packing with a wider suffix until
//!   the real count's widest suffix fits the budget used for packing.

use crate::config::{SegmentOptions, SuffixSizing};
use crate::error::{Result, SegmentError};
use crate::packer::WordPacker;
use crate::part::Segmentation;
use crate::suffix::{Suffix, MAX_ESTIMATE_SUFFIX_CHARS, SAFETY_MARGIN};

/// Splits messages into suffixed parts
///
/// Stateless apart from its options; share it freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    options: SegmentOptions,
}

impl Segmenter {
    /// Create a segmenter with the given options
    pub fn new(options: SegmentOptions) -> Self {
        Self { options }
    }

    /// Create a segmenter with default options and a custom budget
    pub fn with_budget(budget: usize) -> Self {
        Self::new(SegmentOptions::with_budget(budget))
    }

    /// Current options
    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    /// Segment a message
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::EmptyInput`] when the message is empty or only
    /// whitespace. Any other input produces parts, even when a part has to
    /// exceed the budget.
    pub fn segment(&self, message: &str) -> Result<Segmentation> {
        if message.trim().is_empty() {
            return Err(SegmentError::EmptyInput);
        }

        let words: Vec<&str> = message.split_whitespace().collect();
        let (sized_for, content_budget, spans) = match self.options.sizing {
            SuffixSizing::Estimated => {
                let estimated = estimate_total(message.chars().count(), self.options.budget);
                let content_budget = content_budget(self.options.budget, estimated);
                let spans = self.packer(content_budget).pack(words.iter().copied());
                (estimated, content_budget, spans)
            }
            SuffixSizing::Exact => self.pack_exact(&words),
        };

        Ok(Segmentation::assemble(
            spans,
            self.options.budget,
            sized_for,
            content_budget,
        ))
    }

    /// Segment a message straight into finished strings
    pub fn segment_to_strings(&self, message: &str) -> Result<Vec<String>> {
        self.segment(message).map(Segmentation::into_strings)
    }

    fn packer(&self, content_budget: usize) -> WordPacker {
        WordPacker::new(content_budget, self.options.oversize)
    }

    /// Fixed-point search over the assumed part count
    ///
    /// The assumed suffix width strictly grows on every retry and the part
    /// count is bounded by the number of words (or slices), so this ends.
    fn pack_exact(&self, words: &[&str]) -> (usize, usize, Vec<String>) {
        let mut assumed = 1;
        loop {
            let content_budget = content_budget(self.options.budget, assumed);
            let spans = self.packer(content_budget).pack(words.iter().copied());
            let actual = spans.len();

            if Suffix::widest(actual).char_len() <= Suffix::widest(assumed).char_len() {
                return (assumed, content_budget, spans);
            }
            assumed = actual;
        }
    }
}

/// Length-based part count estimate
///
/// Divides the message length by the budget left after a two-digit suffix
/// and [`SAFETY_MARGIN`]. Never returns less than one.
pub fn estimate_total(message_chars: usize, budget: usize) -> usize {
    let per_part = budget
        .saturating_sub(MAX_ESTIMATE_SUFFIX_CHARS + SAFETY_MARGIN)
        .max(1);
    message_chars.div_ceil(per_part).max(1)
}

/// Content characters left in a part once the widest suffix for `total` parts is reserved
pub fn content_budget(budget: usize, total: usize) -> usize {
    budget.saturating_sub(Suffix::widest(total).char_len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OversizePolicy;

    #[test]
    fn test_estimate_total() {
        assert_eq!(estimate_total(363, 160), 3);
        assert_eq!(estimate_total(200, 160), 2);
        assert_eq!(estimate_total(134, 160), 1);
        assert_eq!(estimate_total(135, 160), 2);
        assert_eq!(estimate_total(1, 160), 1);
    }

    #[test]
    fn test_estimate_total_with_tiny_budget() {
        // Budget smaller than suffix + margin divides by one
        assert_eq!(estimate_total(9, 10), 9);
        assert_eq!(estimate_total(0, 0), 1);
    }

    #[test]
    fn test_content_budget() {
        assert_eq!(content_budget(160, 3), 142);
        assert_eq!(content_budget(160, 10), 140);
        assert_eq!(content_budget(160, 100), 138);
        assert_eq!(content_budget(10, 1), 0);
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        let segmenter = Segmenter::default();
        assert_eq!(segmenter.segment(""), Err(SegmentError::EmptyInput));
        assert_eq!(segmenter.segment("   "), Err(SegmentError::EmptyInput));
        assert_eq!(segmenter.segment("\t\n \u{3000}"), Err(SegmentError::EmptyInput));
    }

    #[test]
    fn test_records_sizing_facts() {
        let segmentation = Segmenter::default().segment(&"word ".repeat(60)).unwrap();
        assert_eq!(segmentation.budget(), 160);
        assert_eq!(segmentation.estimated_total(), 3);
        assert_eq!(segmentation.content_budget(), 142);
    }

    #[test]
    fn test_exact_sizing_settles_on_real_width() {
        let options = SegmentOptions::default().sizing(SuffixSizing::Exact);
        // 2000 five-letter words need far more than nine parts
        let segmentation = Segmenter::new(options)
            .segment(&vec!["hello"; 2000].join(" "))
            .unwrap();

        assert_eq!(segmentation.len(), 87);
        assert_eq!(segmentation.content_budget(), 140);
        assert!(segmentation.iter().all(|part| part.fits(160)));
    }

    #[test]
    fn test_split_policy_with_estimate() {
        let options = SegmentOptions::default().oversize(OversizePolicy::Split);
        let segmentation = Segmenter::new(options)
            .segment(&"a".repeat(200))
            .unwrap();

        let lengths: Vec<usize> = segmentation.iter().map(|p| p.content().len()).collect();
        assert_eq!(lengths, vec![142, 58]);
    }
}
