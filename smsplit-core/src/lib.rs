//! Word-preserving SMS segmentation
//!
//! Splits a message into parts that each fit a fixed character budget
//! (160 by default) once a `" ... - Part i of N"` suffix is appended.
//! Words are never broken across parts, whitespace runs collapse to a single
//! space, and the total `N` in every suffix equals the number of parts
//! actually produced.
//!
//! Segmentation is a pure function of the message and the options: no I/O,
//! no shared state, and identical input always yields identical output.
//!
//! # Example
//!
//! ```rust
//! use smsplit_core::{segment, SegmentError, DEFAULT_BUDGET};
//!
//! let parts = segment("This   is   a   test   message.", DEFAULT_BUDGET).unwrap();
//! assert_eq!(parts, vec!["This is a test message. ... - Part 1 of 1"]);
//!
//! assert_eq!(segment("   ", DEFAULT_BUDGET), Err(SegmentError::EmptyInput));
//! ```

pub mod config;
pub mod error;
pub mod packer;
pub mod part;
pub mod segmenter;
pub mod suffix;

pub use config::{OversizePolicy, SegmentOptions, SuffixSizing, DEFAULT_BUDGET};
pub use error::{ParseOptionError, Result, SegmentError};
pub use packer::WordPacker;
pub use part::{Part, Segmentation};
pub use segmenter::{content_budget, estimate_total, Segmenter};
pub use suffix::Suffix;

/// Segment `message` into finished part strings with default options
///
/// # Errors
///
/// Returns [`SegmentError::EmptyInput`] for empty or whitespace-only input.
pub fn segment(message: &str, budget: usize) -> Result<Vec<String>> {
    Segmenter::with_budget(budget).segment_to_strings(message)
}
