//! Part suffix rendering
//!
//! Every part ends with `" ... - Part {i} of {n}"`. The rendered width only
//! depends on the decimal digit counts of `i` and `n`, so widths are computed
//! arithmetically instead of by formatting.

use core::fmt;

/// Characters contributed by the suffix text around the two numbers
pub const SUFFIX_FIXED_CHARS: usize = 16;

/// Width of the suffix with two-digit index and total (`" ... - Part 99 of 99"`)
///
/// Used as the worst-case suffix width when estimating the part count.
pub const MAX_ESTIMATE_SUFFIX_CHARS: usize = SUFFIX_FIXED_CHARS + 4;

/// Characters held back on top of [`MAX_ESTIMATE_SUFFIX_CHARS`] when estimating
pub const SAFETY_MARGIN: usize = 6;

/// A part suffix for position `index` of `total`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Suffix {
    index: usize,
    total: usize,
}

impl Suffix {
    /// Create a suffix for 1-based `index` out of `total`
    pub fn new(index: usize, total: usize) -> Self {
        Self { index, total }
    }

    /// The widest suffix a sequence of `total` parts carries (the last one)
    pub fn widest(total: usize) -> Self {
        Self::new(total, total)
    }

    /// 1-based position
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total number of parts
    pub fn total(&self) -> usize {
        self.total
    }

    /// Rendered length in characters
    pub fn char_len(&self) -> usize {
        SUFFIX_FIXED_CHARS + decimal_digits(self.index) + decimal_digits(self.total)
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ... - Part {} of {}", self.index, self.total)
    }
}

/// Number of decimal digits needed to print `n`
pub fn decimal_digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(Suffix::new(1, 3).to_string(), " ... - Part 1 of 3");
        assert_eq!(Suffix::new(12, 105).to_string(), " ... - Part 12 of 105");
    }

    #[test]
    fn test_char_len_matches_rendering() {
        for (index, total) in [(1, 1), (9, 9), (9, 10), (10, 10), (99, 100), (1, 12_345)] {
            let suffix = Suffix::new(index, total);
            assert_eq!(
                suffix.char_len(),
                suffix.to_string().chars().count(),
                "width mismatch for {index} of {total}"
            );
        }
    }

    #[test]
    fn test_estimate_width_is_two_digit_suffix() {
        assert_eq!(Suffix::widest(99).char_len(), MAX_ESTIMATE_SUFFIX_CHARS);
        assert_eq!(MAX_ESTIMATE_SUFFIX_CHARS, 20);
    }

    #[test]
    fn test_decimal_digits() {
        assert_eq!(decimal_digits(0), 1);
        assert_eq!(decimal_digits(7), 1);
        assert_eq!(decimal_digits(10), 2);
        assert_eq!(decimal_digits(999), 3);
        assert_eq!(decimal_digits(1000), 4);
    }
}
