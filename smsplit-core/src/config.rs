//! Configuration types for the segmenter

use crate::error::ParseOptionError;
use core::str::FromStr;

/// Classic single-SMS character budget
pub const DEFAULT_BUDGET: usize = 160;

/// How the suffix width is accounted for when sizing the content budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SuffixSizing {
    /// Estimate the part count once from the message length and keep the
    /// resulting content budget for the whole packing pass.
    ///
    /// The estimate can disagree with the final part count, so a part may end
    /// up one or two characters over budget when the real total has more
    /// digits than the estimate.
    #[default]
    Estimated,
    /// Re-pack until the widest suffix of the real total fits the content
    /// budget that was used for packing.
    Exact,
}

impl SuffixSizing {
    /// Lowercase name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            SuffixSizing::Estimated => "estimated",
            SuffixSizing::Exact => "exact",
        }
    }
}

impl FromStr for SuffixSizing {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "estimated" | "estimate" => Ok(SuffixSizing::Estimated),
            "exact" => Ok(SuffixSizing::Exact),
            _ => Err(ParseOptionError {
                kind: "sizing",
                value: s.to_string(),
                expected: "estimated, exact",
            }),
        }
    }
}

/// What to do with a word longer than the content budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OversizePolicy {
    /// Place the word alone in its own part and let that part overflow
    #[default]
    Keep,
    /// Hard-wrap the word into content-budget sized character slices
    Split,
}

impl OversizePolicy {
    /// Lowercase name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            OversizePolicy::Keep => "keep",
            OversizePolicy::Split => "split",
        }
    }
}

impl FromStr for OversizePolicy {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(OversizePolicy::Keep),
            "split" => Ok(OversizePolicy::Split),
            _ => Err(ParseOptionError {
                kind: "oversize policy",
                value: s.to_string(),
                expected: "keep, split",
            }),
        }
    }
}

/// Segmenter options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Maximum characters per part, suffix included
    pub budget: usize,
    /// Suffix sizing strategy
    pub sizing: SuffixSizing,
    /// Overlong word handling
    pub oversize: OversizePolicy,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            sizing: SuffixSizing::default(),
            oversize: OversizePolicy::default(),
        }
    }
}

impl SegmentOptions {
    /// Default options with a custom budget
    pub fn with_budget(budget: usize) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }

    /// Set the sizing strategy
    pub fn sizing(mut self, sizing: SuffixSizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Set the oversize policy
    pub fn oversize(mut self, oversize: OversizePolicy) -> Self {
        self.oversize = oversize;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SegmentOptions::default();
        assert_eq!(options.budget, 160);
        assert_eq!(options.sizing, SuffixSizing::Estimated);
        assert_eq!(options.oversize, OversizePolicy::Keep);
    }

    #[test]
    fn test_builder_methods() {
        let options = SegmentOptions::with_budget(70)
            .sizing(SuffixSizing::Exact)
            .oversize(OversizePolicy::Split);
        assert_eq!(options.budget, 70);
        assert_eq!(options.sizing, SuffixSizing::Exact);
        assert_eq!(options.oversize, OversizePolicy::Split);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("exact".parse::<SuffixSizing>().unwrap(), SuffixSizing::Exact);
        assert_eq!(
            " Estimated ".parse::<SuffixSizing>().unwrap(),
            SuffixSizing::Estimated
        );
        assert_eq!("SPLIT".parse::<OversizePolicy>().unwrap(), OversizePolicy::Split);
        assert!("wrap".parse::<OversizePolicy>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for sizing in [SuffixSizing::Estimated, SuffixSizing::Exact] {
            assert_eq!(sizing.as_str().parse::<SuffixSizing>().unwrap(), sizing);
        }
        for policy in [OversizePolicy::Keep, OversizePolicy::Split] {
            assert_eq!(policy.as_str().parse::<OversizePolicy>().unwrap(), policy);
        }
    }
}
