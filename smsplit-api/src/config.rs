//! High-level configuration API

use crate::error::{ApiError, Result};
use smsplit_core::{OversizePolicy, SegmentOptions, Segmenter, SuffixSizing, DEFAULT_BUDGET};

/// High-level configuration for message splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub(crate) budget: usize,
    pub(crate) sizing: SuffixSizing,
    pub(crate) oversize: OversizePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            sizing: SuffixSizing::Estimated,
            oversize: OversizePolicy::Keep,
        }
    }
}

impl Config {
    /// Every part fits the budget: exact suffix sizing and long words sliced
    pub fn strict() -> Self {
        Self {
            sizing: SuffixSizing::Exact,
            oversize: OversizePolicy::Split,
            ..Self::default()
        }
    }

    /// Single-pass estimate, long words kept whole (the default)
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Characters per part, suffix included
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Suffix sizing strategy
    pub fn sizing(&self) -> SuffixSizing {
        self.sizing
    }

    /// Overlong word handling
    pub fn oversize(&self) -> OversizePolicy {
        self.oversize
    }

    pub(crate) fn segmenter(&self) -> Segmenter {
        Segmenter::new(
            SegmentOptions::with_budget(self.budget)
                .sizing(self.sizing)
                .oversize(self.oversize),
        )
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the per-part character budget
    pub fn budget(mut self, budget: usize) -> Self {
        self.config.budget = budget;
        self
    }

    /// Set the suffix sizing strategy
    pub fn sizing(mut self, sizing: SuffixSizing) -> Self {
        self.config.sizing = sizing;
        self
    }

    /// Set the overlong word policy
    pub fn oversize(mut self, oversize: OversizePolicy) -> Self {
        self.config.oversize = oversize;
        self
    }

    /// Start from the strict preset
    pub fn strict(mut self) -> Self {
        let budget = self.config.budget;
        self.config = Config::strict();
        self.config.budget = budget;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.budget == 0 {
            return Err(ApiError::Config(
                "budget must be greater than 0".to_string(),
            ));
        }

        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.budget(), 160);
        assert_eq!(config.sizing(), SuffixSizing::Estimated);
        assert_eq!(config.oversize(), OversizePolicy::Keep);
        assert_eq!(Config::lenient(), config);
    }

    #[test]
    fn test_builder_rejects_zero_budget() {
        let err = Config::builder().budget(0).build().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
        assert!(err.to_string().contains("budget must be greater than 0"));
    }

    #[test]
    fn test_strict_keeps_custom_budget() {
        let config = Config::builder().budget(70).strict().build().unwrap();
        assert_eq!(config.budget(), 70);
        assert_eq!(config.sizing(), SuffixSizing::Exact);
        assert_eq!(config.oversize(), OversizePolicy::Split);
    }
}
