//! Segmentation output types

use crate::suffix::Suffix;
use core::fmt;

/// One transmittable part: content span followed by its suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    index: usize,
    total: usize,
    content: String,
}

impl Part {
    pub(crate) fn new(index: usize, total: usize, content: String) -> Self {
        Self {
            index,
            total,
            content,
        }
    }

    /// 1-based position of this part
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of parts in the segmentation
    pub fn total(&self) -> usize {
        self.total
    }

    /// Content span without the suffix
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Suffix appended to the content
    pub fn suffix(&self) -> Suffix {
        Suffix::new(self.index, self.total)
    }

    /// Length of the finished part in characters
    pub fn char_len(&self) -> usize {
        self.content.chars().count() + self.suffix().char_len()
    }

    /// Whether the finished part fits within `budget` characters
    pub fn fits(&self, budget: usize) -> bool {
        self.char_len() <= budget
    }

    /// Render the finished part (content + suffix)
    pub fn into_text(self) -> String {
        let suffix = self.suffix();
        let mut text = self.content;
        text.push_str(&suffix.to_string());
        text
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.content, self.suffix())
    }
}

/// Ordered parts of one message together with the sizing facts behind them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    parts: Vec<Part>,
    budget: usize,
    estimated_total: usize,
    content_budget: usize,
}

impl Segmentation {
    /// Attach suffixes to finished content spans
    pub(crate) fn assemble(
        spans: Vec<String>,
        budget: usize,
        estimated_total: usize,
        content_budget: usize,
    ) -> Self {
        let total = spans.len();
        let parts = spans
            .into_iter()
            .enumerate()
            .map(|(i, content)| Part::new(i + 1, total, content))
            .collect();

        Self {
            parts,
            budget,
            estimated_total,
            content_budget,
        }
    }

    /// Parts in transmission order
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always false for a successful segmentation
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Character budget per part
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Part count the content budget was sized for
    ///
    /// With estimated sizing this is the length-based estimate; with exact
    /// sizing it is the total the fixed-point search settled on.
    pub fn estimated_total(&self) -> usize {
        self.estimated_total
    }

    /// Content characters available per part during packing
    pub fn content_budget(&self) -> usize {
        self.content_budget
    }

    /// Parts whose finished length exceeds the budget
    pub fn overflowing(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter().filter(move |part| !part.fits(self.budget))
    }

    /// Iterate over the parts
    pub fn iter(&self) -> std::slice::Iter<'_, Part> {
        self.parts.iter()
    }

    /// Take the parts
    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }

    /// Render every part to its finished string
    pub fn into_strings(self) -> Vec<String> {
        self.parts.into_iter().map(Part::into_text).collect()
    }
}

impl IntoIterator for Segmentation {
    type Item = Part;
    type IntoIter = std::vec::IntoIter<Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_iter()
    }
}

impl<'a> IntoIterator for &'a Segmentation {
    type Item = &'a Part;
    type IntoIter = std::slice::Iter<'a, Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}
