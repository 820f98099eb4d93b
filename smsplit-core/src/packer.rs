//! Greedy word packing
//!
//! Lengths are counted in `char`s, never bytes.

use crate::config::OversizePolicy;
use std::mem;

/// Packs whitespace-separated words into content spans of bounded length
#[derive(Debug)]
pub struct WordPacker {
    limit: usize,
    oversize: OversizePolicy,
}

impl WordPacker {
    /// Create a packer for spans of at most `limit` characters
    pub fn new(limit: usize, oversize: OversizePolicy) -> Self {
        Self { limit, oversize }
    }

    /// Content limit in characters
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Pack words in order, joining words of one span with a single space
    ///
    /// A word that does not fit the limit on its own is either kept whole in
    /// its own span or sliced, depending on the oversize policy.
    pub fn pack<'a, I>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut spans = SpanBuilder::new(self.limit);

        for word in words {
            let word_chars = word.chars().count();
            match self.oversize {
                OversizePolicy::Split if self.limit > 0 && word_chars > self.limit => {
                    for slice in char_slices(word, self.limit) {
                        spans.push(slice, slice.chars().count());
                    }
                }
                _ => spans.push(word, word_chars),
            }
        }

        spans.finish()
    }
}

/// Accumulates the current span and the finished ones
struct SpanBuilder {
    limit: usize,
    spans: Vec<String>,
    current: String,
    current_chars: usize,
}

impl SpanBuilder {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            spans: Vec::new(),
            current: String::new(),
            current_chars: 0,
        }
    }

    fn push(&mut self, word: &str, word_chars: usize) {
        if self.current_chars > 0 && self.current_chars + 1 + word_chars > self.limit {
            self.close();
        }

        if self.current_chars > 0 {
            self.current.push(' ');
            self.current_chars += 1;
        }
        self.current.push_str(word);
        self.current_chars += word_chars;
    }

    fn close(&mut self) {
        if !self.current.is_empty() {
            self.spans.push(mem::take(&mut self.current));
            self.current_chars = 0;
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.close();
        self.spans
    }
}

/// Split `word` into consecutive slices of at most `size` chars
///
/// `size` must be non-zero.
fn char_slices(word: &str, size: usize) -> impl Iterator<Item = &str> {
    let mut rest = word;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest
            .char_indices()
            .nth(size)
            .map_or(rest.len(), |(offset, _)| offset);
        let (head, tail) = rest.split_at(end);
        rest = tail;
        Some(head)
    })
}
