//! Query types.

use std::fmt;

/// Position of a query in the dispatch order of one widget instance.
///
/// Strictly increasing and never reused, so comparing two sequences tells
/// which query was issued later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence(u64);

impl Sequence {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A query handed to the search provider.
///
/// Created when the debounce timer fires; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    sequence: Sequence,
}

impl Query {
    pub(crate) fn new(text: String, sequence: Sequence) -> Self {
        Self { text, sequence }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sequence(&self) -> Sequence {
        self.sequence
    }

    pub fn into_parts(self) -> (String, Sequence) {
        (self.text, self.sequence)
    }
}
