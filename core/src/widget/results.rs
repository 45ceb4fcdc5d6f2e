//! Result set model.

use crate::types::{SearchResult, Sequence};

/// Candidates from the most recently applied response.
///
/// `items` and `loading` only change together, through the methods below,
/// so readers never observe a half-applied response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    sequence: Option<Sequence>,
    /// Sequence whose response produced `items`.
    applied: Option<Sequence>,
    items: Vec<SearchResult>,
    loading: bool,
}

/// Read operations.
impl ResultSet {
    pub fn items(&self) -> &[SearchResult] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&SearchResult> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Sequence of the query these items (or the pending load) belong to.
    pub fn sequence(&self) -> Option<Sequence> {
        self.sequence
    }

    /// True when `items` belong to the latest query, which is no longer loading.
    pub fn is_settled(&self) -> bool {
        !self.loading && self.applied == self.sequence
    }
}

/// Mutation operations.
impl ResultSet {
    /// Marks a load in progress. Previous items stay visible until replaced.
    pub(crate) fn begin(&mut self, sequence: Sequence) {
        self.sequence = Some(sequence);
        self.loading = true;
    }

    pub(crate) fn apply(&mut self, sequence: Sequence, items: Vec<SearchResult>) {
        self.sequence = Some(sequence);
        self.applied = Some(sequence);
        self.items = items;
        self.loading = false;
    }

    /// Failed lookups degrade to an empty result set.
    pub(crate) fn fail(&mut self, sequence: Sequence) {
        self.apply(sequence, Vec::new());
    }

    /// Ends a load that will never be applied, keeping the current items.
    pub(crate) fn abandon(&mut self) {
        self.loading = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
