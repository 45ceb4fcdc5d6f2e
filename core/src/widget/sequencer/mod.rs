//! Request sequencing and stale-response suppression.

use crate::types::{Query, Sequence};

/// Hands out strictly increasing sequence numbers and remembers which one is
/// current.
///
/// A response is accepted only if its sequence is current. Retiring the
/// current sequence makes every outstanding response stale without reusing
/// any number.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: u64,
    current: Option<Sequence>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a query for `text` and makes it the current one.
    pub fn issue(&mut self, text: String) -> Query {
        self.issued += 1;
        let sequence = Sequence::new(self.issued);
        self.current = Some(sequence);
        Query::new(text, sequence)
    }

    pub fn is_current(&self, sequence: Sequence) -> bool {
        self.current == Some(sequence)
    }

    pub fn current(&self) -> Option<Sequence> {
        self.current
    }

    /// The highest sequence ever issued, current or not.
    pub fn last_issued(&self) -> Option<Sequence> {
        (self.issued > 0).then(|| Sequence::new(self.issued))
    }

    /// Stops accepting responses for the current sequence.
    pub fn retire(&mut self) -> Option<Sequence> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests;
