//! Undo/Redo History
//!
//! Bounded stacks of immutable DNA snapshots owned by an editor session.

use std::collections::VecDeque;

use crate::dna::Dna;

/// Default number of undo steps kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Past and future DNA snapshots
#[derive(Debug, Clone)]
pub struct DnaHistory {
    past: VecDeque<Dna>,
    future: Vec<Dna>,
    capacity: usize,
}

impl Default for DnaHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl DnaHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history keeping at most `capacity` undo steps (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record the state before an edit. Invalidates the redo stack.
    pub fn record(&mut self, snapshot: Dna) {
        self.push_past(snapshot);
        self.future.clear();
    }

    /// Step back. Returns the previous state, or `None` when there is nothing to undo.
    pub fn undo(&mut self, current: &Dna) -> Option<Dna> {
        let previous = self.past.pop_back()?;
        self.future.push(current.clone());
        Some(previous)
    }

    /// Step forward again after an undo
    pub fn redo(&mut self, current: &Dna) -> Option<Dna> {
        let next = self.future.pop()?;
        self.push_past(current.clone());
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undo steps available
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of redo steps available
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    fn push_past(&mut self, snapshot: Dna) {
        self.past.push_back(snapshot);
        while self.past.len() > self.capacity {
            self.past.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dna::Gene;

    fn dna_with_speed(value: f64) -> Dna {
        Dna {
            genes: vec![Gene::new("Speed", value)],
            ..Dna::default()
        }
    }

    #[test]
    fn test_undo_redo_sequence() {
        let mut history = DnaHistory::new();
        let first = dna_with_speed(1.0);
        let second = dna_with_speed(2.0);

        history.record(first.clone());
        assert!(history.can_undo());
        assert!(!history.can_redo());

        let restored = history.undo(&second).unwrap();
        assert_eq!(restored, first);
        assert!(history.can_redo());

        let replayed = history.redo(&restored).unwrap();
        assert_eq!(replayed, second);
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_empty_history_is_noop() {
        let mut history = DnaHistory::new();
        let current = dna_with_speed(1.0);
        assert!(history.undo(&current).is_none());
        assert!(history.redo(&current).is_none());
    }

    #[test]
    fn test_record_clears_future() {
        let mut history = DnaHistory::new();
        history.record(dna_with_speed(1.0));
        history.undo(&dna_with_speed(2.0));
        assert!(history.can_redo());

        history.record(dna_with_speed(3.0));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = DnaHistory::with_capacity(2);
        history.record(dna_with_speed(1.0));
        history.record(dna_with_speed(2.0));
        history.record(dna_with_speed(3.0));
        assert_eq!(history.undo_depth(), 2);

        let current = dna_with_speed(4.0);
        let a = history.undo(&current).unwrap();
        let b = history.undo(&a).unwrap();
        assert_eq!(a.genes[0].value, 3.0);
        assert_eq!(b.genes[0].value, 2.0);
        assert!(history.undo(&b).is_none());
    }
}
