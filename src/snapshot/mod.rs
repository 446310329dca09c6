// Snapshot history for stepping backwards

use crate::algorithms::AlgorithmState;
use std::collections::VecDeque;

/// A superseded algorithm state and the step count it was reached at
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub state: AlgorithmState,
    pub step: usize,
}

/// Bounded history of superseded states
///
/// Holds at most `limit` snapshots. Pushing past the limit forgets the
/// oldest one, so stepping back only reaches the most recent states.
#[derive(Debug, Clone)]
pub struct StateHistory {
    snapshots: VecDeque<Snapshot>,
    limit: usize,
    dropped: usize,
}

impl StateHistory {
    pub fn new(limit: usize) -> Self {
        StateHistory {
            snapshots: VecDeque::new(),
            limit,
            dropped: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.limit == 0 {
            self.dropped += 1;
            return;
        }
        if self.snapshots.len() == self.limit {
            self.snapshots.pop_front();
            self.dropped += 1;
        }
        self.snapshots.push_back(snapshot);
    }

    /// Take the most recent snapshot back out
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshots forgotten because the limit was reached
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::search::LinearSearch;

    fn snapshot(step: usize) -> Snapshot {
        Snapshot {
            state: AlgorithmState::LinearSearch(LinearSearch::new()),
            step,
        }
    }

    #[test]
    fn test_oldest_is_dropped_past_limit() {
        let mut history = StateHistory::new(2);
        for step in 0..3 {
            history.push(snapshot(step));
        }
        assert_eq!(history.len(), 2);
        assert_eq!(history.dropped(), 1);
        assert_eq!(history.pop().map(|s| s.step), Some(2));
        assert_eq!(history.pop().map(|s| s.step), Some(1));
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_zero_limit_keeps_nothing() {
        let mut history = StateHistory::new(0);
        history.push(snapshot(0));
        assert!(history.is_empty());
        assert_eq!(history.limit(), 0);
    }
}
