//! Min/max binary heap with animated sift-up and sift-down
//!
//! The heap lives in a dense vector (`parent = (i - 1) / 2`, children
//! `2i + 1` and `2i + 2`). Operations change the structure immediately and
//! leave a sift phase behind; every following step performs one
//! comparison and at most one swap until the heap property holds again.

use super::StepMachine;
use crate::engine::errors::VisualizerError;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Ordering of the heap. The comparator is the only difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeapKind {
    #[default]
    Min,
    Max,
}

impl HeapKind {
    /// True when `a` belongs above `b`
    pub fn precedes(self, a: i64, b: i64) -> bool {
        match self {
            HeapKind::Min => a < b,
            HeapKind::Max => a > b,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HeapKind::Min => "Min Heap",
            HeapKind::Max => "Max Heap",
        }
    }
}

impl fmt::Display for HeapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeapKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "min" => Ok(HeapKind::Min),
            "max" => Ok(HeapKind::Max),
            other => Err(format!("unknown heap kind '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapPhase {
    Idle,
    SiftUp { index: usize },
    SiftDown { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapState {
    pub kind: HeapKind,
    pub items: Vec<i64>,
    pub capacity: usize,
    pub phase: HeapPhase,
    /// Values queued by a bulk build, inserted one at a time
    pub pending: VecDeque<i64>,
    pub last_extracted: Option<i64>,
    pub comparing: Vec<usize>,
    pub swapping: Vec<usize>,
    pub status: String,
}

pub fn parent(index: usize) -> Option<usize> {
    index.checked_sub(1).map(|i| i / 2)
}

impl HeapState {
    pub fn new(kind: HeapKind, capacity: usize) -> Self {
        HeapState {
            kind,
            items: Vec::new(),
            capacity,
            phase: HeapPhase::Idle,
            pending: VecDeque::new(),
            last_extracted: None,
            comparing: Vec::new(),
            swapping: Vec::new(),
            status: format!("{} is empty.", kind.name()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True while an earlier operation is still sifting or queued
    pub fn is_busy(&self) -> bool {
        self.phase != HeapPhase::Idle || !self.pending.is_empty()
    }

    /// Check the heap property over every parent/child pair
    pub fn is_heap(&self) -> bool {
        (1..self.items.len()).all(|i| {
            let p = (i - 1) / 2;
            !self.kind.precedes(self.items[i], self.items[p])
        })
    }

    /// Append `value` and start sifting it up
    pub fn insert(&mut self, value: i64) -> Result<(), VisualizerError> {
        if self.is_busy() {
            return Err(VisualizerError::OperationInProgress);
        }
        if self.items.len() >= self.capacity {
            return Err(VisualizerError::HeapFull {
                capacity: self.capacity,
            });
        }
        self.push(value);
        Ok(())
    }

    /// Remove and return the root, moving the last item up to sift down
    pub fn extract(&mut self) -> Result<i64, VisualizerError> {
        if self.is_busy() {
            return Err(VisualizerError::OperationInProgress);
        }
        let Some(last) = self.items.pop() else {
            return Err(VisualizerError::HeapEmpty);
        };
        self.clear_marks();
        let root = match self.items.first_mut() {
            Some(first) => {
                let root = std::mem::replace(first, last);
                self.phase = HeapPhase::SiftDown { index: 0 };
                self.swapping = vec![0];
                self.status = format!("Extracted {}. Moved {} to the root.", root, last);
                root
            }
            None => {
                self.status = format!("Extracted {}. Heap is now empty.", last);
                last
            }
        };
        self.last_extracted = Some(root);
        Ok(root)
    }

    /// Queue `values` for insertion, each fully sifted before the next.
    /// Values beyond the remaining capacity are dropped; returns how many were queued.
    pub fn build(&mut self, values: &[i64]) -> Result<usize, VisualizerError> {
        if self.is_busy() {
            return Err(VisualizerError::OperationInProgress);
        }
        let room = self.capacity.saturating_sub(self.items.len());
        if room == 0 && !values.is_empty() {
            return Err(VisualizerError::HeapFull {
                capacity: self.capacity,
            });
        }
        self.pending.extend(values.iter().take(room));
        self.status = format!("Building heap from {} values.", self.pending.len());
        Ok(self.pending.len())
    }

    fn push(&mut self, value: i64) {
        self.clear_marks();
        self.items.push(value);
        let index = self.items.len() - 1;
        self.swapping = vec![index];
        self.phase = HeapPhase::SiftUp { index };
        self.status = format!("Inserted {} at index {}. Sifting up.", value, index);
    }

    fn clear_marks(&mut self) {
        self.comparing.clear();
        self.swapping.clear();
    }

    fn sift_up(&mut self, index: usize) {
        let Some(p) = parent(index) else {
            self.phase = HeapPhase::Idle;
            self.status = format!("{} reached the root.", self.items[index]);
            return;
        };
        self.comparing = vec![index, p];
        let (child, above) = (self.items[index], self.items[p]);
        if self.kind.precedes(child, above) {
            self.items.swap(index, p);
            self.swapping = vec![index, p];
            self.phase = HeapPhase::SiftUp { index: p };
            self.status = format!("Swapped {} with parent {}.", child, above);
        } else {
            self.phase = HeapPhase::Idle;
            self.status = format!("{} is in place below {}.", child, above);
        }
    }

    fn sift_down(&mut self, index: usize) {
        let mut best = index;
        let mut compared = vec![index];
        for child in [2 * index + 1, 2 * index + 2] {
            if child < self.items.len() {
                compared.push(child);
                if self.kind.precedes(self.items[child], self.items[best]) {
                    best = child;
                }
            }
        }
        self.comparing = compared;

        if best == index {
            self.phase = HeapPhase::Idle;
            self.status = format!("{} is in place.", self.items[index]);
            return;
        }
        self.items.swap(index, best);
        self.swapping = vec![index, best];
        self.phase = HeapPhase::SiftDown { index: best };
        self.status = format!(
            "Swapped {} with child {}.",
            self.items[best], self.items[index]
        );
    }
}

impl StepMachine for HeapState {
    type Problem = ();

    fn advance(&mut self, _: &()) {
        self.clear_marks();
        match self.phase {
            HeapPhase::SiftUp { index } => self.sift_up(index),
            HeapPhase::SiftDown { index } => self.sift_down(index),
            HeapPhase::Idle => {
                if let Some(value) = self.pending.pop_front() {
                    self.push(value);
                }
            }
        }
    }

    fn is_done(&self) -> bool {
        !self.is_busy()
    }

    fn status(&self) -> &str {
        &self.status
    }
}
