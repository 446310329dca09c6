//! Selection sort: scan for the minimum, then swap it into the boundary slot

use super::SortView;
use crate::algorithms::StepMachine;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Scanning,
    Swapping,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSort {
    pub view: SortView,
    pub phase: SelectionPhase,
    /// Boundary: everything left of `i` is final
    pub i: usize,
    /// Next index to scan
    pub j: usize,
    /// Index of the smallest value seen in this scan
    pub min_index: usize,
}

impl SelectionSort {
    pub fn new(values: &[i64]) -> Self {
        SelectionSort {
            view: SortView::new(values),
            phase: SelectionPhase::Scanning,
            i: 0,
            j: 1,
            min_index: 0,
        }
    }
}

impl StepMachine for SelectionSort {
    type Problem = ();

    fn advance(&mut self, _: &()) {
        let n = self.view.len();
        self.view.clear_marks();
        match self.phase {
            SelectionPhase::Scanning => {
                if n < 2 || self.i >= n - 1 {
                    self.view.finish();
                    self.phase = SelectionPhase::Done;
                    return;
                }
                if self.view.compare(self.j, self.min_index) == Ordering::Less {
                    self.min_index = self.j;
                    self.view.status = format!(
                        "New minimum {} at index {}.",
                        self.view.values[self.j], self.j
                    );
                } else {
                    self.view.status = format!(
                        "{} is not smaller than {}.",
                        self.view.values[self.j], self.view.values[self.min_index]
                    );
                }
                self.j += 1;
                if self.j >= n {
                    self.phase = SelectionPhase::Swapping;
                }
            }
            SelectionPhase::Swapping => {
                if self.min_index != self.i {
                    self.view.swap(self.i, self.min_index);
                    self.view.status = format!(
                        "Swapped minimum {} into index {}.",
                        self.view.values[self.i], self.i
                    );
                } else {
                    self.view.status =
                        format!("{} is already in place.", self.view.values[self.i]);
                }
                self.view.sorted.insert(self.i);
                self.i += 1;
                self.min_index = self.i;
                self.j = self.i + 1;
                self.phase = SelectionPhase::Scanning;
                if self.i >= n - 1 {
                    self.view.finish();
                    self.phase = SelectionPhase::Done;
                }
            }
            SelectionPhase::Done => {}
        }
    }

    fn is_done(&self) -> bool {
        self.phase == SelectionPhase::Done
    }

    fn status(&self) -> &str {
        &self.view.status
    }
}
