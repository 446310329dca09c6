//! In-place heap sort
//!
//! `Building` sifts down every internal node from `n/2 - 1` to `0`, then
//! `Sorting` repeatedly swaps the root behind the shrinking heap. Both hand
//! off to a nested `Sifting` phase that makes one parent/children comparison
//! per step and resumes the phase it came from when the node settles.

use super::SortView;
use crate::algorithms::StepMachine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiftOrigin {
    Building,
    Sorting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapSortPhase {
    Building,
    Sifting { from: SiftOrigin, index: usize },
    Sorting,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeapSort {
    pub view: SortView,
    pub phase: HeapSortPhase,
    /// Next internal node to sift while building; `None` once the heap is built
    pub build_index: Option<usize>,
    /// Number of leading slots still inside the heap
    pub heap_size: usize,
}

impl HeapSort {
    pub fn new(values: &[i64]) -> Self {
        let n = values.len();
        HeapSort {
            view: SortView::new(values),
            phase: HeapSortPhase::Building,
            build_index: (n / 2).checked_sub(1),
            heap_size: n,
        }
    }

    /// One comparison round of sift-down at `index`.
    /// Returns the index to continue from, or `None` once the node settled.
    fn sift_once(&mut self, index: usize) -> Option<usize> {
        let left = 2 * index + 1;
        let right = 2 * index + 2;
        let mut largest = index;

        let mut compared = vec![index];
        if left < self.heap_size {
            self.view.comparisons += 1;
            compared.push(left);
            if self.view.values[left] > self.view.values[largest] {
                largest = left;
            }
        }
        if right < self.heap_size {
            self.view.comparisons += 1;
            compared.push(right);
            if self.view.values[right] > self.view.values[largest] {
                largest = right;
            }
        }
        self.view.comparing = compared;

        if largest == index {
            self.view.status = format!("{} is larger than its children.", self.view.values[index]);
            return None;
        }
        self.view.swap(index, largest);
        self.view.status = format!(
            "Sifting down: swapped {} with larger child {}.",
            self.view.values[largest], self.view.values[index]
        );
        Some(largest)
    }
}

impl StepMachine for HeapSort {
    type Problem = ();

    fn advance(&mut self, _: &()) {
        self.view.clear_marks();
        match self.phase {
            HeapSortPhase::Building => match self.build_index {
                Some(index) => {
                    self.build_index = index.checked_sub(1);
                    self.view.status = format!("Heapifying subtree at index {}.", index);
                    self.phase = match self.sift_once(index) {
                        Some(next) => HeapSortPhase::Sifting {
                            from: SiftOrigin::Building,
                            index: next,
                        },
                        None => HeapSortPhase::Building,
                    };
                }
                None => {
                    self.view.status = String::from("Max-heap built. Starting sort phase.");
                    self.phase = HeapSortPhase::Sorting;
                }
            },
            HeapSortPhase::Sifting { from, index } => {
                self.phase = match self.sift_once(index) {
                    Some(next) => HeapSortPhase::Sifting { from, index: next },
                    None => match from {
                        SiftOrigin::Building => HeapSortPhase::Building,
                        SiftOrigin::Sorting => HeapSortPhase::Sorting,
                    },
                };
            }
            HeapSortPhase::Sorting => {
                if self.heap_size <= 1 {
                    self.view.finish();
                    self.phase = HeapSortPhase::Done;
                    return;
                }
                let last = self.heap_size - 1;
                self.view.swap(0, last);
                self.view.sorted.insert(last);
                self.heap_size -= 1;
                self.view.status = format!(
                    "Moved max {} to index {}. Restoring the heap.",
                    self.view.values[last], last
                );
                self.phase = HeapSortPhase::Sifting {
                    from: SiftOrigin::Sorting,
                    index: 0,
                };
            }
            HeapSortPhase::Done => {}
        }
    }

    fn is_done(&self) -> bool {
        self.phase == HeapSortPhase::Done
    }

    fn status(&self) -> &str {
        &self.view.status
    }
}
