//! Quick sort with Lomuto partitioning
//!
//! Recursion is replaced by a stack of `(low, high)` ranges. Each step makes
//! one comparison against the pivot (`values[high]`), or places the pivot
//! once the scanner reaches it.

use super::SortView;
use crate::algorithms::StepMachine;
use std::cmp::Ordering;

/// A partition in progress over `low..=high`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub low: usize,
    pub high: usize,
    /// Next slot for an element smaller than the pivot (`i + 1` in the
    /// textbook formulation, which keeps it non-negative)
    pub wall: usize,
    /// Scanner
    pub j: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuickSort {
    pub view: SortView,
    pub stack: Vec<(usize, usize)>,
    pub partition: Option<Partition>,
    done: bool,
}

impl QuickSort {
    pub fn new(values: &[i64]) -> Self {
        let mut view = SortView::new(values);
        let mut stack = Vec::new();
        match values.len() {
            0 => {}
            1 => {
                view.sorted.insert(0);
            }
            n => stack.push((0, n - 1)),
        }
        QuickSort {
            view,
            stack,
            partition: None,
            done: false,
        }
    }

    pub fn pivot_index(&self) -> Option<usize> {
        self.partition.map(|p| p.high)
    }

    /// Queue a sub-range, or mark it sorted when it holds a single element
    fn push_range(&mut self, low: usize, high: usize) {
        match low.cmp(&high) {
            Ordering::Less => self.stack.push((low, high)),
            Ordering::Equal => {
                self.view.sorted.insert(low);
            }
            Ordering::Greater => {}
        }
    }

    fn place_pivot(&mut self, p: Partition) {
        self.view.swap(p.wall, p.high);
        self.view.sorted.insert(p.wall);
        self.view.status = format!(
            "Pivot {} placed at its final index {}.",
            self.view.values[p.wall], p.wall
        );
        // right first so the left range is partitioned next
        if p.wall < p.high {
            self.push_range(p.wall + 1, p.high);
        }
        if p.wall > p.low {
            self.push_range(p.low, p.wall - 1);
        }
        self.partition = None;
    }
}

impl StepMachine for QuickSort {
    type Problem = ();

    fn advance(&mut self, _: &()) {
        self.view.clear_marks();
        let mut p = match self.partition {
            Some(p) => p,
            None => match self.stack.pop() {
                Some((low, high)) => Partition {
                    low,
                    high,
                    wall: low,
                    j: low,
                },
                None => {
                    self.view.finish();
                    self.done = true;
                    return;
                }
            },
        };

        if p.j < p.high {
            let pivot = self.view.values[p.high];
            if self.view.compare(p.j, p.high) == Ordering::Less {
                if p.wall != p.j {
                    self.view.swap(p.wall, p.j);
                }
                self.view.status = format!(
                    "{} < pivot {}: moved behind the wall.",
                    self.view.values[p.wall], pivot
                );
                p.wall += 1;
            } else {
                self.view.status = format!(
                    "{} >= pivot {}: stays right of the wall.",
                    self.view.values[p.j], pivot
                );
            }
            p.j += 1;
            self.partition = Some(p);
        } else {
            self.place_pivot(p);
        }

        if self.partition.is_none() && self.stack.is_empty() {
            self.view.finish();
            self.done = true;
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn status(&self) -> &str {
        &self.view.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_partition_places_pivot() {
        let sort = QuickSort::new(&[4, 1, 3]);
        // two comparisons, then pivot placement
        let (state, _) = sort.run(&(), 3);
        assert_eq!(state.view.values, vec![1, 3, 4]);
        assert!(state.view.sorted.contains(&1));
        assert_eq!(state.view.comparisons, 2);
    }
}
