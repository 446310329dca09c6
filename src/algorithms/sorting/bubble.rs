//! Bubble sort: one adjacent comparison per step

use super::SortView;
use crate::algorithms::StepMachine;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct BubbleSort {
    pub view: SortView,
    /// Completed passes; the last `i` slots are final
    pub i: usize,
    /// Left index of the next comparison
    pub j: usize,
    done: bool,
}

impl BubbleSort {
    pub fn new(values: &[i64]) -> Self {
        BubbleSort {
            view: SortView::new(values),
            i: 0,
            j: 0,
            done: false,
        }
    }
}

impl StepMachine for BubbleSort {
    type Problem = ();

    fn advance(&mut self, _: &()) {
        let n = self.view.len();
        self.view.clear_marks();
        if n < 2 || self.i >= n - 1 {
            self.view.finish();
            self.done = true;
            return;
        }

        let (j, i) = (self.j, self.i);
        if self.view.compare(j, j + 1) == Ordering::Greater {
            self.view.swap(j, j + 1);
            self.view.status = format!(
                "{} > {}: swapped.",
                self.view.values[j + 1],
                self.view.values[j]
            );
        } else {
            self.view.status = format!(
                "{} <= {}: no swap.",
                self.view.values[j],
                self.view.values[j + 1]
            );
        }

        self.j += 1;
        if self.j >= n - i - 1 {
            self.view.sorted.insert(n - 1 - i);
            self.i += 1;
            self.j = 0;
            if self.i >= n - 1 {
                self.view.finish();
                self.done = true;
            }
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
    fn test_first_step_swaps_leading_pair() {
        let sort = BubbleSort::new(&[5, 3, 8, 1]);
        let next = sort.step(&());
        assert_eq!(next.view.values, vec![3, 5, 8, 1]);
        assert_eq!(next.view.comparing, vec![0, 1]);
        assert_eq!(next.view.comparisons, 1);
        // the original state is untouched
        assert_eq!(sort.view.values, vec![5, 3, 8, 1]);
    }

    #[test]
    fn test_pass_marks_tail_sorted() {
        let (state, steps) = BubbleSort::new(&[5, 3, 8, 1]).run(&(), 3);
        assert_eq!(steps, 3);
        assert_eq!(state.view.values, vec![3, 5, 1, 8]);
        assert!(state.view.sorted.contains(&3));
        assert_eq!(state.i, 1);
    }
}
