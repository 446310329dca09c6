//! LSD radix sort over base-10 digits
//!
//! `Distributing` drops one element into its digit bucket per step;
//! `Collecting` concatenates the ten buckets back into the array and moves to
//! the next digit place. Finishes once the digit place exceeds the maximum.

use super::SortView;
use crate::algorithms::StepMachine;
use crate::engine::errors::VisualizerError;

const RADIX: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadixPhase {
    Distributing { index: usize },
    Collecting,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadixSort {
    pub view: SortView,
    pub phase: RadixPhase,
    pub digit_place: i64,
    pub max_value: i64,
    pub buckets: Vec<Vec<i64>>,
}

impl RadixSort {
    /// Fails on negative input, which base-10 digit buckets cannot order
    pub fn new(values: &[i64]) -> Result<Self, VisualizerError> {
        if let Some(&value) = values.iter().find(|v| **v < 0) {
            return Err(VisualizerError::NegativeValue { value });
        }
        Ok(RadixSort {
            view: SortView::new(values),
            phase: RadixPhase::Distributing { index: 0 },
            digit_place: 1,
            max_value: values.iter().copied().max().unwrap_or(0),
            buckets: vec![Vec::new(); RADIX as usize],
        })
    }

    pub fn digit(&self, value: i64) -> usize {
        ((value / self.digit_place) % RADIX) as usize
    }
}

impl StepMachine for RadixSort {
    type Problem = ();

    fn advance(&mut self, _: &()) {
        let n = self.view.len();
        self.view.clear_marks();
        match self.phase {
            RadixPhase::Distributing { index } => {
                if n < 2 {
                    self.view.finish();
                    self.phase = RadixPhase::Done;
                    return;
                }
                let value = self.view.values[index];
                let digit = self.digit(value);
                self.buckets[digit].push(value);
                self.view.comparing = vec![index];
                self.view.status = format!(
                    "{} goes to bucket {} ({}s place).",
                    value, digit, self.digit_place
                );
                self.phase = if index + 1 < n {
                    RadixPhase::Distributing { index: index + 1 }
                } else {
                    RadixPhase::Collecting
                };
            }
            RadixPhase::Collecting => {
                let collected: Vec<i64> = self.buckets.iter_mut().flat_map(std::mem::take).collect();
                for (index, value) in collected.into_iter().enumerate() {
                    self.view.write(index, value);
                }
                self.view.swapping = (0..n).collect();

                match self.digit_place.checked_mul(RADIX) {
                    Some(next) if next <= self.max_value => {
                        self.digit_place = next;
                        self.view.status = format!("Collected buckets. Sorting by {}s place.", next);
                        self.phase = RadixPhase::Distributing { index: 0 };
                    }
                    _ => {
                        self.view.finish();
                        self.phase = RadixPhase::Done;
                    }
                }
            }
            RadixPhase::Done => {}
        }
    }

    fn is_done(&self) -> bool {
        self.phase == RadixPhase::Done
    }

    fn status(&self) -> &str {
        &self.view.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_values() {
        assert_eq!(
            RadixSort::new(&[3, -1]).err(),
            Some(VisualizerError::NegativeValue { value: -1 })
        );
    }

    #[test]
    fn test_one_pass_per_digit_place() {
        let sort = RadixSort::new(&[170, 45, 75, 90, 802, 24, 2, 66]).map(|s| s.run(&(), 1000));
        let (state, steps) = sort.expect("valid input");
        assert_eq!(state.view.values, vec![2, 24, 45, 66, 75, 90, 170, 802]);
        // three places, each 8 distributions plus one collection
        assert_eq!(steps, 3 * 9);
    }
}
