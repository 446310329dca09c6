//! Counting sort
//!
//! Phases, one cell per step: `Counting` tallies each input value,
//! `ModifyingCount` turns the tallies into prefix sums, `BuildingOutput`
//! places input values right-to-left using the decremented sums (stable),
//! `Copying` writes the output back over the working array.
//!
//! Counts are indexed by `value - min`, so any value range works.

use super::SortView;
use crate::algorithms::StepMachine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountPhase {
    Counting { index: usize },
    ModifyingCount { index: usize },
    /// `remaining` input cells left to place, taken from the right
    BuildingOutput { remaining: usize },
    Copying { index: usize },
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountSort {
    pub view: SortView,
    pub phase: CountPhase,
    pub counts: Vec<usize>,
    pub output: Vec<Option<i64>>,
    /// Value stored at `counts[0]`
    pub offset: i64,
}

impl CountSort {
    pub fn new(values: &[i64]) -> Self {
        let min = values.iter().copied().min().unwrap_or(0);
        let max = values.iter().copied().max().unwrap_or(0);
        let buckets = usize::try_from(max - min).map_or(0, |span| span + 1);
        CountSort {
            view: SortView::new(values),
            phase: CountPhase::Counting { index: 0 },
            counts: vec![0; if values.is_empty() { 0 } else { buckets }],
            output: vec![None; values.len()],
            offset: min,
        }
    }

    fn bucket(&self, value: i64) -> usize {
        usize::try_from(value - self.offset).unwrap_or(0)
    }
}

impl StepMachine for CountSort {
    type Problem = ();

    fn advance(&mut self, _: &()) {
        let n = self.view.len();
        self.view.clear_marks();
        match self.phase {
            CountPhase::Counting { index } => {
                if n < 2 {
                    self.view.finish();
                    self.phase = CountPhase::Done;
                    return;
                }
                let value = self.view.values[index];
                let bucket = self.bucket(value);
                self.counts[bucket] += 1;
                self.view.comparing = vec![index];
                self.view.status = format!("Counted {} (now {}).", value, self.counts[bucket]);
                self.phase = if index + 1 < n {
                    CountPhase::Counting { index: index + 1 }
                } else {
                    CountPhase::ModifyingCount { index: 1 }
                };
            }
            CountPhase::ModifyingCount { index } => {
                if index < self.counts.len() {
                    self.counts[index] += self.counts[index - 1];
                    self.view.status = format!(
                        "Cumulative count for {} is {}.",
                        self.offset + index as i64,
                        self.counts[index]
                    );
                }
                self.phase = if index + 1 < self.counts.len() {
                    CountPhase::ModifyingCount { index: index + 1 }
                } else {
                    CountPhase::BuildingOutput { remaining: n }
                };
            }
            CountPhase::BuildingOutput { remaining } => {
                let index = remaining - 1;
                let value = self.view.values[index];
                let bucket = self.bucket(value);
                self.counts[bucket] -= 1;
                let position = self.counts[bucket];
                self.output[position] = Some(value);
                self.view.comparing = vec![index];
                self.view.status = format!("Placed {} at output index {}.", value, position);
                self.phase = if index > 0 {
                    CountPhase::BuildingOutput { remaining: index }
                } else {
                    CountPhase::Copying { index: 0 }
                };
            }
            CountPhase::Copying { index } => {
                if let Some(value) = self.output[index] {
                    self.view.write(index, value);
                    self.view.sorted.insert(index);
                    self.view.status = format!("Copied {} back to index {}.", value, index);
                }
                if index + 1 < n {
                    self.phase = CountPhase::Copying { index: index + 1 };
                } else {
                    self.view.finish();
                    self.phase = CountPhase::Done;
                }
            }
            CountPhase::Done => {}
        }
    }

    fn is_done(&self) -> bool {
        self.phase == CountPhase::Done
    }

    fn status(&self) -> &str {
        &self.view.status
    }
}
