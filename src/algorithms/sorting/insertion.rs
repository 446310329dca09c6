//! Insertion sort
//!
//! Phases: `StartIteration` captures the key, `Shifting` moves one larger
//! element right per step, `Inserting` drops the key into the hole.

use super::SortView;
use crate::algorithms::StepMachine;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionPhase {
    StartIteration,
    Shifting,
    Inserting,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertionSort {
    pub view: SortView,
    pub phase: InsertionPhase,
    /// Index of the element being inserted
    pub i: usize,
    pub key: Option<i64>,
    /// Slot the key will land in if shifting stops now (`j + 1`)
    pub hole: usize,
}

impl InsertionSort {
    pub fn new(values: &[i64]) -> Self {
        InsertionSort {
            view: SortView::new(values),
            phase: InsertionPhase::StartIteration,
            i: 1,
            key: None,
            hole: 0,
        }
    }
}

impl StepMachine for InsertionSort {
    type Problem = ();

    fn advance(&mut self, _: &()) {
        self.view.clear_marks();
        match self.phase {
            InsertionPhase::StartIteration => {
                if self.i >= self.view.len() {
                    self.view.finish();
                    self.phase = InsertionPhase::Done;
                    return;
                }
                let key = self.view.values[self.i];
                self.key = Some(key);
                self.hole = self.i;
                self.view.comparing = vec![self.i];
                self.view.status = format!("Picked key {} at index {}.", key, self.i);
                self.phase = InsertionPhase::Shifting;
            }
            InsertionPhase::Shifting => {
                let Some(key) = self.key else {
                    self.phase = InsertionPhase::StartIteration;
                    return;
                };
                if self.hole == 0 {
                    self.phase = InsertionPhase::Inserting;
                    self.view.status = String::from("Reached the front of the array.");
                    return;
                }
                let prev = self.hole - 1;
                self.view.comparisons += 1;
                self.view.comparing = vec![prev];
                if self.view.values[prev].cmp(&key) == Ordering::Greater {
                    let moved = self.view.values[prev];
                    self.view.write(self.hole, moved);
                    self.view.status = format!("{} > {}: shift {} right.", moved, key, moved);
                    self.hole = prev;
                } else {
                    self.view.status = format!("{} <= {}: stop shifting.", self.view.values[prev], key);
                    self.phase = InsertionPhase::Inserting;
                }
            }
            InsertionPhase::Inserting => {
                if let Some(key) = self.key.take() {
                    self.view.write(self.hole, key);
                    self.view.status = format!("Inserted {} at index {}.", key, self.hole);
                }
                self.view.sorted = (0..=self.i).collect();
                self.i += 1;
                self.phase = InsertionPhase::StartIteration;
            }
            InsertionPhase::Done => {}
        }
    }

    fn is_done(&self) -> bool {
        self.phase == InsertionPhase::Done
    }

    fn status(&self) -> &str {
        &self.view.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_keys_keep_input_order() {
        let input = [2, 5, 2, 1, 5, 1, 2];
        // which input slot each working-array slot currently holds
        let mut sources: Vec<usize> = (0..input.len()).collect();
        let mut key_source = 0;
        let mut sort = InsertionSort::new(&input);
        while !sort.is_done() {
            let next = sort.step(&());
            match sort.phase {
                InsertionPhase::StartIteration if next.key.is_some() => {
                    key_source = sources[sort.i];
                }
                InsertionPhase::Shifting if next.hole < sort.hole => {
                    sources[sort.hole] = sources[next.hole];
                }
                InsertionPhase::Inserting => sources[sort.hole] = key_source,
                _ => {}
            }
            sort = next;
        }

        assert_eq!(sort.view.values, vec![1, 1, 2, 2, 2, 5, 5]);
        assert_eq!(sources, vec![3, 5, 0, 2, 6, 1, 4]);
    }

    #[test]
    fn test_shift_stops_at_equal_key() {
        let sort = InsertionSort::new(&[4, 4]);
        let picked = sort.step(&());
        let compared = picked.step(&());
        assert_eq!(compared.phase, InsertionPhase::Inserting);
        assert_eq!(compared.hole, 1);
        assert_eq!(compared.view.comparisons, 1);
    }
}
