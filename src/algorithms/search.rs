//! Linear and binary search
//!
//! Both read the values and target from a [`SearchProblem`]. A missing target
//! (the user typed something that is not a number) leaves the state
//! unchanged; the session refuses to step in that case before getting here.

use super::StepMachine;
use crate::model::SearchProblem;

/// Where a search stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Searching,
    Found(usize),
    NotFound,
}

impl SearchOutcome {
    pub fn is_over(self) -> bool {
        self != SearchOutcome::Searching
    }
}

/// Left-to-right scan, one comparison per step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearSearch {
    pub current: Option<usize>,
    pub outcome: SearchOutcome,
    pub comparisons: usize,
    pub status: String,
}

impl LinearSearch {
    pub fn new() -> Self {
        LinearSearch {
            current: None,
            outcome: SearchOutcome::Searching,
            comparisons: 0,
            status: String::from("Ready to search."),
        }
    }
}

impl Default for LinearSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl StepMachine for LinearSearch {
    type Problem = SearchProblem;

    fn advance(&mut self, problem: &SearchProblem) {
        let Some(target) = problem.target else {
            return;
        };
        let next = self.current.map_or(0, |i| i + 1);
        if next >= problem.values.len() {
            self.current = None;
            self.outcome = SearchOutcome::NotFound;
            self.status = format!("'{}' not found in the array.", target);
            return;
        }

        self.current = Some(next);
        self.comparisons += 1;
        if problem.values[next] == target {
            self.outcome = SearchOutcome::Found(next);
            self.status = format!("Found '{}' at index {}!", target, next);
        } else {
            self.status = format!("{} != {}. Moving on.", problem.values[next], target);
        }
    }

    fn is_done(&self) -> bool {
        self.outcome.is_over()
    }

    fn status(&self) -> &str {
        &self.status
    }
}

/// Binary search over sorted values
///
/// Steps alternate between computing `mid` and comparing at `mid` to narrow
/// the `low..=high` window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySearch {
    pub low: isize,
    pub high: isize,
    pub mid: Option<usize>,
    pub outcome: SearchOutcome,
    pub comparisons: usize,
    pub status: String,
}

impl BinarySearch {
    pub fn new(len: usize) -> Self {
        BinarySearch {
            low: 0,
            high: len as isize - 1,
            mid: None,
            outcome: SearchOutcome::Searching,
            comparisons: 0,
            status: String::from("Ready to search."),
        }
    }

    /// Indices still in the search window
    pub fn window(&self) -> std::ops::Range<usize> {
        if self.low > self.high {
            return 0..0;
        }
        self.low as usize..(self.high + 1) as usize
    }
}

impl StepMachine for BinarySearch {
    type Problem = SearchProblem;

    fn advance(&mut self, problem: &SearchProblem) {
        let Some(target) = problem.target else {
            return;
        };
        match self.mid {
            None => {
                if self.low > self.high {
                    self.outcome = SearchOutcome::NotFound;
                    self.status = format!("'{}' not found in the array.", target);
                    return;
                }
                let mid = (self.low + (self.high - self.low) / 2) as usize;
                self.mid = Some(mid);
                self.status = format!("Setting mid at index {}. Value: {}", mid, problem.values[mid]);
            }
            Some(mid) => {
                let value = problem.values[mid];
                self.comparisons += 1;
                if value == target {
                    self.outcome = SearchOutcome::Found(mid);
                    self.status = format!("Found '{}' at index {}!", target, mid);
                    return;
                }
                if value < target {
                    self.status = format!("'{}' > {}. Searching right half.", target, value);
                    self.low = mid as isize + 1;
                } else {
                    self.status = format!("'{}' < {}. Searching left half.", target, value);
                    self.high = mid as isize - 1;
                }
                self.mid = None;
            }
        }
    }

    fn is_done(&self) -> bool {
        self.outcome.is_over()
    }

    fn status(&self) -> &str {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(values: &[i64], target: i64) -> SearchProblem {
        SearchProblem {
            values: values.to_vec(),
            target: Some(target),
        }
    }

    #[test]
    fn test_linear_search_finds_first_match() {
        let p = problem(&[4, 7, 7, 1], 7);
        let (state, steps) = LinearSearch::new().run(&p, 100);
        assert_eq!(state.outcome, SearchOutcome::Found(1));
        assert_eq!(steps, 2);
    }

    #[test]
    fn test_linear_search_exhausts() {
        let p = problem(&[4, 7], 9);
        let (state, steps) = LinearSearch::new().run(&p, 100);
        assert_eq!(state.outcome, SearchOutcome::NotFound);
        assert_eq!(steps, 3);
    }

    #[test]
    fn test_binary_search_on_empty_array() {
        let p = problem(&[], 3);
        let (state, steps) = BinarySearch::new(0).run(&p, 100);
        assert_eq!(state.outcome, SearchOutcome::NotFound);
        assert_eq!(steps, 1);
    }

    #[test]
    fn test_missing_target_does_not_move() {
        let p = SearchProblem {
            values: vec![1, 2, 3],
            target: None,
        };
        let state = BinarySearch::new(3);
        assert_eq!(state.step(&p), state);
    }
}
