//! Bottom-up merge sort, two-way or three-way
//!
//! The full list of merge operations is computed up front, widths doubling
//! (or tripling). Each step places one element into the destination slot by
//! comparing the heads of the runs, copied into an auxiliary buffer. On equal
//! heads the leftmost run wins, which keeps the sort stable.

use super::SortView;
use crate::algorithms::StepMachine;
use std::collections::VecDeque;

/// Merge of adjacent runs covering `left..=right`.
/// `ends` holds the inclusive end index of every run except the last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOp {
    pub left: usize,
    pub ends: Vec<usize>,
    pub right: usize,
}

impl MergeOp {
    /// Inclusive `(start, end)` bounds of each run; empty runs are skipped
    pub fn runs(&self) -> Vec<(usize, usize)> {
        let mut runs = Vec::with_capacity(self.ends.len() + 1);
        let mut start = self.left;
        for &end in self.ends.iter().chain(std::iter::once(&self.right)) {
            if start <= end {
                runs.push((start, end));
                start = end + 1;
            }
        }
        runs
    }
}

/// The merge currently being performed
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveMerge {
    pub op: MergeOp,
    /// Copy of `values[left..=right]` taken when the merge started
    pub aux: Vec<i64>,
    /// Per run: next unread position in `aux`, and one past the run's end
    pub heads: Vec<(usize, usize)>,
    /// Destination index in the working array
    pub k: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeSort {
    pub view: SortView,
    pub ways: usize,
    pub queue: VecDeque<MergeOp>,
    pub current: Option<ActiveMerge>,
    done: bool,
}

impl MergeSort {
    pub fn new(values: &[i64]) -> Self {
        Self::with_ways(values, 2)
    }

    pub fn three_way(values: &[i64]) -> Self {
        Self::with_ways(values, 3)
    }

    fn with_ways(values: &[i64], ways: usize) -> Self {
        MergeSort {
            view: SortView::new(values),
            ways,
            queue: merge_schedule(values.len(), ways),
            current: None,
            done: false,
        }
    }

    fn begin(&self, op: MergeOp) -> ActiveMerge {
        let aux = self.view.values[op.left..=op.right].to_vec();
        let heads = op
            .runs()
            .into_iter()
            .map(|(start, end)| (start - op.left, end - op.left + 1))
            .collect();
        ActiveMerge {
            k: op.left,
            op,
            aux,
            heads,
        }
    }
}

/// Every merge for an array of length `n`, in execution order
pub fn merge_schedule(n: usize, ways: usize) -> VecDeque<MergeOp> {
    let mut ops = VecDeque::new();
    let mut width = 1;
    while width < n {
        let mut i = 0;
        while i < n {
            let ends: Vec<usize> = (1..ways).map(|r| (i + r * width - 1).min(n - 1)).collect();
            let right = (i + ways * width - 1).min(n - 1);
            if ends[0] < right {
                ops.push_back(MergeOp {
                    left: i,
                    ends,
                    right,
                });
            }
            i += ways * width;
        }
        width *= ways;
    }
    ops
}

impl StepMachine for MergeSort {
    type Problem = ();

    fn advance(&mut self, _: &()) {
        self.view.clear_marks();
        let mut merge = match self.current.take() {
            Some(merge) => merge,
            None => match self.queue.pop_front() {
                Some(op) => self.begin(op),
                None => {
                    self.view.finish();
                    self.done = true;
                    return;
                }
            },
        };

        // leftmost minimum head; strict comparison keeps ties on the left
        let mut winner: Option<usize> = None;
        let mut live = 0usize;
        for (run, &(head, end)) in merge.heads.iter().enumerate() {
            if head >= end {
                continue;
            }
            live += 1;
            match winner {
                Some(w) if merge.aux[head] >= merge.aux[merge.heads[w].0] => {}
                _ => winner = Some(run),
            }
        }
        self.view.comparisons += live.saturating_sub(1);
        self.view.comparing = merge
            .heads
            .iter()
            .filter(|(head, end)| head < end)
            .map(|(head, _)| merge.op.left + head)
            .collect();

        if let Some(run) = winner {
            let value = merge.aux[merge.heads[run].0];
            merge.heads[run].0 += 1;
            self.view.write(merge.k, value);
            self.view.status = format!("Placed {} at index {}.", value, merge.k);
            merge.k += 1;
        }

        if merge.k > merge.op.right {
            if self.queue.is_empty() {
                self.view.finish();
                self.done = true;
            }
        } else {
            self.current = Some(merge);
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
    fn test_two_way_schedule() {
        let ops: Vec<_> = merge_schedule(5, 2)
            .into_iter()
            .map(|op| (op.left, op.ends[0], op.right))
            .collect();
        assert_eq!(ops, vec![(0, 0, 1), (2, 2, 3), (0, 1, 3), (0, 3, 4)]);
    }

    #[test]
    fn test_three_way_schedule_covers_array() {
        let ops = merge_schedule(10, 3);
        let last = ops.back().cloned();
        assert_eq!(last.map(|op| (op.left, op.right)), Some((0, 9)));
    }

    /// Run to completion, recording which input slot each output value came from
    fn trace_sources(mut sort: MergeSort) -> (Vec<i64>, Vec<usize>) {
        let mut sources: Vec<usize> = (0..sort.view.len()).collect();
        let mut aux_sources = Vec::new();
        while !sort.is_done() {
            let (heads, k) = match &sort.current {
                Some(merge) => (merge.heads.clone(), merge.k),
                None => match sort.queue.front() {
                    Some(op) => {
                        aux_sources = sources[op.left..=op.right].to_vec();
                        (sort.begin(op.clone()).heads, op.left)
                    }
                    None => (Vec::new(), 0),
                },
            };
            let next = sort.step(&());
            let consumed = match &next.current {
                Some(merge) => heads
                    .iter()
                    .zip(&merge.heads)
                    .position(|(before, after)| after.0 > before.0),
                // the merge just finished, so its last value came from the only live run
                None => heads.iter().position(|(head, end)| head < end),
            };
            if let Some(run) = consumed {
                sources[k] = aux_sources[heads[run].0];
            }
            sort = next;
        }
        (sort.view.values, sources)
    }

    fn assert_stable(input: &[i64], values: &[i64], sources: &[usize]) {
        for (i, &source) in sources.iter().enumerate() {
            assert_eq!(values[i], input[source]);
        }
        for pair in sources.windows(2).zip(values.windows(2)) {
            let (src, val) = pair;
            assert!(val[0] <= val[1], "not sorted: {:?}", values);
            if val[0] == val[1] {
                assert!(src[0] < src[1], "ties reordered: {:?}", sources);
            }
        }
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let input = [3, 1, 3, 2, 1, 3, 2, 1, 2];
        let (values, sources) = trace_sources(MergeSort::new(&input));
        assert_stable(&input, &values, &sources);

        let (values, sources) = trace_sources(MergeSort::three_way(&input));
        assert_stable(&input, &values, &sources);
    }

    #[test]
    fn test_trivial_arrays_have_no_merges() {
        assert!(merge_schedule(0, 2).is_empty());
        assert!(merge_schedule(1, 3).is_empty());
    }
}
