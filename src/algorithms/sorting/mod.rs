//! Sorting state machines
//!
//! Every sort works on its own copy of the input, exposed through a shared
//! [`SortView`] so the presentation layer can draw any of them the same way.
//! None of them call the standard library's sort.
//!
//! - [`bubble`], [`insertion`], [`selection`]: quadratic sorts
//! - [`quick`]: Lomuto partitioning driven by an explicit range stack
//! - [`merge`]: bottom-up two-way and three-way merge sort
//! - [`heap_sort`]: in-place max-heap sort
//! - [`count`], [`radix`]: distribution sorts

pub mod bubble;
pub mod count;
pub mod heap_sort;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;

use super::StepMachine;
use crate::engine::errors::VisualizerError;
use std::cmp::Ordering;
use std::collections::BTreeSet;

pub use bubble::BubbleSort;
pub use count::CountSort;
pub use heap_sort::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use radix::RadixSort;
pub use selection::SelectionSort;

/// Working array plus per-step highlights and counters
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortView {
    pub values: Vec<i64>,
    /// Indices compared in the last step
    pub comparing: Vec<usize>,
    /// Indices written or swapped in the last step
    pub swapping: Vec<usize>,
    /// Indices known to hold their final value
    pub sorted: BTreeSet<usize>,
    pub comparisons: usize,
    pub swaps: usize,
    pub writes: usize,
    pub status: String,
}

impl SortView {
    pub fn new(values: &[i64]) -> Self {
        SortView {
            values: values.to_vec(),
            status: String::from("Ready to sort."),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn clear_marks(&mut self) {
        self.comparing.clear();
        self.swapping.clear();
    }

    /// Compare two slots of the working array, counting and highlighting it
    fn compare(&mut self, a: usize, b: usize) -> Ordering {
        self.comparisons += 1;
        self.comparing = vec![a, b];
        self.values[a].cmp(&self.values[b])
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
        self.swaps += 1;
        self.writes += 2;
        self.swapping = vec![a, b];
    }

    fn write(&mut self, index: usize, value: i64) {
        self.values[index] = value;
        self.writes += 1;
        self.swapping = vec![index];
    }

    fn finish(&mut self) {
        self.clear_marks();
        self.sorted = (0..self.values.len()).collect();
        self.status = String::from("Array is sorted!");
    }
}

/// Which sort a [`SortState`] runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
    ThreeWayMerge,
    Heap,
    Count,
    Radix,
}

impl SortKind {
    pub const ALL: [SortKind; 9] = [
        SortKind::Bubble,
        SortKind::Insertion,
        SortKind::Selection,
        SortKind::Quick,
        SortKind::Merge,
        SortKind::ThreeWayMerge,
        SortKind::Heap,
        SortKind::Count,
        SortKind::Radix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortKind::Bubble => "Bubble Sort",
            SortKind::Insertion => "Insertion Sort",
            SortKind::Selection => "Selection Sort",
            SortKind::Quick => "Quick Sort",
            SortKind::Merge => "Merge Sort",
            SortKind::ThreeWayMerge => "3-Way Merge Sort",
            SortKind::Heap => "Heap Sort",
            SortKind::Count => "Count Sort",
            SortKind::Radix => "Radix Sort",
        }
    }
}

/// One of the sorting machines
#[derive(Debug, Clone, PartialEq)]
pub enum SortState {
    Bubble(BubbleSort),
    Insertion(InsertionSort),
    Selection(SelectionSort),
    Quick(QuickSort),
    Merge(MergeSort),
    Heap(HeapSort),
    Count(CountSort),
    Radix(RadixSort),
}

impl SortState {
    /// Initial state of `kind` over a copy of `values`
    pub fn new(kind: SortKind, values: &[i64]) -> Result<Self, VisualizerError> {
        Ok(match kind {
            SortKind::Bubble => SortState::Bubble(BubbleSort::new(values)),
            SortKind::Insertion => SortState::Insertion(InsertionSort::new(values)),
            SortKind::Selection => SortState::Selection(SelectionSort::new(values)),
            SortKind::Quick => SortState::Quick(QuickSort::new(values)),
            SortKind::Merge => SortState::Merge(MergeSort::new(values)),
            SortKind::ThreeWayMerge => SortState::Merge(MergeSort::three_way(values)),
            SortKind::Heap => SortState::Heap(HeapSort::new(values)),
            SortKind::Count => SortState::Count(CountSort::new(values)),
            SortKind::Radix => SortState::Radix(RadixSort::new(values)?),
        })
    }

    pub fn view(&self) -> &SortView {
        match self {
            SortState::Bubble(s) => &s.view,
            SortState::Insertion(s) => &s.view,
            SortState::Selection(s) => &s.view,
            SortState::Quick(s) => &s.view,
            SortState::Merge(s) => &s.view,
            SortState::Heap(s) => &s.view,
            SortState::Count(s) => &s.view,
            SortState::Radix(s) => &s.view,
        }
    }

    pub fn values(&self) -> &[i64] {
        &self.view().values
    }
}

impl StepMachine for SortState {
    type Problem = ();

    fn advance(&mut self, problem: &()) {
        match self {
            SortState::Bubble(s) => s.advance(problem),
            SortState::Insertion(s) => s.advance(problem),
            SortState::Selection(s) => s.advance(problem),
            SortState::Quick(s) => s.advance(problem),
            SortState::Merge(s) => s.advance(problem),
            SortState::Heap(s) => s.advance(problem),
            SortState::Count(s) => s.advance(problem),
            SortState::Radix(s) => s.advance(problem),
        }
    }

    fn is_done(&self) -> bool {
        match self {
            SortState::Bubble(s) => s.is_done(),
            SortState::Insertion(s) => s.is_done(),
            SortState::Selection(s) => s.is_done(),
            SortState::Quick(s) => s.is_done(),
            SortState::Merge(s) => s.is_done(),
            SortState::Heap(s) => s.is_done(),
            SortState::Count(s) => s.is_done(),
            SortState::Radix(s) => s.is_done(),
        }
    }

    fn status(&self) -> &str {
        &self.view().status
    }
}
