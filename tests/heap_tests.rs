// Integration tests for animated heap operations

use algotty::algorithms::heap::{HeapKind, HeapState};
use algotty::algorithms::StepMachine;
use algotty::engine::constants::HEAP_CAPACITY;
use algotty::engine::VisualizerError;

fn settle(heap: &HeapState) -> HeapState {
    let (settled, _) = heap.run(&(), 10_000);
    assert!(settled.is_done());
    settled
}

fn insert_all(kind: HeapKind, values: &[i64]) -> HeapState {
    let mut heap = HeapState::new(kind, HEAP_CAPACITY);
    for &value in values {
        heap.insert(value).expect("room in heap");
        heap = settle(&heap);
    }
    heap
}

#[test]
fn test_min_heap_insert_scenario() {
    let heap = insert_all(HeapKind::Min, &[5, 2, 8]);
    assert_eq!(heap.items, vec![2, 5, 8]);
    assert!(heap.is_heap());
}

#[test]
fn test_sift_up_is_one_swap_per_step() {
    let mut heap = insert_all(HeapKind::Min, &[5, 7, 9]);
    heap.insert(1).expect("room in heap");
    assert_eq!(heap.items, vec![5, 7, 9, 1]);

    let heap = heap.step(&());
    assert_eq!(heap.items, vec![5, 1, 9, 7]);
    assert_eq!(heap.swapping, vec![3, 1]);

    let heap = heap.step(&());
    assert_eq!(heap.items, vec![1, 5, 9, 7]);

    let heap = heap.step(&());
    assert!(heap.is_done());
}

#[test]
fn test_full_heap_refuses_insert() {
    let values: Vec<i64> = (1..=HEAP_CAPACITY as i64).collect();
    let mut heap = insert_all(HeapKind::Max, &values);
    assert_eq!(heap.len(), HEAP_CAPACITY);
    assert_eq!(
        heap.insert(99),
        Err(VisualizerError::HeapFull {
            capacity: HEAP_CAPACITY
        })
    );
    assert_eq!(heap.items[0], HEAP_CAPACITY as i64);
}

#[test]
fn test_empty_heap_refuses_extract() {
    let mut heap = HeapState::new(HeapKind::Min, HEAP_CAPACITY);
    assert_eq!(heap.extract(), Err(VisualizerError::HeapEmpty));
    assert!(heap.is_empty());
}

#[test]
fn test_extracting_everything_yields_sorted_order() {
    let values = [42, 7, 19, 3, 88, 61, 25];
    for kind in [HeapKind::Min, HeapKind::Max] {
        let mut heap = insert_all(kind, &values);
        let mut drained = Vec::new();
        while !heap.is_empty() {
            drained.push(heap.extract().expect("non-empty"));
            heap = settle(&heap);
            assert!(heap.is_heap());
        }
        let mut expected = values.to_vec();
        expected.sort();
        if kind == HeapKind::Max {
            expected.reverse();
        }
        assert_eq!(drained, expected);
    }
}

#[test]
fn test_build_queues_values_up_to_capacity() {
    let mut heap = HeapState::new(HeapKind::Min, 4);
    let queued = heap.build(&[9, 8, 7, 6, 5, 4]).expect("room in heap");
    assert_eq!(queued, 4);
    assert!(heap.is_busy());
    assert_eq!(heap.insert(1), Err(VisualizerError::OperationInProgress));

    let heap = settle(&heap);
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.items[0], 6);
    assert!(heap.is_heap());
}
