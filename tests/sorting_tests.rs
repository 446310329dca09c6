// Integration tests for the sorting state machines

use algotty::algorithms::sorting::{SortKind, SortState};
use algotty::algorithms::StepMachine;
use algotty::engine::constants::{COUNT_SORT_VALUES, RADIX_SORT_VALUES, SORT_VALUES};
use algotty::model::generate::InstanceGenerator;

const MAX_STEPS: usize = 100_000;

fn run_to_end(kind: SortKind, values: &[i64]) -> SortState {
    let state = SortState::new(kind, values).expect("valid input");
    let (done, steps) = state.run(&(), MAX_STEPS);
    assert!(done.is_done(), "{} did not finish in {} steps", kind.name(), steps);
    done
}

fn sorted_copy(values: &[i64]) -> Vec<i64> {
    let mut expected = values.to_vec();
    expected.sort();
    expected
}

#[test]
fn test_every_sort_orders_random_arrays() {
    let mut generator = InstanceGenerator::new(Some(42));
    for kind in SortKind::ALL {
        let range = match kind {
            SortKind::Count => COUNT_SORT_VALUES,
            SortKind::Radix => RADIX_SORT_VALUES,
            _ => SORT_VALUES,
        };
        for len in [2, 3, 7, 20, 33] {
            let values = generator.array(len, range.clone());
            let done = run_to_end(kind, &values);
            assert_eq!(
                done.values(),
                sorted_copy(&values).as_slice(),
                "{} failed on {:?}",
                kind.name(),
                values
            );
            assert_eq!(done.view().sorted.len(), len, "{} left unsorted slots", kind.name());
        }
    }
}

#[test]
fn test_duplicates_and_presorted_input() {
    let inputs = [
        vec![4, 4, 4, 4],
        vec![1, 2, 3, 4, 5, 6],
        vec![6, 5, 4, 3, 2, 1],
        vec![3, 1, 3, 1, 2, 2],
    ];
    for kind in SortKind::ALL {
        for values in &inputs {
            let done = run_to_end(kind, values);
            assert_eq!(done.values(), sorted_copy(values).as_slice(), "{}", kind.name());
        }
    }
}

#[test]
fn test_comparison_sorts_handle_negative_values() {
    let values = vec![0, -7, 12, -3, 5, -7];
    for kind in SortKind::ALL {
        if kind == SortKind::Radix {
            continue;
        }
        let done = run_to_end(kind, &values);
        assert_eq!(done.values(), &[-7, -7, -3, 0, 5, 12], "{}", kind.name());
    }
}

#[test]
fn test_radix_rejects_negative_values() {
    assert!(SortState::new(SortKind::Radix, &[3, -1, 2]).is_err());
}

#[test]
fn test_trivial_arrays_finish_immediately() {
    for kind in [
        SortKind::Bubble,
        SortKind::Insertion,
        SortKind::Selection,
        SortKind::Quick,
    ] {
        for values in [vec![], vec![9]] {
            let state = SortState::new(kind, &values).expect("valid input");
            let next = state.step(&());
            assert!(next.is_done(), "{} on {:?}", kind.name(), values);
            assert_eq!(next.view().comparisons, 0);
            assert_eq!(next.values(), values.as_slice());
        }
    }
}

#[test]
fn test_trivial_arrays_are_left_alone_by_every_sort() {
    for kind in SortKind::ALL {
        for values in [vec![], vec![9]] {
            let done = run_to_end(kind, &values);
            assert_eq!(done.values(), values.as_slice(), "{}", kind.name());
            assert_eq!(done.view().comparisons, 0, "{}", kind.name());
        }
    }
}

#[test]
fn test_bubble_sort_scenario() {
    let state = SortState::new(SortKind::Bubble, &[5, 3, 8, 1]).expect("valid input");
    let first = state.step(&());
    assert_eq!(first.values(), &[3, 5, 8, 1]);
    assert_eq!(first.view().comparing, vec![0, 1]);
    assert_eq!(first.view().swaps, 1);

    let (done, _) = first.run(&(), MAX_STEPS);
    assert_eq!(done.values(), &[1, 3, 5, 8]);
}

#[test]
fn test_step_leaves_previous_state_untouched() {
    let state = SortState::new(SortKind::Quick, &[9, 2, 7, 4]).expect("valid input");
    let before = state.clone();
    let _ = state.step(&());
    assert_eq!(state, before);
}

#[test]
fn test_finished_state_steps_to_itself() {
    let done = run_to_end(SortKind::Merge, &[3, 1, 2]);
    assert_eq!(done.step(&()), done);
}
