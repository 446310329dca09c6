// Integration tests for linear and binary search

use algotty::algorithms::search::{BinarySearch, LinearSearch, SearchOutcome};
use algotty::algorithms::StepMachine;
use algotty::engine::constants::SEARCH_VALUES;
use algotty::model::generate::InstanceGenerator;
use algotty::model::SearchProblem;

#[test]
fn test_linear_search_agrees_with_position() {
    let mut generator = InstanceGenerator::new(Some(3));
    for _ in 0..50 {
        let values = generator.array(15, SEARCH_VALUES);
        let target = generator.value(SEARCH_VALUES);
        let problem = SearchProblem {
            values: values.clone(),
            target: Some(target),
        };
        let (state, _) = LinearSearch::new().run(&problem, 1000);
        match values.iter().position(|&v| v == target) {
            Some(index) => assert_eq!(state.outcome, SearchOutcome::Found(index)),
            None => assert_eq!(state.outcome, SearchOutcome::NotFound),
        }
    }
}

#[test]
fn test_binary_search_finds_every_member() {
    let mut generator = InstanceGenerator::new(Some(5));
    let values = generator.sorted_distinct(17, SEARCH_VALUES);
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));

    for (index, &target) in values.iter().enumerate() {
        let problem = SearchProblem {
            values: values.clone(),
            target: Some(target),
        };
        let (state, steps) = BinarySearch::new(values.len()).run(&problem, 1000);
        assert_eq!(state.outcome, SearchOutcome::Found(index));
        // one step to pick mid and one to compare, per halving
        assert!(steps <= 2 * 5, "{} took {} steps", target, steps);
    }
}

#[test]
fn test_binary_search_reports_absent_targets() {
    let values = vec![10, 20, 30, 40, 50];
    for target in [5, 25, 55] {
        let problem = SearchProblem {
            values: values.clone(),
            target: Some(target),
        };
        let (state, _) = BinarySearch::new(values.len()).run(&problem, 1000);
        assert_eq!(state.outcome, SearchOutcome::NotFound);
        assert!(state.window().is_empty());
    }
}

#[test]
fn test_binary_search_first_step_sets_mid() {
    let problem = SearchProblem {
        values: vec![1, 3, 5, 7, 9],
        target: Some(9),
    };
    let state = BinarySearch::new(5).step(&problem);
    assert_eq!(state.mid, Some(2));
    assert_eq!(state.comparisons, 0);

    let state = state.step(&problem);
    assert_eq!(state.comparisons, 1);
    assert_eq!(state.window(), 3..5);
}
