// Integration tests for tree traversals, checked against recursive definitions

use algotty::algorithms::traversal::{TraversalKind, TraversalState};
use algotty::algorithms::StepMachine;
use algotty::engine::constants::TREE_VALUES;
use algotty::model::generate::{InstanceGenerator, TreeShape};
use algotty::model::tree::{Tree, TreeNodeId};
use std::collections::VecDeque;

fn recursive(tree: &Tree, id: Option<TreeNodeId>, kind: TraversalKind, out: &mut Vec<i64>) {
    let Some(node) = id.and_then(|id| tree.node(id)) else {
        return;
    };
    if kind == TraversalKind::Preorder {
        out.push(node.value);
    }
    recursive(tree, node.left, kind, out);
    if kind == TraversalKind::Inorder {
        out.push(node.value);
    }
    recursive(tree, node.right, kind, out);
    if kind == TraversalKind::Postorder {
        out.push(node.value);
    }
}

fn level_order(tree: &Tree) -> Vec<i64> {
    let mut out = Vec::new();
    let mut queue: VecDeque<TreeNodeId> = tree.root().into_iter().collect();
    while let Some(id) = queue.pop_front() {
        if let Some(node) = tree.node(id) {
            out.push(node.value);
            queue.extend(node.left);
            queue.extend(node.right);
        }
    }
    out
}

fn expected(tree: &Tree, kind: TraversalKind) -> Vec<i64> {
    if kind == TraversalKind::Bfs {
        return level_order(tree);
    }
    let mut out = Vec::new();
    recursive(tree, tree.root(), kind, &mut out);
    out
}

const KINDS: [TraversalKind; 4] = [
    TraversalKind::Inorder,
    TraversalKind::Preorder,
    TraversalKind::Postorder,
    TraversalKind::Bfs,
];

#[test]
fn test_traversals_match_recursive_definitions() {
    let mut generator = InstanceGenerator::new(Some(19));
    for shape in [TreeShape::Bst, TreeShape::Random] {
        for count in [1, 2, 5, 9, 20] {
            let tree = generator.tree(shape, count, TREE_VALUES);
            for kind in KINDS {
                let (state, _) = TraversalState::new(kind, &tree).run(&tree, 10_000);
                assert!(state.is_done());
                assert_eq!(
                    state.output,
                    expected(&tree, kind),
                    "{} over {:?} tree of {}",
                    kind,
                    shape,
                    count
                );
                assert_eq!(state.visited.len(), tree.len());
            }
        }
    }
}

#[test]
fn test_inorder_of_bst_is_sorted() {
    let mut generator = InstanceGenerator::new(Some(23));
    let tree = generator.tree(TreeShape::Bst, 15, TREE_VALUES);
    let (state, _) = TraversalState::new(TraversalKind::Inorder, &tree).run(&tree, 10_000);
    assert!(state.output.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_each_step_visits_at_most_one_node() {
    let mut generator = InstanceGenerator::new(Some(29));
    let tree = generator.tree(TreeShape::Random, 12, TREE_VALUES);
    for kind in KINDS {
        let mut state = TraversalState::new(kind, &tree);
        while !state.is_done() {
            let next = state.step(&tree);
            assert!(next.output.len() <= state.output.len() + 1);
            assert!(next.output.starts_with(&state.output));
            state = next;
        }
    }
}

#[test]
fn test_kind_names_parse() {
    assert_eq!("levelorder".parse::<TraversalKind>(), Ok(TraversalKind::Bfs));
    assert_eq!("preorder".parse::<TraversalKind>(), Ok(TraversalKind::Preorder));
    assert!("sideways".parse::<TraversalKind>().is_err());
}
