//! Tree traversals driven by an explicit stack (depth-first orders) or an
//! explicit queue (breadth-first)
//!
//! One step is one push, pop or visit. `current` is the node the cursor sits
//! on, `None` once it walked off a leaf; the depth-first orders finish when
//! the cursor is empty and the stack is drained, BFS when the queue is.

use super::StepMachine;
use crate::model::tree::{Direction, Tree, TreeNodeId};
use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalKind {
    #[default]
    Inorder,
    Preorder,
    Postorder,
    Bfs,
}

impl TraversalKind {
    pub fn name(self) -> &'static str {
        match self {
            TraversalKind::Inorder => "Inorder Traversal",
            TraversalKind::Preorder => "Preorder Traversal",
            TraversalKind::Postorder => "Postorder Traversal",
            TraversalKind::Bfs => "Breadth-First Traversal",
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TraversalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inorder" => Ok(TraversalKind::Inorder),
            "preorder" => Ok(TraversalKind::Preorder),
            "postorder" => Ok(TraversalKind::Postorder),
            "bfs" | "levelorder" => Ok(TraversalKind::Bfs),
            other => Err(format!("unknown traversal '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalState {
    pub kind: TraversalKind,
    pub stack: Vec<TreeNodeId>,
    pub queue: VecDeque<TreeNodeId>,
    pub visited: BTreeSet<TreeNodeId>,
    pub current: Option<TreeNodeId>,
    pub parent_of_current: Option<TreeNodeId>,
    pub direction_from_parent: Option<Direction>,
    /// Last node emitted by postorder, to tell "back from the right child"
    /// apart from "first arrival"
    pub last_visited: Option<TreeNodeId>,
    /// Values in visit order
    pub output: Vec<i64>,
    pub complete: bool,
    pub status: String,
}

impl TraversalState {
    pub fn new(kind: TraversalKind, tree: &Tree) -> Self {
        let root = tree.root();
        TraversalState {
            kind,
            stack: Vec::new(),
            queue: root.into_iter().collect(),
            visited: BTreeSet::new(),
            current: root,
            parent_of_current: None,
            direction_from_parent: None,
            last_visited: None,
            output: Vec::new(),
            complete: false,
            status: String::from("Ready to traverse."),
        }
    }

    fn visit(&mut self, id: TreeNodeId, value: i64) {
        self.visited.insert(id);
        self.output.push(value);
    }

    fn move_to(&mut self, next: Option<TreeNodeId>, parent: TreeNodeId, direction: Direction) {
        self.current = next;
        self.parent_of_current = Some(parent);
        self.direction_from_parent = Some(direction);
    }

    fn finish(&mut self) {
        self.complete = true;
        self.current = None;
        self.parent_of_current = None;
        self.direction_from_parent = None;
        self.status = String::from("Traversal complete!");
    }

    fn step_inorder(&mut self, tree: &Tree) {
        if let Some(id) = self.current {
            let Some(node) = tree.node(id) else {
                self.current = None;
                return;
            };
            self.stack.push(id);
            self.move_to(node.left, id, Direction::Left);
            self.status = format!("Current: {}. Push to stack, move left.", node.value);
        } else if let Some(id) = self.stack.pop() {
            let Some(node) = tree.node(id) else { return };
            self.visit(id, node.value);
            self.move_to(node.right, id, Direction::Right);
            self.status = format!("Popped {}. Visit, move right.", node.value);
        } else {
            self.finish();
        }
    }

    fn step_preorder(&mut self, tree: &Tree) {
        if let Some(id) = self.current {
            let Some(node) = tree.node(id) else {
                self.current = None;
                return;
            };
            self.visit(id, node.value);
            self.stack.push(id);
            self.move_to(node.left, id, Direction::Left);
            self.status = format!("Visit {}, push to stack, move left.", node.value);
        } else if let Some(id) = self.stack.pop() {
            let Some(node) = tree.node(id) else { return };
            self.move_to(node.right, id, Direction::Right);
            self.status = format!("Popped {}. Move right.", node.value);
        } else {
            self.finish();
        }
    }

    fn step_postorder(&mut self, tree: &Tree) {
        if let Some(id) = self.current {
            let Some(node) = tree.node(id) else {
                self.current = None;
                return;
            };
            self.stack.push(id);
            self.move_to(node.left, id, Direction::Left);
            self.status = format!("Current: {}. Push, move left.", node.value);
        } else if let Some(&top) = self.stack.last() {
            let Some(node) = tree.node(top) else {
                self.stack.pop();
                return;
            };
            match node.right {
                Some(right) if Some(right) != self.last_visited => {
                    self.move_to(Some(right), top, Direction::Right);
                    self.status = format!("Returned to {}. Move right.", node.value);
                }
                _ => {
                    self.stack.pop();
                    self.visit(top, node.value);
                    self.last_visited = Some(top);
                    self.current = None;
                    self.parent_of_current = None;
                    self.direction_from_parent = None;
                    self.status = format!("Visit {}.", node.value);
                }
            }
        } else {
            self.finish();
        }
    }

    fn step_bfs(&mut self, tree: &Tree) {
        let Some(id) = self.queue.pop_front() else {
            self.finish();
            return;
        };
        let Some(node) = tree.node(id) else { return };
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        self.visit(id, node.value);
        self.current = Some(id);
        self.parent_of_current = None;
        self.direction_from_parent = None;
        self.status = format!("Visited {}. Enqueued children.", node.value);
    }
}

impl StepMachine for TraversalState {
    type Problem = Tree;

    fn advance(&mut self, tree: &Tree) {
        match self.kind {
            TraversalKind::Inorder => self.step_inorder(tree),
            TraversalKind::Preorder => self.step_preorder(tree),
            TraversalKind::Postorder => self.step_postorder(tree),
            TraversalKind::Bfs => self.step_bfs(tree),
        }
    }

    fn is_done(&self) -> bool {
        self.complete
    }

    fn status(&self) -> &str {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tree::TreeNode;

    //      1
    //     / \
    //    2   3
    //     \
    //      4
    fn sample() -> Tree {
        let mut tree = Tree::new();
        tree.insert(TreeNode {
            id: 0,
            value: 1,
            left: Some(1),
            right: Some(2),
        });
        tree.insert(TreeNode {
            id: 1,
            value: 2,
            left: None,
            right: Some(3),
        });
        tree.insert(TreeNode::leaf(2, 3));
        tree.insert(TreeNode::leaf(3, 4));
        tree.set_root(Some(0));
        tree
    }

    fn output(kind: TraversalKind) -> Vec<i64> {
        let tree = sample();
        let (state, _) = TraversalState::new(kind, &tree).run(&tree, 1000);
        assert!(state.is_done());
        state.output
    }

    #[test]
    fn test_orders_on_sample_tree() {
        assert_eq!(output(TraversalKind::Inorder), vec![2, 4, 1, 3]);
        assert_eq!(output(TraversalKind::Preorder), vec![1, 2, 4, 3]);
        assert_eq!(output(TraversalKind::Postorder), vec![4, 2, 3, 1]);
        assert_eq!(output(TraversalKind::Bfs), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_tree_completes_in_one_step() {
        let tree = Tree::new();
        let (state, steps) = TraversalState::new(TraversalKind::Postorder, &tree).run(&tree, 10);
        assert!(state.output.is_empty());
        assert_eq!(steps, 1);
    }

    #[test]
    fn test_first_inorder_step_descends_left() {
        let tree = sample();
        let state = TraversalState::new(TraversalKind::Inorder, &tree).step(&tree);
        assert_eq!(state.stack, vec![0]);
        assert_eq!(state.current, Some(1));
        assert_eq!(state.direction_from_parent, Some(Direction::Left));
    }
}
