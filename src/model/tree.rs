//! Binary tree stored as an id-indexed node table

use std::collections::BTreeMap;

pub type TreeNodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeNode {
    pub id: TreeNodeId,
    pub value: i64,
    pub left: Option<TreeNodeId>,
    pub right: Option<TreeNodeId>,
}

impl TreeNode {
    pub fn leaf(id: TreeNodeId, value: i64) -> Self {
        TreeNode {
            id,
            value,
            left: None,
            right: None,
        }
    }
}

/// Which side of its parent a node hangs from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Binary tree with at most one root. Built once, read-only while traversing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tree {
    nodes: BTreeMap<TreeNodeId, TreeNode>,
    root: Option<TreeNodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<TreeNodeId> {
        self.root
    }

    pub fn set_root(&mut self, root: Option<TreeNodeId>) {
        self.root = root;
    }

    pub fn insert(&mut self, node: TreeNode) {
        self.nodes.insert(node.id, node);
    }

    pub fn node(&self, id: TreeNodeId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: TreeNodeId) -> Option<&mut TreeNode> {
        self.nodes.get_mut(&id)
    }

    pub fn value(&self, id: TreeNodeId) -> Option<i64> {
        self.nodes.get(&id).map(|n| n.value)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.values()
    }

    /// Depth of each reachable node, root at 0
    pub fn depths(&self) -> BTreeMap<TreeNodeId, usize> {
        let mut depths = BTreeMap::new();
        let mut pending: Vec<(TreeNodeId, usize)> = self.root.into_iter().map(|r| (r, 0)).collect();
        while let Some((id, depth)) = pending.pop() {
            depths.insert(id, depth);
            if let Some(node) = self.nodes.get(&id) {
                pending.extend(node.left.map(|l| (l, depth + 1)));
                pending.extend(node.right.map(|r| (r, depth + 1)));
            }
        }
        depths
    }

    /// Build a balanced BST from values, ids assigned in creation (preorder) order
    pub fn balanced_bst(values: &[i64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        let mut tree = Tree::new();
        let mut next_id = 0;
        let root = tree.build_balanced(&sorted, &mut next_id);
        tree.root = root;
        tree
    }

    fn build_balanced(&mut self, values: &[i64], next_id: &mut TreeNodeId) -> Option<TreeNodeId> {
        if values.is_empty() {
            return None;
        }
        let mid = (values.len() - 1) / 2;
        let id = *next_id;
        *next_id += 1;
        self.insert(TreeNode::leaf(id, values[mid]));
        let left = self.build_balanced(&values[..mid], next_id);
        let right = self.build_balanced(&values[mid + 1..], next_id);
        if let Some(node) = self.nodes.get_mut(&id) {
            node.left = left;
            node.right = right;
        }
        Some(id)
    }
}
