//! Binary trees stored as index arenas.
//!
//! The visualizer's trees are small (depth 2..=4) and random: each
//! child slot below the root exists with probability 0.7, values are
//! 10..=99. An arena keeps the structure serializable and lets node
//! ids double as stable identifiers for highlighting.

use serde::{Deserialize, Serialize};

use crate::engine::rng::VizRng;

/// Index of a node within the tree arena.
pub type NodeId = usize;

/// Child existence probability below the root.
const CHILD_PROBABILITY: f64 = 0.7;
const VALUE_MIN: i64 = 10;
const VALUE_MAX: i64 = 99;

/// A single tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Displayed value.
    pub value: i64,
    /// Left child, if present.
    pub left: Option<NodeId>,
    /// Right child, if present.
    pub right: Option<NodeId>,
}

/// Arena-backed binary tree. The root, when present, is node 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryTree {
    nodes: Vec<TreeNode>,
}

impl BinaryTree {
    /// An empty tree.
    #[must_use]
    pub const fn empty() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Build a tree from explicit nodes; node 0 is the root.
    ///
    /// # Errors
    ///
    /// Returns `VizError::Structure` if any child index is out of range.
    pub fn from_nodes(nodes: Vec<TreeNode>) -> crate::error::VizResult<Self> {
        let n = nodes.len();
        for (id, node) in nodes.iter().enumerate() {
            for child in [node.left, node.right].into_iter().flatten() {
                if child >= n {
                    return Err(crate::error::VizError::structure(format!(
                        "child {child} of node {id} out of range (node count {n})"
                    )));
                }
            }
        }
        Ok(Self { nodes })
    }

    /// Generate a random tree of at most `max_depth` levels below the root.
    #[must_use]
    pub fn generate(rng: &mut VizRng, max_depth: usize) -> Self {
        let mut tree = Self::empty();
        let root = tree.push(rng.gen_range_i64(VALUE_MIN, VALUE_MAX));
        tree.grow(rng, root, 0, max_depth);
        tree
    }

    fn grow(&mut self, rng: &mut VizRng, node: NodeId, depth: usize, max_depth: usize) {
        if depth >= max_depth {
            return;
        }

        // Sample both slots before recursing so the RNG stream matches
        // the breadth of the shape, not the recursion order.
        let has_left = rng.gen_bool(CHILD_PROBABILITY);
        let has_right = rng.gen_bool(CHILD_PROBABILITY);

        if has_left {
            let child = self.push(rng.gen_range_i64(VALUE_MIN, VALUE_MAX));
            self.nodes[node].left = Some(child);
            self.grow(rng, child, depth + 1, max_depth);
        }
        if has_right {
            let child = self.push(rng.gen_range_i64(VALUE_MIN, VALUE_MAX));
            self.nodes[node].right = Some(child);
            self.grow(rng, child, depth + 1, max_depth);
        }
    }

    fn push(&mut self, value: i64) -> NodeId {
        self.nodes.push(TreeNode {
            value,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    /// Root node id, if the tree is non-empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node accessor.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// Value of a node, if it exists.
    #[must_use]
    pub fn value(&self, id: NodeId) -> Option<i64> {
        self.node(id).map(|n| n.value)
    }

    /// Node ids grouped by depth, each level in left-to-right order.
    #[must_use]
    pub fn levels(&self) -> Vec<Vec<NodeId>> {
        let mut levels: Vec<Vec<NodeId>> = Vec::new();
        let Some(root) = self.root() else {
            return levels;
        };

        let mut queue = std::collections::VecDeque::from([(root, 0usize)]);
        while let Some((id, depth)) = queue.pop_front() {
            if levels.len() <= depth {
                levels.push(Vec::new());
            }
            levels[depth].push(id);

            if let Some(node) = self.node(id) {
                if let Some(left) = node.left {
                    queue.push_back((left, depth + 1));
                }
                if let Some(right) = node.right {
                    queue.push_back((right, depth + 1));
                }
            }
        }
        levels
    }
}
