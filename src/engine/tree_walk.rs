//! Binary-tree traversal steppers.
//!
//! Level-order runs a live FIFO frontier, exactly as the visualizer's
//! BFS. The depth-first orders (pre/in/post) are materialized eagerly
//! at initialization (trees are bounded at depth 4) and driven through
//! the same one-node-per-step interface.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::engine::{StepEngine, StepOutcome};
use crate::structure::tree::{BinaryTree, NodeId};

/// Traversal order for a [`TreeTraversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TreeOrder {
    /// Breadth-first, level by level.
    LevelOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, node, right subtree.
    InOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// Resumable binary-tree traversal engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeTraversal {
    tree: BinaryTree,
    order: TreeOrder,
    frontier: VecDeque<NodeId>,
    result_order: Vec<NodeId>,
    steps: u64,
    done: bool,
}

impl TreeTraversal {
    /// Seed the frontier for the requested order.
    #[must_use]
    pub fn new(tree: BinaryTree, order: TreeOrder) -> Self {
        let mut frontier = VecDeque::new();
        match (tree.root(), order) {
            (None, _) => {}
            (Some(root), TreeOrder::LevelOrder) => frontier.push_back(root),
            (Some(root), _) => {
                let mut materialized = Vec::with_capacity(tree.len());
                Self::walk(&tree, root, order, &mut materialized);
                frontier = materialized.into();
            }
        }

        let done = frontier.is_empty();
        Self {
            tree,
            order,
            frontier,
            result_order: Vec::new(),
            steps: 0,
            done,
        }
    }

    fn walk(tree: &BinaryTree, id: NodeId, order: TreeOrder, out: &mut Vec<NodeId>) {
        let Some(node) = tree.node(id) else {
            return;
        };
        let (left, right) = (node.left, node.right);

        if order == TreeOrder::PreOrder {
            out.push(id);
        }
        if let Some(l) = left {
            Self::walk(tree, l, order, out);
        }
        if order == TreeOrder::InOrder {
            out.push(id);
        }
        if let Some(r) = right {
            Self::walk(tree, r, order, out);
        }
        if order == TreeOrder::PostOrder {
            out.push(id);
        }
    }

    /// Emitted node ids in order.
    #[must_use]
    pub fn result_order(&self) -> &[NodeId] {
        &self.result_order
    }

    /// Emitted node values in order (the traversal-order display).
    #[must_use]
    pub fn result_values(&self) -> Vec<i64> {
        self.result_order
            .iter()
            .filter_map(|&id| self.tree.value(id))
            .collect()
    }

    /// Pending node ids, front first (the queue display).
    #[must_use]
    pub fn frontier(&self) -> &VecDeque<NodeId> {
        &self.frontier
    }

    /// The structure being traversed.
    #[must_use]
    pub const fn tree(&self) -> &BinaryTree {
        &self.tree
    }

    /// The traversal order this engine runs.
    #[must_use]
    pub const fn order(&self) -> TreeOrder {
        self.order
    }

    /// Last emitted node (the current highlight).
    #[must_use]
    pub fn highlighted(&self) -> Option<NodeId> {
        if self.done {
            None
        } else {
            self.result_order.last().copied()
        }
    }
}

impl StepEngine for TreeTraversal {
    type Emit = NodeId;

    fn step_once(&mut self) -> StepOutcome<NodeId> {
        if self.done {
            return StepOutcome::finished();
        }
        let Some(id) = self.frontier.pop_front() else {
            self.done = true;
            return StepOutcome::finished();
        };

        self.result_order.push(id);
        self.steps += 1;

        if self.order == TreeOrder::LevelOrder {
            if let Some(node) = self.tree.node(id) {
                if let Some(left) = node.left {
                    self.frontier.push_back(left);
                }
                if let Some(right) = node.right {
                    self.frontier.push_back(right);
                }
            }
        }

        if self.frontier.is_empty() {
            self.done = true;
        }

        StepOutcome {
            emitted: Some(id),
            done: self.done,
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn steps_taken(&self) -> u64 {
        self.steps
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::engine::rng::VizRng;
    use proptest::prelude::*;

    proptest! {
        /// Falsification: every order emits each node exactly once.
        #[test]
        fn prop_complete_coverage(seed in 0u64..u64::MAX, depth in 2usize..5) {
            let mut rng = VizRng::new(seed);
            let tree = BinaryTree::generate(&mut rng, depth);
            let n = tree.len();

            for order in [
                TreeOrder::LevelOrder,
                TreeOrder::PreOrder,
                TreeOrder::InOrder,
                TreeOrder::PostOrder,
            ] {
                let mut engine = TreeTraversal::new(tree.clone(), order);
                let mut emitted = engine.run_to_completion();
                prop_assert_eq!(emitted.len(), n);
                emitted.sort_unstable();
                emitted.dedup();
                prop_assert_eq!(emitted.len(), n);
            }
        }

        /// Falsification: level-order emits parents before children.
        #[test]
        fn prop_level_order_parents_first(seed in 0u64..u64::MAX, depth in 2usize..5) {
            let mut rng = VizRng::new(seed);
            let tree = BinaryTree::generate(&mut rng, depth);
            let mut engine = TreeTraversal::new(tree.clone(), TreeOrder::LevelOrder);
            let order = engine.run_to_completion();

            let mut position = vec![0usize; tree.len()];
            for (idx, &id) in order.iter().enumerate() {
                position[id] = idx;
            }
            for id in 0..tree.len() {
                if let Some(node) = tree.node(id) {
                    for child in [node.left, node.right].into_iter().flatten() {
                        prop_assert!(position[id] < position[child]);
                    }
                }
            }
        }
    }
}
