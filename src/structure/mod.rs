//! Input structures consumed by the step engines.
//!
//! A structure is generated once at reset time from a seeded RNG and
//! stays immutable until the next reset (sort steppers work on their
//! own copy of the values). Generators are pure given the RNG: the
//! same seed always yields the same structure.

pub mod array;
pub mod graph;
pub mod tree;

pub use graph::Graph;
pub use tree::{BinaryTree, NodeId, TreeNode};
