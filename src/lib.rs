//! # stepviz
//!
//! Interruptible step engines for animated algorithm visualization.
//!
//! Classic sorting, searching, tree-traversal, and graph-traversal
//! algorithms are expressed as resumable units of work: each call to
//! [`engine::StepEngine::step_once`] advances the algorithm by exactly
//! one primitive operation (a comparison, a swap, a merge placement,
//! one emitted node), so a paced animation loop can interleave delays,
//! redraws, and cooperative cancellation between steps.
//!
//! Rendering is an external collaborator: the crate produces
//! serializable [`render::RenderFrame`] snapshots and never draws.
//!
//! ## Example
//!
//! ```rust
//! use stepviz::prelude::*;
//!
//! let config = VizConfig::builder().seed(42).build();
//! let mut rng = VizRng::new(config.seed);
//! let graph = Graph::generate_undirected(&mut rng, 8, 0.2);
//! let mut engine = GraphTraversal::new(graph, GraphAlgorithm::Bfs);
//!
//! let scheduler = Scheduler::immediate();
//! let outcome = scheduler.run(&mut engine, |_, _| {}, || false);
//! assert_eq!(outcome, RunOutcome::Completed);
//! assert_eq!(engine.result_order().len(), 8);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::too_many_lines,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
    clippy::needless_range_loop,   // Sometimes range loops are clearer
)]

pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod render;
pub mod replay;
pub mod scheduler;
pub mod session;
pub mod structure;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{VizConfig, VizConfigBuilder};
    pub use crate::engine::rng::VizRng;
    pub use crate::engine::search::{SearchAlgorithm, SearchOutcome, SearchStep, SearchStepper};
    pub use crate::engine::sort::{SortAlgorithm, SortStep, SortStepper};
    pub use crate::engine::traversal::{GraphAlgorithm, GraphTraversal, TraversalCompletion};
    pub use crate::engine::tree_walk::{TreeOrder, TreeTraversal};
    pub use crate::engine::{StepEngine, StepOutcome};
    pub use crate::error::{VizError, VizResult};
    pub use crate::render::{RenderFrame, Renderer, Scene, TextRenderer};
    pub use crate::replay::{Checkpoint, CheckpointLog};
    pub use crate::scheduler::{delay_from_speed, RunOutcome, Scheduler};
    pub use crate::session::{StopHandle, VizSession};
    pub use crate::structure::graph::Graph;
    pub use crate::structure::tree::BinaryTree;
}

/// Re-export for public API
pub use error::{VizError, VizResult};
