//! Renderer-agnostic frame construction.
//!
//! Engines never draw. Each frame builder projects an engine's state
//! plus layout geometry into a serializable [`RenderFrame`]; any
//! front end (canvas, TUI, test harness) consumes frames through the
//! [`Renderer`] trait without coupling to engine internals.

use serde::{Deserialize, Serialize};

use crate::engine::search::{SearchOutcome, SearchStep, SearchStepper};
use crate::engine::sort::SortStepper;
use crate::engine::traversal::{GraphAlgorithm, GraphTraversal, TraversalCompletion};
use crate::engine::tree_walk::{TreeOrder, TreeTraversal};
use crate::engine::StepEngine;
use crate::layout::{self, Bar, Position};
use crate::structure::tree::NodeId;

/// Scene geometry for one structure family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Scene {
    /// Vertical bars for a sort run.
    Sort {
        /// One bar per value, left to right.
        bars: Vec<Bar>,
        /// Current array contents.
        values: Vec<i64>,
        /// Indices touched by the last step.
        highlight: Option<(usize, usize)>,
        /// Whether the array is fully sorted.
        sorted: bool,
    },
    /// A row of value boxes for a search run.
    Search {
        /// Box centers, left to right.
        boxes: Vec<Position>,
        /// Array contents.
        values: Vec<i64>,
        /// Target value, when one was supplied.
        target: Option<i64>,
        /// Active candidate window `[left, right]`.
        window: Option<(usize, usize)>,
        /// The most recent probe.
        probe: Option<SearchStep>,
        /// Terminal outcome, once finished.
        outcome: Option<SearchOutcome>,
    },
    /// Node circles and edges for a graph traversal.
    Graph {
        /// Node centers, indexed by node id.
        positions: Vec<Position>,
        /// Directed edge list (both orientations when undirected).
        edges: Vec<(usize, usize)>,
        /// Per-node visited flags.
        visited: Vec<bool>,
        /// Pending node ids, front first.
        frontier: Vec<usize>,
        /// Emitted node ids in order.
        result: Vec<usize>,
        /// Node emitted by the last step.
        highlight: Option<usize>,
        /// How the traversal ended, once finished.
        completion: Option<TraversalCompletion>,
    },
    /// Node circles and parent-child edges for a tree traversal.
    Tree {
        /// Node centers, indexed by node id.
        positions: Vec<Position>,
        /// Parent-child edge list.
        edges: Vec<(NodeId, NodeId)>,
        /// Node values, indexed by node id.
        values: Vec<i64>,
        /// Emitted node values in traversal order.
        result: Vec<i64>,
        /// Node emitted by the last step.
        highlight: Option<NodeId>,
    },
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Display title, e.g. `"bubble sort"`.
    pub title: String,
    /// Steps taken so far.
    pub step: u64,
    /// Whether the engine has finished.
    pub complete: bool,
    /// One-line progress summary.
    pub status: String,
    /// Scene geometry.
    pub scene: Scene,
}

/// A frame consumer.
pub trait Renderer {
    /// Present one frame.
    fn draw(&mut self, frame: &RenderFrame);
}

/// Renderer that records status lines, for tests and headless runs.
#[derive(Debug, Default)]
pub struct TextRenderer {
    lines: Vec<String>,
}

impl TextRenderer {
    /// Empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Recorded lines, one per frame.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, frame: &RenderFrame) {
        self.lines
            .push(format!("[{:>4}] {}: {}", frame.step, frame.title, frame.status));
    }
}

/// Frame for a sort engine's current state.
#[must_use]
pub fn sort_frame(engine: &SortStepper) -> RenderFrame {
    let values = engine.values().to_vec();
    let highlight = engine.last_step().map(|s| s.highlight());
    let status = if engine.is_done() {
        "sorted".to_string()
    } else {
        match engine.last_step() {
            Some(step) => format!("{step:?}"),
            None => "ready".to_string(),
        }
    };

    RenderFrame {
        title: format!("{:?} sort", engine.algorithm()).to_lowercase(),
        step: engine.steps_taken(),
        complete: engine.is_done(),
        status,
        scene: Scene::Sort {
            bars: layout::sort_bars(&values),
            sorted: engine.is_sorted(),
            highlight: if engine.is_done() { None } else { highlight },
            values,
        },
    }
}

/// Frame for a search engine's current state.
#[must_use]
pub fn search_frame(engine: &SearchStepper) -> RenderFrame {
    let status = match engine.outcome() {
        Some(SearchOutcome::Found(idx)) => format!("found at index {idx}"),
        Some(SearchOutcome::NotFound) => "not found".to_string(),
        Some(SearchOutcome::InvalidTarget) => "invalid target".to_string(),
        None => match engine.last_probe() {
            Some(probe) => format!("probing index {}", probe.index),
            None => "ready".to_string(),
        },
    };

    RenderFrame {
        title: format!("{:?} search", engine.algorithm()).to_lowercase(),
        step: engine.steps_taken(),
        complete: engine.is_done(),
        status,
        scene: Scene::Search {
            boxes: layout::search_boxes(engine.values().len()),
            values: engine.values().to_vec(),
            target: engine.target(),
            window: engine.window(),
            probe: engine.last_probe(),
            outcome: engine.outcome(),
        },
    }
}

/// Frame for a graph traversal's current state.
#[must_use]
pub fn graph_frame(engine: &GraphTraversal) -> RenderFrame {
    let graph = engine.graph();
    let positions = if graph.is_directed() {
        layout::layered_dag(graph)
    } else {
        layout::circular(graph.node_count())
    };

    let status = match engine.completion() {
        Some(TraversalCompletion::Complete) => "complete".to_string(),
        Some(TraversalCompletion::CycleDetected) => "cycle detected".to_string(),
        None => format!(
            "visited {} of {}",
            engine.result_order().len(),
            graph.node_count()
        ),
    };

    let title = match engine.algorithm() {
        GraphAlgorithm::Bfs => "bfs",
        GraphAlgorithm::Dfs => "dfs",
        GraphAlgorithm::TopologicalSort => "topological sort",
    };

    RenderFrame {
        title: title.to_string(),
        step: engine.steps_taken(),
        complete: engine.is_done(),
        status,
        scene: Scene::Graph {
            positions,
            edges: graph.edges().collect(),
            visited: engine.visited().to_vec(),
            frontier: engine.frontier().iter().copied().collect(),
            result: engine.result_order().to_vec(),
            highlight: engine.highlighted(),
            completion: engine.completion(),
        },
    }
}

/// Frame for a tree traversal's current state.
#[must_use]
pub fn tree_frame(engine: &TreeTraversal) -> RenderFrame {
    let tree = engine.tree();
    let mut edges = Vec::new();
    let mut values = Vec::with_capacity(tree.len());
    for id in 0..tree.len() {
        if let Some(node) = tree.node(id) {
            values.push(node.value);
            for child in [node.left, node.right].into_iter().flatten() {
                edges.push((id, child));
            }
        }
    }

    let result = engine.result_values();
    let status = if engine.is_done() {
        format!("order: {result:?}")
    } else {
        format!("visited {} of {}", result.len(), tree.len())
    };

    let title = match engine.order() {
        TreeOrder::LevelOrder => "level-order traversal",
        TreeOrder::PreOrder => "pre-order traversal",
        TreeOrder::InOrder => "in-order traversal",
        TreeOrder::PostOrder => "post-order traversal",
    };

    RenderFrame {
        title: title.to_string(),
        step: engine.steps_taken(),
        complete: engine.is_done(),
        status,
        scene: Scene::Tree {
            positions: layout::tree_levels(tree),
            edges,
            values,
            result,
            highlight: engine.highlighted(),
        },
    }
}
