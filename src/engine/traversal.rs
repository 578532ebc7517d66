//! Graph traversal steppers: BFS, DFS, and Kahn topological sort.
//!
//! One node is emitted per step. BFS reseeds from the lowest-indexed
//! unvisited node whenever the frontier drains with nodes left over,
//! so disconnected components are fully explored. DFS materializes its
//! visit order up front (structures are small and bounded) and drives
//! it through the same step interface. Topological sort reports
//! `CycleDetected` instead of erroring when fewer than all nodes can
//! be emitted.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::engine::{StepEngine, StepOutcome};
use crate::structure::graph::Graph;

/// Which graph algorithm a [`GraphTraversal`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphAlgorithm {
    /// Breadth-first search over all components.
    Bfs,
    /// Depth-first search over all components.
    Dfs,
    /// Kahn's algorithm over a directed graph.
    TopologicalSort,
}

/// Terminal state of a graph traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalCompletion {
    /// Every reachable node was emitted.
    Complete,
    /// Topological sort stalled before emitting all nodes.
    CycleDetected,
}

/// Resumable graph traversal engine.
///
/// Holds the structure, the frontier, the visited set, and the result
/// order; the whole engine serializes, so a stopped run resumes from
/// the exact step it was cut at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphTraversal {
    graph: Graph,
    algorithm: GraphAlgorithm,
    frontier: VecDeque<usize>,
    visited: Vec<bool>,
    result_order: Vec<usize>,
    /// Remaining in-degree per node; meaningful for topological sort only.
    in_degree: Vec<usize>,
    steps: u64,
    done: bool,
    completion: Option<TraversalCompletion>,
}

impl GraphTraversal {
    /// Set up frontier, visited set, and auxiliary state per algorithm.
    #[must_use]
    pub fn new(graph: Graph, algorithm: GraphAlgorithm) -> Self {
        let n = graph.node_count();
        let mut engine = Self {
            graph,
            algorithm,
            frontier: VecDeque::new(),
            visited: vec![false; n],
            result_order: Vec::with_capacity(n),
            in_degree: Vec::new(),
            steps: 0,
            done: n == 0,
            completion: if n == 0 {
                Some(TraversalCompletion::Complete)
            } else {
                None
            },
        };
        if n > 0 {
            engine.seed();
        }
        engine
    }

    fn seed(&mut self) {
        match self.algorithm {
            GraphAlgorithm::Bfs => {
                self.frontier.push_back(0);
                self.visited[0] = true;
            }
            GraphAlgorithm::Dfs => {
                // The recursive shape is captured up front: an explicit
                // stack per component, neighbors pushed in reverse so
                // lower indices are emitted first.
                let order = Self::dfs_order(&self.graph, &mut self.visited);
                self.frontier = order.into();
            }
            GraphAlgorithm::TopologicalSort => {
                self.in_degree = self.graph.in_degrees();
                for (node, &deg) in self.in_degree.iter().enumerate() {
                    if deg == 0 {
                        self.frontier.push_back(node);
                    }
                }
                if self.frontier.is_empty() {
                    // Every node sits on a cycle.
                    self.done = true;
                    self.completion = Some(TraversalCompletion::CycleDetected);
                }
            }
        }
    }

    fn dfs_order(graph: &Graph, visited: &mut [bool]) -> Vec<usize> {
        let n = graph.node_count();
        let mut order = Vec::with_capacity(n);

        for start in 0..n {
            if visited[start] {
                continue;
            }
            let mut stack = vec![start];
            visited[start] = true;

            while let Some(node) = stack.pop() {
                order.push(node);
                for &neighbor in graph.neighbors(node).iter().rev() {
                    if !visited[neighbor] {
                        visited[neighbor] = true;
                        stack.push(neighbor);
                    }
                }
            }
        }
        order
    }

    /// Lowest-indexed unvisited node, if any.
    fn next_unvisited(&self) -> Option<usize> {
        self.visited.iter().position(|&v| !v)
    }

    fn expand(&mut self, node: usize) {
        match self.algorithm {
            GraphAlgorithm::Bfs => {
                for &neighbor in self.graph.neighbors(node) {
                    if !self.visited[neighbor] {
                        self.visited[neighbor] = true;
                        self.frontier.push_back(neighbor);
                    }
                }
            }
            GraphAlgorithm::Dfs => {
                // Visit order was materialized at seed time.
            }
            GraphAlgorithm::TopologicalSort => {
                for &neighbor in self.graph.neighbors(node) {
                    self.in_degree[neighbor] -= 1;
                    if self.in_degree[neighbor] == 0 {
                        self.frontier.push_back(neighbor);
                    }
                }
            }
        }
    }

    /// True when more remains after the frontier drains.
    fn exhausted(&mut self) -> bool {
        if !self.frontier.is_empty() {
            return false;
        }
        if self.algorithm == GraphAlgorithm::Bfs {
            // Multi-component coverage: seed the next component.
            if let Some(next) = self.next_unvisited() {
                self.visited[next] = true;
                self.frontier.push_back(next);
                return false;
            }
        }
        true
    }

    fn finish(&mut self) {
        self.done = true;
        self.completion = Some(match self.algorithm {
            GraphAlgorithm::TopologicalSort
                if self.result_order.len() < self.graph.node_count() =>
            {
                TraversalCompletion::CycleDetected
            }
            _ => TraversalCompletion::Complete,
        });
    }

    /// Emitted nodes in order.
    #[must_use]
    pub fn result_order(&self) -> &[usize] {
        &self.result_order
    }

    /// Pending nodes, front first (the queue display).
    #[must_use]
    pub fn frontier(&self) -> &VecDeque<usize> {
        &self.frontier
    }

    /// Per-node visited flags.
    #[must_use]
    pub fn visited(&self) -> &[bool] {
        &self.visited
    }

    /// Terminal report, once done.
    #[must_use]
    pub const fn completion(&self) -> Option<TraversalCompletion> {
        self.completion
    }

    /// The structure being traversed.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The algorithm this engine runs.
    #[must_use]
    pub const fn algorithm(&self) -> GraphAlgorithm {
        self.algorithm
    }

    /// Last emitted node (the current highlight).
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        if self.done {
            None
        } else {
            self.result_order.last().copied()
        }
    }
}

impl StepEngine for GraphTraversal {
    type Emit = usize;

    fn step_once(&mut self) -> StepOutcome<usize> {
        if self.done {
            return StepOutcome::finished();
        }
        if self.exhausted() {
            self.finish();
            return StepOutcome::finished();
        }

        // Seeding guarantees the frontier is non-empty here.
        let Some(node) = self.frontier.pop_front() else {
            self.finish();
            return StepOutcome::finished();
        };

        self.result_order.push(node);
        self.expand(node);
        self.steps += 1;

        if self.exhausted() {
            self.finish();
        }

        StepOutcome {
            emitted: Some(node),
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
