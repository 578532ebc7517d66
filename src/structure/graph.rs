//! Adjacency-list graphs over a fixed node count.
//!
//! Two generators, matching the visualizer's inputs:
//! - undirected graphs for BFS/DFS, disconnected components allowed;
//! - DAGs for topological sort, acyclic by construction (edges only
//!   from lower to higher index).

use serde::{Deserialize, Serialize};

use crate::engine::rng::VizRng;
use crate::error::{VizError, VizResult};

/// Adjacency-list graph. Node ids are `0..node_count()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    directed: bool,
}

impl Graph {
    /// Build a graph from an explicit adjacency list.
    ///
    /// # Errors
    ///
    /// Returns `VizError::Structure` if any neighbor index is out of range.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>, directed: bool) -> VizResult<Self> {
        let n = adjacency.len();
        for (u, neighbors) in adjacency.iter().enumerate() {
            if let Some(&v) = neighbors.iter().find(|&&v| v >= n) {
                return Err(VizError::structure(format!(
                    "neighbor {v} of node {u} out of range (node count {n})"
                )));
            }
        }
        Ok(Self {
            adjacency,
            directed,
        })
    }

    /// Generate an undirected graph; disconnected components are allowed.
    ///
    /// Each unordered pair gets an edge with probability `p`, recorded
    /// in both directions.
    #[must_use]
    pub fn generate_undirected(rng: &mut VizRng, n: usize, p: f64) -> Self {
        let mut adjacency = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen_bool(p) {
                    adjacency[i].push(j);
                    adjacency[j].push(i);
                }
            }
        }
        Self {
            adjacency,
            directed: false,
        }
    }

    /// Generate a DAG: directed edges only from lower to higher index,
    /// so the result is acyclic by construction.
    #[must_use]
    pub fn generate_dag(rng: &mut VizRng, n: usize, p: f64) -> Self {
        let mut adjacency = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen_bool(p) {
                    adjacency[i].push(j);
                }
            }
        }
        Self {
            adjacency,
            directed: true,
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether edges are directed.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Neighbors of `u` in adjacency order.
    #[must_use]
    pub fn neighbors(&self, u: usize) -> &[usize] {
        self.adjacency.get(u).map_or(&[], Vec::as_slice)
    }

    /// Full adjacency list.
    #[must_use]
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// In-degree of every node (counting each directed edge once).
    #[must_use]
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.node_count()];
        for neighbors in &self.adjacency {
            for &v in neighbors {
                degrees[v] += 1;
            }
        }
        degrees
    }

    /// Iterator over directed edges `(u, v)`. For undirected graphs
    /// each edge appears in both orientations.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, neighbors)| neighbors.iter().map(move |&v| (u, v)))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification: generated DAGs never contain a backward edge.
        #[test]
        fn prop_dag_acyclic_by_construction(seed in 0u64..u64::MAX, n in 2usize..16, p in 0.0f64..1.0) {
            let mut rng = VizRng::new(seed);
            let g = Graph::generate_dag(&mut rng, n, p);
            for (u, v) in g.edges() {
                prop_assert!(u < v);
            }
        }

        /// Falsification: undirected adjacency is always symmetric.
        #[test]
        fn prop_undirected_symmetric(seed in 0u64..u64::MAX, n in 2usize..16, p in 0.0f64..1.0) {
            let mut rng = VizRng::new(seed);
            let g = Graph::generate_undirected(&mut rng, n, p);
            for (u, v) in g.edges() {
                prop_assert!(g.neighbors(v).contains(&u));
            }
        }
    }
}
