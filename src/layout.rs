//! Canvas geometry for the four structure families.
//!
//! Layout is pure arithmetic from structure to positions; no drawing
//! happens here. Coordinates follow the usual canvas convention: the
//! origin is top-left and y grows downward.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::structure::graph::Graph;
use crate::structure::tree::BinaryTree;

/// Canvas width shared by every family.
pub const CANVAS_WIDTH: f64 = 800.0;
/// Canvas height for sort, tree, and graph scenes.
pub const CANVAS_HEIGHT: f64 = 400.0;
/// Canvas height for the search scene (a single row of boxes).
pub const SEARCH_CANVAS_HEIGHT: f64 = 200.0;
/// Radius of a graph or tree node circle.
pub const NODE_RADIUS: f64 = 20.0;

const MARGIN: f64 = 10.0;

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate, growing downward.
    pub y: f64,
}

/// An axis-aligned bar, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// Place `n` nodes evenly on a circle centered in the canvas.
///
/// The first node sits at twelve o'clock; the rest follow clockwise.
#[must_use]
pub fn circular(n: usize) -> Vec<Position> {
    let center_x = CANVAS_WIDTH / 2.0;
    let center_y = CANVAS_HEIGHT / 2.0;
    let radius = CANVAS_HEIGHT / 2.0 - NODE_RADIUS - MARGIN;

    (0..n)
        .map(|i| {
            let angle = std::f64::consts::TAU * (i as f64) / (n as f64)
                - std::f64::consts::FRAC_PI_2;
            Position {
                x: center_x + radius * angle.cos(),
                y: center_y + radius * angle.sin(),
            }
        })
        .collect()
}

/// Place a directed graph's nodes in layers.
///
/// Layers come from in-degree peeling: sources sit in the top row and
/// each node sits one row below its deepest predecessor. Nodes on a
/// cycle never peel; they share a final row below everything resolved.
#[must_use]
pub fn layered_dag(graph: &Graph) -> Vec<Position> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let mut in_degree = graph.in_degrees();
    let mut level = vec![0usize; n];
    let mut resolved = vec![false; n];
    let mut queue: VecDeque<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();

    while let Some(u) = queue.pop_front() {
        resolved[u] = true;
        for &v in graph.neighbors(u) {
            level[v] = level[v].max(level[u] + 1);
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                queue.push_back(v);
            }
        }
    }

    let deepest = level
        .iter()
        .zip(&resolved)
        .filter_map(|(&l, &r)| r.then_some(l))
        .max()
        .unwrap_or(0);
    for v in 0..n {
        if !resolved[v] {
            level[v] = deepest + 1;
        }
    }

    let row_count = level.iter().max().map_or(1, |&m| m + 1);
    let mut row_members: Vec<Vec<usize>> = vec![Vec::new(); row_count];
    for v in 0..n {
        row_members[level[v]].push(v);
    }

    let mut positions = vec![Position { x: 0.0, y: 0.0 }; n];
    for (row, members) in row_members.iter().enumerate() {
        let y = row_y(row, row_count, CANVAS_HEIGHT);
        for (slot, &v) in members.iter().enumerate() {
            positions[v] = Position {
                x: column_x(slot, members.len()),
                y,
            };
        }
    }
    positions
}

/// Place a binary tree's nodes by depth row, indexed by node id.
///
/// Each level is spread evenly across the full width, matching how the
/// visualizer renders shallow random trees.
#[must_use]
pub fn tree_levels(tree: &BinaryTree) -> Vec<Position> {
    let levels = tree.levels();
    let row_count = levels.len().max(1);

    let mut positions = vec![Position { x: 0.0, y: 0.0 }; tree.len()];
    for (row, members) in levels.iter().enumerate() {
        let y = row_y(row, row_count, CANVAS_HEIGHT);
        for (slot, &id) in members.iter().enumerate() {
            positions[id] = Position {
                x: column_x(slot, members.len()),
                y,
            };
        }
    }
    positions
}

/// Bars for the sort scene: one per value, rising from the bottom edge
/// with height equal to the value.
#[must_use]
pub fn sort_bars(values: &[i64]) -> Vec<Bar> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let slot = CANVAS_WIDTH / (n as f64);
    let width = (slot - 2.0).max(1.0);
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let height = (v.max(0) as f64).min(CANVAS_HEIGHT);
            Bar {
                x: (i as f64) * slot + (slot - width) / 2.0,
                y: CANVAS_HEIGHT - height,
                width,
                height,
            }
        })
        .collect()
}

/// Box centers for the search scene: one row across the short canvas.
#[must_use]
pub fn search_boxes(n: usize) -> Vec<Position> {
    let slot = CANVAS_WIDTH / (n.max(1) as f64);
    (0..n)
        .map(|i| Position {
            x: ((i as f64) + 0.5) * slot,
            y: SEARCH_CANVAS_HEIGHT / 2.0,
        })
        .collect()
}

fn row_y(row: usize, row_count: usize, height: f64) -> f64 {
    let usable = height - 2.0 * (NODE_RADIUS + MARGIN);
    let step = if row_count > 1 {
        usable / ((row_count - 1) as f64)
    } else {
        0.0
    };
    NODE_RADIUS + MARGIN + (row as f64) * step
}

fn column_x(slot: usize, count: usize) -> f64 {
    let width = CANVAS_WIDTH / (count.max(1) as f64);
    ((slot as f64) + 0.5) * width
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::structure::tree::TreeNode;

    fn in_canvas(p: Position, height: f64) -> bool {
        p.x >= 0.0 && p.x <= CANVAS_WIDTH && p.y >= 0.0 && p.y <= height
    }

    #[test]
    fn test_circular_count_and_bounds() {
        let positions = circular(8);
        assert_eq!(positions.len(), 8);
        for p in &positions {
            assert!(in_canvas(*p, CANVAS_HEIGHT), "{p:?} escapes the canvas");
        }
    }

    #[test]
    fn test_circular_equidistant_from_center() {
        let positions = circular(6);
        let (cx, cy) = (CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
        let expected = CANVAS_HEIGHT / 2.0 - NODE_RADIUS - MARGIN;
        for p in positions {
            let d = ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt();
            assert!((d - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_circular_first_node_at_top() {
        let positions = circular(4);
        assert!((positions[0].x - CANVAS_WIDTH / 2.0).abs() < 1e-9);
        assert!(positions[0].y < CANVAS_HEIGHT / 2.0);
    }

    #[test]
    fn test_circular_empty() {
        assert!(circular(0).is_empty());
    }

    #[test]
    fn test_layered_dag_edges_point_downward() {
        // 0->2, 1->2, 2->3
        let graph =
            Graph::from_adjacency(vec![vec![2], vec![2], vec![3], vec![]], true).unwrap();
        let positions = layered_dag(&graph);
        for (u, v) in graph.edges() {
            assert!(
                positions[u].y < positions[v].y,
                "edge {u}->{v} must point down"
            );
        }
    }

    #[test]
    fn test_layered_dag_sources_share_top_row() {
        let graph =
            Graph::from_adjacency(vec![vec![2], vec![2], vec![3], vec![]], true).unwrap();
        let positions = layered_dag(&graph);
        assert!((positions[0].y - positions[1].y).abs() < 1e-9);
    }

    #[test]
    fn test_layered_dag_cycle_gets_bottom_row() {
        // 0 -> 1 <-> 2
        let graph =
            Graph::from_adjacency(vec![vec![1], vec![2], vec![1]], true).unwrap();
        let positions = layered_dag(&graph);
        assert!(positions[1].y > positions[0].y);
        assert!((positions[1].y - positions[2].y).abs() < 1e-9);
    }

    #[test]
    fn test_tree_levels_rows() {
        let tree = BinaryTree::from_nodes(vec![
            TreeNode {
                value: 50,
                left: Some(1),
                right: Some(2),
            },
            TreeNode {
                value: 30,
                left: None,
                right: None,
            },
            TreeNode {
                value: 70,
                left: None,
                right: None,
            },
        ])
        .unwrap();

        let positions = tree_levels(&tree);
        assert_eq!(positions.len(), 3);
        assert!(positions[0].y < positions[1].y);
        assert!((positions[1].y - positions[2].y).abs() < 1e-9);
        assert!(positions[1].x < positions[2].x);
    }

    #[test]
    fn test_sort_bars_heights_match_values() {
        let bars = sort_bars(&[100, 350, 10]);
        assert_eq!(bars.len(), 3);
        assert!((bars[0].height - 100.0).abs() < 1e-9);
        assert!((bars[1].height - 350.0).abs() < 1e-9);
        // Bars sit on the bottom edge.
        for bar in &bars {
            assert!((bar.y + bar.height - CANVAS_HEIGHT).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sort_bars_fill_width_left_to_right() {
        let bars = sort_bars(&[1, 2, 3, 4]);
        for pair in bars.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
        assert!(bars[3].x + bars[3].width <= CANVAS_WIDTH);
    }

    #[test]
    fn test_sort_bars_clamp_oversized_values() {
        let bars = sort_bars(&[9999]);
        assert!((bars[0].height - CANVAS_HEIGHT).abs() < 1e-9);
        assert!(bars[0].y.abs() < 1e-9);
    }

    #[test]
    fn test_search_boxes_single_row() {
        let boxes = search_boxes(15);
        assert_eq!(boxes.len(), 15);
        for b in &boxes {
            assert!((b.y - SEARCH_CANVAS_HEIGHT / 2.0).abs() < 1e-9);
        }
        for pair in boxes.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert!(layered_dag(&Graph::from_adjacency(Vec::new(), true).unwrap()).is_empty());
        assert!(tree_levels(&BinaryTree::empty()).is_empty());
        assert!(sort_bars(&[]).is_empty());
        assert!(search_boxes(0).is_empty());
    }
}
