//! Shared regime builders for waypoint benchmark suites.

use lock_tests::worlds::grid_maze::GridMaze;
use lock_tests::worlds::weighted_graph::WeightedGraph;

/// Square open room with `side` interior cells per edge.
#[must_use]
pub fn open_room(side: usize) -> GridMaze {
    GridMaze::open_room(side + 2, side + 2)
}

/// Layered DAG: `layers` layers of `width` nodes, every node linked to every
/// node of the next layer. Many equal-cost routes reach each node, so
/// cost-aware strategies see heavy frontier duplication.
///
/// Node 0 is the start; the single goal sits after the last layer.
#[must_use]
pub fn layered_graph(width: u32, layers: u32) -> WeightedGraph {
    let node = |layer: u32, i: u32| 1 + layer * width + i;
    let goal = 1 + layers * width;
    let mut graph = WeightedGraph::new(0).with_goal(goal);
    for i in 0..width {
        graph.add_edge(0, node(0, i), 1 + i % 3);
    }
    for layer in 0..layers.saturating_sub(1) {
        for i in 0..width {
            for j in 0..width {
                graph.add_edge(node(layer, i), node(layer + 1, j), 1 + (i + j) % 3);
            }
        }
    }
    if layers > 0 {
        for i in 0..width {
            graph.add_edge(node(layers - 1, i), goal, 1);
        }
    }
    graph
}
