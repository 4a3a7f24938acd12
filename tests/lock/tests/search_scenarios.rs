//! Acceptance scenarios for the four strategies on explicit weighted graphs.

use lock_tests::worlds::weighted_graph::{Move, WeightedGraph};
use waypoint_search::contract::SearchProblem;
use waypoint_search::heuristic::NullHeuristic;
use waypoint_search::search::{
    a_star_search, breadth_first_search, depth_first_search, search, uniform_cost_search,
};
use waypoint_search::strategy::Strategy;

const A: u32 = 0;
const B: u32 = 1;
const C: u32 = 2;
const D: u32 = 3;
const G: u32 = 9;

fn hops(actions: &[Move]) -> Vec<(u32, u32)> {
    actions.iter().map(|m| (m.from, m.to)).collect()
}

fn all_four(graph: &WeightedGraph) -> [(Strategy, Vec<Move>); 4] {
    [
        (Strategy::DepthFirst, depth_first_search(graph)),
        (Strategy::BreadthFirst, breadth_first_search(graph)),
        (Strategy::UniformCost, uniform_cost_search(graph)),
        (Strategy::AStar, a_star_search(graph, NullHeuristic)),
    ]
}

// ---------------------------------------------------------------------------
// A -> B -> C, unit costs
// ---------------------------------------------------------------------------

#[test]
fn line_graph_same_answer_from_all_strategies() {
    let graph = WeightedGraph::new(A)
        .with_goal(C)
        .with_edge(A, B, 1)
        .with_edge(B, C, 1);

    for (strategy, actions) in all_four(&graph) {
        assert_eq!(hops(&actions), vec![(A, B), (B, C)], "{strategy}");
        assert_eq!(graph.cost_of_actions(&actions), Ok(2), "{strategy}");
    }
}

// ---------------------------------------------------------------------------
// No path from start to goal
// ---------------------------------------------------------------------------

#[test]
fn disconnected_goal_returns_empty_from_all_strategies() {
    let graph = WeightedGraph::new(A)
        .with_goal(G)
        .with_edge(A, B, 1)
        .with_edge(B, C, 1)
        .with_edge(C, A, 1)
        .with_edge(G, A, 1);

    for (strategy, actions) in all_four(&graph) {
        assert!(actions.is_empty(), "{strategy} returned {actions:?}");
    }
}

#[test]
fn goal_without_edges_returns_empty() {
    let graph = WeightedGraph::new(A).with_goal(G);
    for strategy in Strategy::ALL {
        let result = search(&graph, strategy, &NullHeuristic);
        assert!(!result.is_goal_reached(), "{strategy}");
        assert_eq!(result.stats.expansions, 1, "{strategy}");
    }
}

// ---------------------------------------------------------------------------
// Cheap-but-long (cost 3, 3 steps) vs expensive-but-short (cost 5, 1 step)
// ---------------------------------------------------------------------------

fn cheap_vs_short() -> WeightedGraph {
    WeightedGraph::new(A)
        .with_goal(G)
        .with_edge(A, G, 5)
        .with_edge(A, B, 1)
        .with_edge(B, C, 1)
        .with_edge(C, G, 1)
}

#[test]
fn cost_aware_strategies_take_cheap_long_path() {
    let graph = cheap_vs_short();
    let cheap = vec![(A, B), (B, C), (C, G)];

    assert_eq!(hops(&uniform_cost_search(&graph)), cheap);
    assert_eq!(hops(&a_star_search(&graph, NullHeuristic)), cheap);

    // Exact remaining cost: admissible and consistent.
    let exact = |state: &u32, _: &WeightedGraph| match *state {
        A => 3,
        B => 2,
        C => 1,
        _ => 0,
    };
    let result = search(&graph, Strategy::AStar, &exact);
    assert_eq!(hops(&result.actions), cheap);
    assert_eq!(result.cost, Some(3));
}

#[test]
fn breadth_first_takes_short_expensive_path() {
    let graph = cheap_vs_short();
    let actions = breadth_first_search(&graph);
    assert_eq!(hops(&actions), vec![(A, G)]);
    assert_eq!(graph.cost_of_actions(&actions), Ok(5));
}

// ---------------------------------------------------------------------------
// Zero heuristic degenerates A* to UCS
// ---------------------------------------------------------------------------

#[test]
fn zero_heuristic_astar_matches_ucs_cost() {
    let graph = WeightedGraph::new(A)
        .with_goal(G)
        .with_edge(A, B, 2)
        .with_edge(A, C, 2)
        .with_edge(B, D, 2)
        .with_edge(C, D, 1)
        .with_edge(D, G, 4)
        .with_edge(B, G, 9);

    let ucs = search(&graph, Strategy::UniformCost, &NullHeuristic);
    let astar = search(&graph, Strategy::AStar, &NullHeuristic);
    assert_eq!(ucs.cost, Some(7));
    assert_eq!(astar.cost, ucs.cost);
    assert_eq!(astar.stats.expansions, ucs.stats.expansions);
}

// ---------------------------------------------------------------------------
// Equal-cost ties resolve by successor order
// ---------------------------------------------------------------------------

#[test]
fn ties_resolve_to_first_inserted_route() {
    let upper_first = WeightedGraph::new(A)
        .with_goal(G)
        .with_edge(A, B, 1)
        .with_edge(A, C, 1)
        .with_edge(B, G, 1)
        .with_edge(C, G, 1);
    let lower_first = WeightedGraph::new(A)
        .with_goal(G)
        .with_edge(A, C, 1)
        .with_edge(A, B, 1)
        .with_edge(B, G, 1)
        .with_edge(C, G, 1);

    assert_eq!(hops(&uniform_cost_search(&upper_first)), vec![(A, B), (B, G)]);
    assert_eq!(hops(&uniform_cost_search(&lower_first)), vec![(A, C), (C, G)]);
}

// ---------------------------------------------------------------------------
// Depth-first vs breadth-first on unit costs
// ---------------------------------------------------------------------------

#[test]
fn depth_first_may_return_longer_path_than_breadth_first() {
    let graph = WeightedGraph::new(A)
        .with_goal(G)
        .with_edge(A, G, 1)
        .with_edge(A, B, 1)
        .with_edge(B, C, 1)
        .with_edge(C, G, 1);

    let dfs = depth_first_search(&graph);
    let bfs = breadth_first_search(&graph);
    assert_eq!(bfs.len(), 1);
    assert_eq!(dfs.len(), 3);
}

// ---------------------------------------------------------------------------
// Strategy selection by name
// ---------------------------------------------------------------------------

#[test]
fn strategies_selected_by_name_match_entry_points() {
    let graph = cheap_vs_short();
    for (name, expected) in [
        ("dfs", depth_first_search(&graph)),
        ("bfs", breadth_first_search(&graph)),
        ("ucs", uniform_cost_search(&graph)),
        ("astar", a_star_search(&graph, NullHeuristic)),
    ] {
        let strategy: Strategy = name.parse().unwrap();
        let result = search(&graph, strategy, &NullHeuristic);
        assert_eq!(result.actions, expected, "{name}");
    }
}
