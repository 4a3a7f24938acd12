//! Search entry points and expansion loop.
//!
//! All four strategies share one loop:
//!
//! 1. Seed the frontier with the start node (empty path, zero cost).
//! 2. Pop a node. If its state is a goal, return its path. The goal test
//!    happens at pop time only, never at push time.
//! 3. Commit the state to the visited-cost table if the expansion policy
//!    allows it; otherwise discard the entry as stale.
//! 4. Push one child per successor and repeat.
//! 5. An exhausted frontier yields an empty path.
//!
//! Strategies differ only in frontier discipline, priority key and
//! expansion policy.

use crate::contract::SearchProblem;
use crate::cost::Cost;
use crate::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
use crate::heuristic::{Heuristic, NullHeuristic};
use crate::node::SearchNode;
use crate::strategy::Strategy;
use crate::visited::VisitedCosts;

/// Search node type for a problem.
pub type NodeOf<P> = SearchNode<
    <P as SearchProblem>::State,
    <P as SearchProblem>::Action,
    <P as SearchProblem>::Cost,
>;

/// When a popped state may be (re-)expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionPolicy {
    /// Expand a state at most once. Successors already expanded are not
    /// pushed. Used by depth-first and breadth-first search.
    VisitOnce,
    /// Expand a state if it was never expanded or is popped at a strictly
    /// lower cost than before. All successors are pushed. Used by
    /// uniform-cost and A* search.
    CheaperRevisit,
}

impl ExpansionPolicy {
    #[must_use]
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::DepthFirst | Strategy::BreadthFirst => Self::VisitOnce,
            Strategy::UniformCost | Strategy::AStar => Self::CheaperRevisit,
        }
    }
}

/// Counters describing one search run.
///
/// `frontier_pops = expansions + stale_pops`, plus one when a goal was popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// Strategy that produced these counters.
    pub strategy: Strategy,
    /// Entries removed from the frontier.
    pub frontier_pops: u64,
    /// Popped nodes whose successors were generated.
    pub expansions: u64,
    /// Popped nodes discarded because their state was already committed at
    /// an equal or lower cost.
    pub stale_pops: u64,
    /// Nodes pushed onto the frontier, including the start node.
    pub nodes_generated: u64,
    /// Successors not pushed because their state was already expanded
    /// (visit-once policy only).
    pub visited_successors_skipped: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Distinct states in the visited-cost table at termination.
    pub visited_states: u64,
}

impl SearchStats {
    fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            frontier_pops: 0,
            expansions: 0,
            stale_pops: 0,
            nodes_generated: 0,
            visited_successors_skipped: 0,
            frontier_high_water: 0,
            visited_states: 0,
        }
    }

    /// Render as a JSON object (keys in field order).
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "strategy": self.strategy.abbreviation(),
            "frontier_pops": self.frontier_pops,
            "expansions": self.expansions,
            "stale_pops": self.stale_pops,
            "nodes_generated": self.nodes_generated,
            "visited_successors_skipped": self.visited_successors_skipped,
            "frontier_high_water": self.frontier_high_water,
            "visited_states": self.visited_states,
        })
    }
}

/// Result of a search execution.
///
/// An exhausted frontier is not an error: `actions` is empty and `cost` is
/// `None`. A start state that is already a goal yields empty `actions` with
/// `cost == Some(ZERO)`, so check [`SearchResult::is_goal_reached`] to tell
/// the two apart.
#[derive(Debug, Clone)]
pub struct SearchResult<A, C> {
    /// Actions from the start state to the goal (empty if none found).
    pub actions: Vec<A>,
    /// Accumulated cost of `actions` (`None` if no goal was reached).
    pub cost: Option<C>,
    /// Run counters.
    pub stats: SearchStats,
}

impl<A, C> SearchResult<A, C> {
    /// Returns `true` if the search terminated because a goal was popped.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.cost.is_some()
    }

    /// The action sequence alone (empty signals no solution).
    #[must_use]
    pub fn into_actions(self) -> Vec<A> {
        self.actions
    }
}

/// Run `strategy` on `problem`.
///
/// `heuristic` is consulted by [`Strategy::AStar`] only; other strategies
/// ignore it.
pub fn search<P, H>(
    problem: &P,
    strategy: Strategy,
    heuristic: &H,
) -> SearchResult<P::Action, P::Cost>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    match strategy {
        Strategy::DepthFirst => graph_search(problem, strategy, StackFrontier::new(), |n| n.cost),
        Strategy::BreadthFirst => {
            graph_search(problem, strategy, QueueFrontier::new(), |n| n.cost)
        }
        Strategy::UniformCost => {
            graph_search(problem, strategy, PriorityFrontier::new(), |n| n.cost)
        }
        Strategy::AStar => graph_search(problem, strategy, PriorityFrontier::new(), |n| {
            n.cost + heuristic.estimate(&n.state, problem)
        }),
    }
}

/// Search the deepest nodes first. Not guaranteed to find the shortest or
/// cheapest path.
pub fn depth_first_search<P: SearchProblem + ?Sized>(problem: &P) -> Vec<P::Action> {
    search(problem, Strategy::DepthFirst, &NullHeuristic).into_actions()
}

/// Search the shallowest nodes first. Returns a path with the fewest actions.
pub fn breadth_first_search<P: SearchProblem + ?Sized>(problem: &P) -> Vec<P::Action> {
    search(problem, Strategy::BreadthFirst, &NullHeuristic).into_actions()
}

/// Search the node of least accumulated cost first. Returns a minimum-cost
/// path when all step costs are non-negative.
pub fn uniform_cost_search<P: SearchProblem + ?Sized>(problem: &P) -> Vec<P::Action> {
    search(problem, Strategy::UniformCost, &NullHeuristic).into_actions()
}

/// Search the node of least `cost + heuristic` first.
///
/// Pass [`NullHeuristic`] for the default zero heuristic. The returned path
/// is minimum-cost when step costs are non-negative and `heuristic` never
/// overestimates the remaining cost.
pub fn a_star_search<P, H>(problem: &P, heuristic: H) -> Vec<P::Action>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P>,
{
    search(problem, Strategy::AStar, &heuristic).into_actions()
}

fn graph_search<P, F>(
    problem: &P,
    strategy: Strategy,
    mut frontier: F,
    priority: impl Fn(&NodeOf<P>) -> P::Cost,
) -> SearchResult<P::Action, P::Cost>
where
    P: SearchProblem + ?Sized,
    F: Frontier<NodeOf<P>, P::Cost>,
{
    let policy = ExpansionPolicy::for_strategy(strategy);
    let mut visited: VisitedCosts<P::State, P::Cost> = VisitedCosts::new();
    let mut stats = SearchStats::new(strategy);

    let root = SearchNode::root(problem.start_state());
    let root_priority = priority(&root);
    frontier.push(root, root_priority);
    stats.nodes_generated = 1;
    stats.frontier_high_water = 1;

    tracing::debug!(%strategy, ?policy, "search started");

    while let Some(node) = frontier.pop() {
        stats.frontier_pops += 1;

        if problem.is_goal(&node.state) {
            stats.visited_states = visited.len() as u64;
            tracing::debug!(
                %strategy,
                expansions = stats.expansions,
                generated = stats.nodes_generated,
                path_len = node.path.len(),
                cost = ?node.cost,
                "goal reached"
            );
            return SearchResult {
                actions: node.path.to_vec(),
                cost: Some(node.cost),
                stats,
            };
        }

        let committed = match policy {
            ExpansionPolicy::VisitOnce => visited.mark_first(node.state.clone(), node.cost),
            ExpansionPolicy::CheaperRevisit => visited.improve(node.state.clone(), node.cost),
        };
        if !committed {
            stats.stale_pops += 1;
            tracing::trace!(cost = ?node.cost, "discarded stale frontier entry");
            continue;
        }

        stats.expansions += 1;
        let successors = problem.successors(&node.state);
        tracing::trace!(
            expansion = stats.expansions,
            depth = node.path.len(),
            cost = ?node.cost,
            successors = successors.len(),
            "expanding node"
        );

        for successor in successors {
            if policy == ExpansionPolicy::VisitOnce && visited.contains(&successor.state) {
                stats.visited_successors_skipped += 1;
                continue;
            }
            if successor.step_cost.is_negative() {
                tracing::warn!(
                    step_cost = ?successor.step_cost,
                    "negative step cost; optimality guarantees no longer hold"
                );
            }
            let child = node.child(successor);
            let child_priority = priority(&child);
            frontier.push(child, child_priority);
            stats.nodes_generated += 1;
        }

        stats.frontier_high_water = stats.frontier_high_water.max(frontier.len() as u64);
    }

    stats.visited_states = visited.len() as u64;
    tracing::debug!(
        %strategy,
        expansions = stats.expansions,
        generated = stats.nodes_generated,
        "frontier exhausted without reaching a goal"
    );
    SearchResult {
        actions: Vec::new(),
        cost: None,
        stats,
    }
}
