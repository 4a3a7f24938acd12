//! Search strategy selection.

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// The four traversal strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Depth-first graph search over a stack frontier.
    DepthFirst,
    /// Breadth-first graph search over a queue frontier.
    BreadthFirst,
    /// Uniform-cost search: priority = accumulated cost `g`.
    UniformCost,
    /// A* search: priority = `g + h`.
    AStar,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 4] = [
        Self::DepthFirst,
        Self::BreadthFirst,
        Self::UniformCost,
        Self::AStar,
    ];

    /// Short name (`dfs`, `bfs`, `ucs`, `astar`).
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::UniformCost => "ucs",
            Self::AStar => "astar",
        }
    }

    /// Whether the first goal popped is guaranteed minimum-cost, given
    /// non-negative step costs (and, for A*, an admissible heuristic).
    #[must_use]
    pub fn is_cost_optimal(self) -> bool {
        matches!(self, Self::UniformCost | Self::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    /// Accepts the abbreviation or the long name in camel or snake case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dfs" | "depthFirstSearch" | "depth_first_search" => Ok(Self::DepthFirst),
            "bfs" | "breadthFirstSearch" | "breadth_first_search" => Ok(Self::BreadthFirst),
            "ucs" | "uniformCostSearch" | "uniform_cost_search" => Ok(Self::UniformCost),
            "astar" | "aStarSearch" | "a_star_search" => Ok(Self::AStar),
            other => Err(SearchError::UnknownStrategy {
                name: other.to_string(),
            }),
        }
    }
}
