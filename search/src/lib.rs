//! Waypoint Search: generic state-space search over caller-defined problems.
//!
//! The engine is domain-agnostic. A caller implements [`SearchProblem`] for
//! its own state, action and cost types; the engine returns the sequence of
//! actions leading from the start state to a goal state.
//!
//! # Layering
//!
//! ```text
//! cost  ←  contract  ←  heuristic
//!   ↑         ↑
//! node  ←  frontier  ←  visited  ←  search  ←  strategy
//! ```
//!
//! # Key types
//!
//! - [`SearchProblem`]: the capability interface a concrete problem implements
//! - [`Heuristic`] / [`NullHeuristic`]: remaining-cost estimates for A*
//! - [`Frontier`]: stack, queue and stable priority-queue disciplines
//! - [`VisitedCosts`]: best committed cost per expanded state
//! - [`SearchResult`]: actions, total cost and [`SearchStats`]
//! - [`Strategy`]: algorithm selection by name
//!
//! The engine is synchronous, performs no I/O and imposes no depth, cost or
//! iteration limits: a search over an infinite space with no reachable goal
//! does not terminate.
//!
//! [`SearchProblem`]: contract::SearchProblem
//! [`Heuristic`]: heuristic::Heuristic
//! [`NullHeuristic`]: heuristic::NullHeuristic
//! [`Frontier`]: frontier::Frontier
//! [`VisitedCosts`]: visited::VisitedCosts
//! [`SearchResult`]: search::SearchResult
//! [`SearchStats`]: search::SearchStats
//! [`Strategy`]: strategy::Strategy

#![forbid(unsafe_code)]

pub mod contract;
pub mod cost;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod search;
pub mod strategy;
pub mod visited;
