//! Search problem contract trait.

use std::hash::Hash;

use crate::cost::Cost;
use crate::error::SearchError;

/// One transition out of a state, as reported by [`SearchProblem::successors`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A, C> {
    /// The state reached by taking `action`.
    pub state: S,
    /// The action that produces `state` from the expanded state.
    pub action: A,
    /// Incremental cost of the transition. Must be non-negative.
    pub step_cost: C,
}

impl<S, A, C> From<(S, A, C)> for Successor<S, A, C> {
    fn from((state, action, step_cost): (S, A, C)) -> Self {
        Self {
            state,
            action,
            step_cost,
        }
    }
}

/// Shorthand for the successor type of a problem.
pub type SuccessorOf<P> = Successor<
    <P as SearchProblem>::State,
    <P as SearchProblem>::Action,
    <P as SearchProblem>::Cost,
>;

/// Trait for problems that support search.
///
/// The engine only queries a problem; it never mutates it.
///
/// # Contract
///
/// - `State` is used as a hash key. Two states that compare equal are the same
///   search state; the engine never inspects state structure otherwise.
/// - `successors` must be deterministic: same state → same successors in the
///   same order. Order affects which of several equal-cost paths is returned.
/// - Step costs must be non-negative for the optimality guarantees of
///   uniform-cost and A* search to hold.
pub trait SearchProblem {
    /// Opaque search state.
    type State: Clone + Eq + Hash;
    /// Opaque move token, carried only for path reconstruction.
    type Action: Clone;
    /// Numeric cost type shared by step costs, path costs and heuristics.
    type Cost: Cost;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal test.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Ordered transitions out of `state`.
    fn successors(&self, state: &Self::State) -> Vec<SuccessorOf<Self>>;

    /// Total cost of a sequence of legal actions from the start state.
    ///
    /// Not used by the engine. Problems that can price action sequences
    /// override this; the provided implementation reports the capability as
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Unimplemented`] unless overridden.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Result<Self::Cost, SearchError> {
        let _ = actions;
        Err(SearchError::Unimplemented {
            capability: "cost_of_actions",
        })
    }
}
