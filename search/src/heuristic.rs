//! Heuristic contract for A* search.

use crate::contract::SearchProblem;
use crate::cost::Cost;

/// Estimate of the remaining cost from a state to the nearest goal.
///
/// Estimates must be non-negative. For A* to return a minimum-cost path the
/// estimate must also be admissible (never above the true remaining cost).
/// Neither property is checked by the engine.
///
/// Any `Fn(&State, &Problem) -> Cost` implements this trait.
pub trait Heuristic<P: SearchProblem + ?Sized> {
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost;
}

/// The zero heuristic. A* with `NullHeuristic` orders its frontier exactly
/// like uniform-cost search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullHeuristic;

impl<P: SearchProblem + ?Sized> Heuristic<P> for NullHeuristic {
    fn estimate(&self, _state: &P::State, _problem: &P) -> P::Cost {
        P::Cost::ZERO
    }
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem + ?Sized,
    F: Fn(&P::State, &P) -> P::Cost,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost {
        self(state, problem)
    }
}
