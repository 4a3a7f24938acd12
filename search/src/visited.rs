//! Visited-cost table: best cost at which each state has been expanded.
//!
//! Entries are only ever inserted or lowered within one search call; a
//! recorded cost never increases. The table is never iterated, so a
//! `HashMap` keeps results independent of hash seeding.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cost::Cost;

/// Mapping from state to the lowest cost at which it was committed.
#[derive(Debug, Clone)]
pub struct VisitedCosts<S, C> {
    best: HashMap<S, C>,
}

impl<S: Eq + Hash, C: Cost> VisitedCosts<S, C> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            best: HashMap::new(),
        }
    }

    /// Whether `state` has been committed at any cost.
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.best.contains_key(state)
    }

    /// Lowest committed cost for `state`.
    #[must_use]
    pub fn cost_of(&self, state: &S) -> Option<C> {
        self.best.get(state).copied()
    }

    /// Commit `state` only if it has never been committed.
    ///
    /// Returns `true` if the state was newly recorded.
    pub fn mark_first(&mut self, state: S, cost: C) -> bool {
        if self.best.contains_key(&state) {
            return false;
        }
        self.best.insert(state, cost);
        true
    }

    /// Commit `state` if it is new or `cost` is strictly below the recorded cost.
    ///
    /// Returns `true` if the table changed. Equal or higher costs leave the
    /// entry untouched.
    pub fn improve(&mut self, state: S, cost: C) -> bool {
        match self.best.get_mut(&state) {
            Some(recorded) => {
                if cost.cost_cmp(recorded).is_lt() {
                    *recorded = cost;
                    true
                } else {
                    false
                }
            }
            None => {
                self.best.insert(state, cost);
                true
            }
        }
    }

    /// Number of distinct committed states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Whether no state has been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

impl<S: Eq + Hash, C: Cost> Default for VisitedCosts<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
