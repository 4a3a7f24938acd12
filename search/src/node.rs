//! Core search node and path types.

use std::fmt;
use std::rc::Rc;

use crate::contract::Successor;
use crate::cost::Cost;

/// One link of a [`Path`]: the last action plus the shared prefix before it.
struct PathLink<A> {
    action: A,
    prefix: Option<Rc<PathLink<A>>>,
}

/// An immutable sequence of actions.
///
/// Extending a path never mutates it: [`Path::extended`] returns a new path
/// that shares the existing prefix. Sibling nodes in the frontier therefore
/// share storage for their common ancestry.
pub struct Path<A> {
    last: Option<Rc<PathLink<A>>>,
    len: usize,
}

impl<A> Path<A> {
    /// The empty path (start node).
    #[must_use]
    pub fn empty() -> Self {
        Self { last: None, len: 0 }
    }

    /// A new path equal to `self` followed by `action`.
    #[must_use]
    pub fn extended(&self, action: A) -> Self {
        Self {
            last: Some(Rc::new(PathLink {
                action,
                prefix: self.last.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the path has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate actions from last to first.
    fn iter_rev(&self) -> impl Iterator<Item = &A> {
        std::iter::successors(self.last.as_deref(), |link| link.prefix.as_deref())
            .map(|link| &link.action)
    }
}

impl<A: Clone> Path<A> {
    /// Materialize the actions in order, first action first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<A> {
        let mut actions: Vec<A> = self.iter_rev().cloned().collect();
        actions.reverse();
        actions
    }
}

impl<A> Clone for Path<A> {
    fn clone(&self) -> Self {
        Self {
            last: self.last.clone(),
            len: self.len,
        }
    }
}

impl<A> Default for Path<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A: fmt::Debug> fmt::Debug for Path<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut actions: Vec<&A> = self.iter_rev().collect();
        actions.reverse();
        f.debug_list().entries(actions).finish()
    }
}

// Unlink iteratively: the default recursive drop of a long uniquely-owned
// chain would use stack depth proportional to the path length.
impl<A> Drop for Path<A> {
    fn drop(&mut self) {
        let mut next = self.last.take();
        while let Some(link) = next {
            match Rc::try_unwrap(link) {
                Ok(mut owned) => next = owned.prefix.take(),
                Err(_) => break,
            }
        }
    }
}

/// An immutable search node in the frontier.
///
/// Created when a successor is generated; never modified afterwards.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A, C> {
    /// State reached by `path`.
    pub state: S,
    /// Actions taken from the start state.
    pub path: Path<A>,
    /// Accumulated cost `g` of `path`.
    pub cost: C,
}

impl<S, A, C: Cost> SearchNode<S, A, C> {
    /// Node for the start state: empty path, zero cost.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            state,
            path: Path::empty(),
            cost: C::ZERO,
        }
    }

    /// Child node reached through `successor`.
    ///
    /// `g(child) = g(self) + step_cost`.
    #[must_use]
    pub fn child(&self, successor: Successor<S, A, C>) -> Self {
        Self {
            state: successor.state,
            path: self.path.extended(successor.action),
            cost: self.cost + successor.step_cost,
        }
    }
}
