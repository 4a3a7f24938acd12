//! Typed search errors.
//!
//! `SearchError` covers wiring faults only. A search that exhausts its
//! frontier without reaching a goal is not an error: it yields an empty
//! action sequence (see [`crate::search::SearchResult`]).

/// Typed failure for problem wiring and configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A problem-interface method was invoked on an implementation that
    /// declares the capability but does not provide it.
    #[error("capability not implemented by this problem: {capability}")]
    Unimplemented { capability: &'static str },

    /// An action sequence cannot be replayed from the start state; `position`
    /// is the index of the first action that is not legal.
    #[error("action at position {position} is not legal from the reached state")]
    IllegalActionSequence { position: usize },

    /// A strategy name did not match any known search algorithm.
    #[error("unknown search strategy: {name:?}")]
    UnknownStrategy { name: String },
}
