//! Why a match attempt produced no callback invocation.

use sexp_ir::Kind;

/// Cause of a failed match attempt.
///
/// The boolean entry points fold every variant into `false`; only the
/// `diagnose*` entry points surface it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchFailure {
    /// A literal differed, a list met a non-list, or list lengths differed.
    #[error("subject does not have the shape of the pattern")]
    Structural,

    /// The pattern holds more wildcards than the callback has parameters.
    #[error("pattern has more wildcards than the callback's {declared} parameter(s)")]
    TooManyCaptures { declared: usize },

    /// The whole pattern matched but some parameters were never captured.
    #[error("pattern captured {captured} value(s) but the callback takes {declared}")]
    TooFewCaptures { declared: usize, captured: usize },

    /// A wildcard captured a node of the wrong kind for its parameter.
    #[error("wildcard {slot} captured {found}, but the callback expects {expected}")]
    KindMismatch {
        slot: usize,
        expected: Kind,
        found: Kind,
    },

    /// The parameter type refused the captured value (e.g. an integer out of
    /// range for `i32`).
    #[error("callback parameter {slot} rejected the captured value")]
    Rejected { slot: usize },
}
