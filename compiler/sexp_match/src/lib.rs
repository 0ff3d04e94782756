//! Sexp Match - Structural Pattern Matching
//!
//! Matches a subject [`Expr`] against a pattern `Expr` and, on success, calls
//! a callback whose parameters receive the nodes captured by the pattern's
//! wildcards, converted to the parameter types.
//!
//! ```
//! use sexp_ir::sexp;
//! use sexp_match::attempt_match;
//!
//! let stmt = sexp!(assign counter 82);
//! let matched = attempt_match(&stmt, &sexp!(assign ? ?), |name: &str, value: i64| {
//!     assert_eq!((name, value), ("counter", 82));
//! });
//! assert!(matched);
//! ```
//!
//! # Architecture
//!
//! - [`Walker::hierarchy`] compares one node pair and dispatches on the
//!   pattern's kind.
//! - [`Walker::sequence`] walks two child lists pairwise through
//!   [`SequenceCursor`]s.
//! - Both drive the continuation-style [`Matcher`] protocol (`capture`,
//!   `complete`) and never a concrete strategy.
//! - [`Binder`] is the root matcher: it type-checks and accumulates captures
//!   and invokes the [`Callback`] when the root completes.
//!
//! # Failure
//!
//! A structural mismatch, a length mismatch, a capture of the wrong kind and
//! a wildcard count that differs from the callback's arity all end the
//! attempt without invoking the callback. The boolean and `Option` entry
//! points do not tell these apart; [`diagnose`] does.
//!
//! Every attempt is independent: no state survives between calls and
//! neither tree is modified.

mod binder;
mod capture;
mod config;
mod error;
mod protocol;
mod stack;
mod walk;

pub use binder::{Binder, BinderState};
pub use capture::{Callback, FromCapture, Slot};
pub use config::{MatchConfig, DEFAULT_WILDCARD};
pub use error::MatchFailure;
pub use protocol::{Matcher, Resume};
pub use sexp_ir::{Expr, Kind};
pub use walk::{SequenceCursor, Walker};

/// Match `subject` against `pattern`, calling `callback` with the captures
/// on success.
///
/// Returns `true` iff the callback was invoked, which happens at most once.
pub fn attempt_match<'e, Args, C>(subject: &'e Expr, pattern: &Expr, callback: C) -> bool
where
    C: Callback<'e, Args>,
{
    run(Walker::default(), subject, pattern, callback).is_ok()
}

/// Like [`attempt_match`], but returns the callback's result.
pub fn match_expr<'e, Args, C>(subject: &'e Expr, pattern: &Expr, callback: C) -> Option<C::Output>
where
    C: Callback<'e, Args>,
{
    run(Walker::default(), subject, pattern, callback).ok()
}

/// Like [`match_expr`], but reports why the callback was not invoked.
pub fn diagnose<'e, Args, C>(
    subject: &'e Expr,
    pattern: &Expr,
    callback: C,
) -> Result<C::Output, MatchFailure>
where
    C: Callback<'e, Args>,
{
    run(Walker::default(), subject, pattern, callback)
}

/// [`attempt_match`] with an explicit configuration.
pub fn attempt_match_with<'e, Args, C>(
    config: &MatchConfig,
    subject: &'e Expr,
    pattern: &Expr,
    callback: C,
) -> bool
where
    C: Callback<'e, Args>,
{
    run(Walker::from_config(config), subject, pattern, callback).is_ok()
}

/// [`match_expr`] with an explicit configuration.
pub fn match_expr_with<'e, Args, C>(
    config: &MatchConfig,
    subject: &'e Expr,
    pattern: &Expr,
    callback: C,
) -> Option<C::Output>
where
    C: Callback<'e, Args>,
{
    run(Walker::from_config(config), subject, pattern, callback).ok()
}

/// [`diagnose`] with an explicit configuration.
pub fn diagnose_with<'e, Args, C>(
    config: &MatchConfig,
    subject: &'e Expr,
    pattern: &Expr,
    callback: C,
) -> Result<C::Output, MatchFailure>
where
    C: Callback<'e, Args>,
{
    run(Walker::from_config(config), subject, pattern, callback)
}

#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(subject = %subject, pattern = %pattern, wildcard = walker.wildcard())
)]
fn run<'e, Args, C>(
    walker: Walker<'_>,
    subject: &'e Expr,
    pattern: &Expr,
    callback: C,
) -> Result<C::Output, MatchFailure>
where
    C: Callback<'e, Args>,
{
    let mut binder = Binder::new(callback);
    walker.hierarchy(subject, pattern, &mut binder);
    let outcome = binder.finish();
    match &outcome {
        Ok(_) => tracing::trace!("match was called"),
        Err(failure) => tracing::trace!(%failure, "match was not called"),
    }
    outcome
}
