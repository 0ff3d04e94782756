//! The two-operation protocol the walkers drive.

use sexp_ir::Expr;

/// Continuation handed to [`Matcher::capture`].
///
/// It receives the matcher view in which the captured slot is consumed and
/// must eventually call [`Matcher::complete`] on it for the match to proceed.
pub type Resume<'r, 'e> = dyn FnMut(&mut dyn Matcher<'e>) + 'r;

/// Receiver of match events for one match attempt.
///
/// Walkers only ever talk to a `dyn Matcher`, never to a concrete strategy.
/// Neither operation returns anything: success flows forward through
/// `complete` and the continuation, failure is the absence of further calls.
///
/// `'e` is the lifetime of the subject tree; captured values borrow from it.
pub trait Matcher<'e> {
    /// The current pattern position is a wildcard aligned with `value`.
    ///
    /// An implementation either accepts the value and calls `resume` with the
    /// view of "one slot consumed", or drops the attempt by not calling it.
    fn capture(&mut self, value: &'e Expr, resume: &mut Resume<'_, 'e>);

    /// Everything this matcher view owns has matched.
    fn complete(&mut self);
}
