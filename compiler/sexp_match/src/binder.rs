//! Terminal binder: the matcher at the root of every match attempt.
//!
//! It owns the growing capture list and the sticky outcome of the attempt.
//! Each `capture` checks the value against the next parameter's [`Slot`]
//! before consuming it; `complete` at the root means the whole pattern
//! matched and the callback is invoked with the converted captures.
//!
//! Once the attempt has failed every further call is a no-op. There is no
//! way back to [`BinderState::Matching`] and no retry with another typing.

use std::marker::PhantomData;

use sexp_ir::Expr;

use crate::capture::{Callback, Slot};
use crate::error::MatchFailure;
use crate::protocol::{Matcher, Resume};

/// Progress of one match attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BinderState {
    /// No failure yet; zero or more captures taken.
    Matching,
    /// Terminal. The callback will not be invoked.
    Failed(MatchFailure),
    /// Terminal. The callback was invoked exactly once.
    Succeeded,
}

/// [`Matcher`] wrapping a typed callback.
pub struct Binder<'e, Args, C: Callback<'e, Args>> {
    callback: C,
    captures: Vec<&'e Expr>,
    state: BinderState,
    output: Option<C::Output>,
    args: PhantomData<fn(Args)>,
}

impl<'e, Args, C: Callback<'e, Args>> Binder<'e, Args, C> {
    pub fn new(callback: C) -> Self {
        Binder {
            callback,
            captures: Vec::with_capacity(C::SLOTS.len()),
            state: BinderState::Matching,
            output: None,
            args: PhantomData,
        }
    }

    pub fn state(&self) -> &BinderState {
        &self.state
    }

    /// Captures currently held, in wildcard order.
    pub fn captures(&self) -> &[&'e Expr] {
        &self.captures
    }

    /// Consume the binder and report the outcome of the attempt.
    ///
    /// An attempt that neither failed in the binder nor reached completion
    /// was stopped by the walker, i.e. the shapes disagreed.
    pub fn finish(self) -> Result<C::Output, MatchFailure> {
        match (self.state, self.output) {
            (BinderState::Succeeded, Some(output)) => Ok(output),
            (BinderState::Failed(failure), _) => Err(failure),
            (BinderState::Matching | BinderState::Succeeded, _) => Err(MatchFailure::Structural),
        }
    }

    fn is_matching(&self) -> bool {
        matches!(self.state, BinderState::Matching)
    }

    fn fail(&mut self, failure: MatchFailure) {
        tracing::trace!(%failure, "match attempt abandoned");
        self.state = BinderState::Failed(failure);
    }
}

impl<'e, Args, C: Callback<'e, Args>> Matcher<'e> for Binder<'e, Args, C> {
    fn capture(&mut self, value: &'e Expr, resume: &mut Resume<'_, 'e>) {
        if !self.is_matching() {
            return;
        }

        let slot = self.captures.len();
        let found = value.kind();
        match C::SLOTS.get(slot).copied() {
            None => self.fail(MatchFailure::TooManyCaptures {
                declared: C::SLOTS.len(),
            }),
            Some(Slot::Exactly(expected)) if expected != found => {
                self.fail(MatchFailure::KindMismatch {
                    slot,
                    expected,
                    found,
                });
            }
            Some(_) => {
                self.captures.push(value);
                resume(self);
                // Back to the view this call was made on.
                self.captures.truncate(slot);
            }
        }
    }

    fn complete(&mut self) {
        if !self.is_matching() {
            return;
        }

        let declared = C::SLOTS.len();
        let captured = self.captures.len();
        if captured != declared {
            self.fail(MatchFailure::TooFewCaptures { declared, captured });
            return;
        }

        match self.callback.call(&self.captures) {
            Ok(output) => {
                self.output = Some(output);
                self.state = BinderState::Succeeded;
            }
            Err(slot) => self.fail(MatchFailure::Rejected { slot }),
        }
    }
}

#[cfg(test)]
mod tests;
