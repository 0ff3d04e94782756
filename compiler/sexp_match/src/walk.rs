//! Tree walkers.
//!
//! [`Walker::hierarchy`] compares one subject node with one pattern node and
//! dispatches on the pattern's kind. [`Walker::sequence`] walks two child
//! lists pairwise, wrapping the downstream matcher in a [`SequenceCursor`] at
//! every position so that a position only counts as matched once everything
//! after it has matched too.
//!
//! Both walkers are read-only: the only effects are calls into the matcher.

use sexp_ir::Expr;

use crate::config::{MatchConfig, DEFAULT_WILDCARD};
use crate::protocol::{Matcher, Resume};
use crate::stack::ensure_sufficient_stack;

/// Walks a subject tree against a pattern tree.
///
/// Holds the wildcard token; an atom equal to it in the pattern captures the
/// aligned subject node instead of requiring equality.
#[derive(Copy, Clone, Debug)]
pub struct Walker<'w> {
    wildcard: &'w str,
}

impl Default for Walker<'static> {
    fn default() -> Self {
        Walker::new(DEFAULT_WILDCARD)
    }
}

impl<'w> Walker<'w> {
    pub const fn new(wildcard: &'w str) -> Self {
        Walker { wildcard }
    }

    pub fn from_config(config: &'w MatchConfig) -> Self {
        Walker::new(config.wildcard())
    }

    pub fn wildcard(self) -> &'w str {
        self.wildcard
    }

    /// Check whether `pattern` is the wildcard token.
    pub fn is_wildcard(self, pattern: &Expr) -> bool {
        pattern.is_atom(self.wildcard)
    }

    /// Match a single subject node against a single pattern node.
    ///
    /// - wildcard: `capture(expr)`, with a continuation that completes the
    ///   resolved view
    /// - atom or integer literal: `complete()` iff the subject is the same
    ///   kind with the same value
    /// - list: [`Walker::sequence`] over both child lists iff the subject is
    ///   a list
    ///
    /// Every other combination makes no call at all.
    pub fn hierarchy<'e>(self, expr: &'e Expr, pattern: &Expr, matcher: &mut dyn Matcher<'e>) {
        ensure_sufficient_stack(|| match pattern {
            Expr::Atom(token) if token == self.wildcard => {
                matcher.capture(expr, &mut |resolved: &mut dyn Matcher<'e>| {
                    resolved.complete();
                });
            }
            Expr::Atom(literal) => {
                if expr.as_atom() == Some(literal.as_str()) {
                    matcher.complete();
                }
            }
            Expr::Int(literal) => {
                if expr.as_int() == Some(*literal) {
                    matcher.complete();
                }
            }
            Expr::List(patterns) => {
                if let Expr::List(items) = expr {
                    self.sequence(items, patterns, matcher);
                }
            }
        });
    }

    /// Match two child lists position by position.
    ///
    /// Completes `matcher` when both lists run out together. When exactly one
    /// runs out the lengths differ and the walk stops silently.
    pub fn sequence<'e>(self, items: &'e [Expr], patterns: &[Expr], matcher: &mut dyn Matcher<'e>) {
        ensure_sufficient_stack(|| match (items.split_first(), patterns.split_first()) {
            (None, None) => matcher.complete(),
            (Some((item, items)), Some((pattern, patterns))) => {
                let mut cursor = SequenceCursor {
                    walker: self,
                    items,
                    patterns,
                    downstream: &mut *matcher,
                };
                self.hierarchy(item, pattern, &mut cursor);
            }
            (None, Some(_)) | (Some(_), None) => {}
        });
    }
}

/// Matcher view for one position of a sequence walk.
///
/// `items` and `patterns` are what is left *after* the current position.
/// Completing the current position resumes the sequence walk on them;
/// capturing at the current position is forwarded downstream, and whatever
/// view the downstream hands back is wrapped in a cursor at this same
/// position again.
pub struct SequenceCursor<'c, 'e> {
    walker: Walker<'c>,
    items: &'e [Expr],
    patterns: &'c [Expr],
    downstream: &'c mut dyn Matcher<'e>,
}

impl<'e> Matcher<'e> for SequenceCursor<'_, 'e> {
    // Captures climb through one cursor per enclosing list; resumes descend
    // through as many.
    fn capture(&mut self, value: &'e Expr, resume: &mut Resume<'_, 'e>) {
        let (walker, items, patterns) = (self.walker, self.items, self.patterns);
        ensure_sufficient_stack(|| {
            self.downstream.capture(value, &mut |consumed: &mut dyn Matcher<'e>| {
                let mut cursor = SequenceCursor {
                    walker,
                    items,
                    patterns,
                    downstream: consumed,
                };
                ensure_sufficient_stack(|| resume(&mut cursor));
            });
        });
    }

    fn complete(&mut self) {
        self.walker.sequence(self.items, self.patterns, &mut *self.downstream);
    }
}
