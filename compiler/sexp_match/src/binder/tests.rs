use super::*;
use crate::walk::Walker;
use pretty_assertions::assert_eq;
use sexp_ir::{sexp, Kind};

fn drive<'e, Args, C: Callback<'e, Args>>(
    subject: &'e Expr,
    pattern: &Expr,
    binder: &mut Binder<'e, Args, C>,
) {
    Walker::default().hierarchy(subject, pattern, binder);
}

fn complete_view(view: &mut dyn Matcher<'_>) {
    view.complete();
}

#[test]
fn new_binder_is_matching_and_empty() {
    let binder = Binder::new(|_: &str| ());
    assert_eq!(binder.state(), &BinderState::Matching);
    assert!(binder.captures().is_empty());
}

#[test]
fn successful_match_invokes_callback_once() {
    let subject = sexp!(id identifier);
    let mut calls = Vec::new();
    let mut binder = Binder::new(|id: &str| calls.push(id.to_owned()));
    drive(&subject, &sexp!(id ?), &mut binder);
    assert_eq!(binder.state(), &BinderState::Succeeded);
    // Captures are scoped to the continuation that consumed them.
    assert!(binder.captures().is_empty());
    assert_eq!(binder.finish(), Ok(()));
    assert_eq!(calls, vec!["identifier".to_owned()]);
}

#[test]
fn finish_returns_the_callback_output() {
    let subject = sexp!(test 82);
    let mut binder = Binder::new(|n: i64| n * 2);
    drive(&subject, &sexp!(test ?), &mut binder);
    assert_eq!(binder.finish(), Ok(164));
}

#[test]
fn kind_mismatch_is_sticky() {
    let subject = sexp!(expr);
    let mut called = false;
    let mut binder = Binder::new(|_: &[Expr]| called = true);
    drive(&subject, &sexp!(?), &mut binder);
    let failure = MatchFailure::KindMismatch {
        slot: 0,
        expected: Kind::List,
        found: Kind::Atom,
    };
    assert_eq!(binder.state(), &BinderState::Failed(failure.clone()));

    // Later events cannot revive the attempt.
    binder.complete();
    binder.capture(&subject, &mut complete_view);
    assert_eq!(binder.state(), &BinderState::Failed(failure.clone()));
    assert_eq!(binder.finish(), Err(failure));
    assert!(!called);
}

#[test]
fn too_many_wildcards_fail() {
    let subject = sexp!(a b);
    let mut binder = Binder::new(|_: &str| ());
    drive(&subject, &sexp!(? ?), &mut binder);
    assert_eq!(
        binder.finish(),
        Err(MatchFailure::TooManyCaptures { declared: 1 })
    );
}

#[test]
fn wildcard_against_zero_argument_callback_fails() {
    let subject = sexp!(a);
    let mut binder = Binder::new(|| ());
    drive(&subject, &sexp!(?), &mut binder);
    assert_eq!(
        binder.finish(),
        Err(MatchFailure::TooManyCaptures { declared: 0 })
    );
}

#[test]
fn too_few_wildcards_fail() {
    let subject = sexp!(a b);
    let mut binder = Binder::new(|_: &str, _: &str| ());
    drive(&subject, &sexp!(a ?), &mut binder);
    assert_eq!(
        binder.finish(),
        Err(MatchFailure::TooFewCaptures {
            declared: 2,
            captured: 1,
        })
    );
}

#[test]
fn structural_mismatch_leaves_binder_matching() {
    let subject = sexp!(a b);
    let mut binder = Binder::new(|_: &str| ());
    drive(&subject, &sexp!(? c), &mut binder);
    assert_eq!(binder.state(), &BinderState::Matching);
    assert_eq!(binder.finish(), Err(MatchFailure::Structural));
}

#[test]
fn refused_conversion_fails_without_calling() {
    let subject = Expr::list([Expr::atom("big"), Expr::int(i64::from(i32::MAX) + 1)]);
    let mut called = false;
    let mut binder = Binder::new(|_: i32| called = true);
    drive(&subject, &sexp!(big ?), &mut binder);
    assert_eq!(binder.finish(), Err(MatchFailure::Rejected { slot: 0 }));
    assert!(!called);
}

#[test]
fn complete_after_success_is_ignored() {
    let subject = sexp!(test);
    let mut count = 0;
    let mut binder = Binder::new(|| count += 1);
    drive(&subject, &sexp!(test), &mut binder);
    binder.complete();
    assert_eq!(binder.state(), &BinderState::Succeeded);
    assert_eq!(binder.finish(), Ok(()));
    assert_eq!(count, 1);
}
