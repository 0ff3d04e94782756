//! Behavioural properties of the public matching entry points.
//!
//! The first half pins down concrete cases; the second half uses proptest
//! to check the same properties over generated trees.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sexp_ir::{sexp, Expr};
use sexp_match::{attempt_match, diagnose, match_expr, MatchFailure};

// -- Concrete cases --

#[test]
fn literal_patterns_match_only_equal_subjects() {
    assert!(attempt_match(&sexp!(test), &sexp!(test), || ()));
    assert!(!attempt_match(&sexp!(test), &sexp!(other), || ()));
}

#[test]
fn capture_order_is_left_to_right() {
    let captured = match_expr(&sexp!(id identifier), &sexp!(id ?), |id: &str| id.to_owned());
    assert_eq!(captured.as_deref(), Some("identifier"));
}

#[test]
fn kind_checked_capture() {
    assert!(!attempt_match(&sexp!(expr), &sexp!(?), |_: &[Expr]| ()));

    let singleton = sexp!((expr));
    let captured = match_expr(&singleton, &sexp!(?), |items: &[Expr]| items.to_vec());
    assert_eq!(captured, Some(vec![sexp!(expr)]));
}

#[test]
fn arity_mismatch_always_fails() {
    assert!(!attempt_match(&sexp!((a)), &sexp!((a b)), || ()));
    assert!(!attempt_match(&sexp!((a)), &sexp!((a ?)), |_: &Expr| ()));
    assert!(!attempt_match(&sexp!((a)), &sexp!((? ?)), |_: &Expr, _: &Expr| ()));
    assert!(!attempt_match(&sexp!((a b)), &sexp!((?)), |_: &Expr| ()));
}

#[test]
fn matching_is_repeatable_and_read_only() {
    let subject = sexp!(while (< i 10) ((assign i (+ i 1))));
    let pattern = sexp!(while ? ?);
    let (subject_before, pattern_before) = (subject.clone(), pattern.clone());

    let run = || {
        match_expr(&subject, &pattern, |cond: &Expr, body: &[Expr]| {
            (cond.clone(), body.to_vec())
        })
    };
    let first = run();
    let second = run();

    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(subject, subject_before);
    assert_eq!(pattern, pattern_before);
}

#[test]
fn nested_lists_match_at_depth() {
    let pair = match_expr(&sexp!((id) id), &sexp!((?) ?), |a: &str, b: &str| {
        format!("{a},{b}")
    });
    assert_eq!(pair.as_deref(), Some("id,id"));
}

#[test]
fn integers_match_by_value_and_kind() {
    assert_eq!(match_expr(&sexp!(test 82), &sexp!(test ?), |n: i64| n), Some(82));
    assert!(!attempt_match(&sexp!(test "eighty-two"), &sexp!(test ?), |_: i64| ()));
}

#[test]
fn deeply_nested_capture_grows_the_stack() {
    const DEPTH: usize = 3_000;

    let mut subject = Expr::atom("leaf");
    let mut pattern = Expr::atom("?");
    for _ in 0..DEPTH {
        subject = Expr::list([subject]);
        pattern = Expr::list([pattern]);
    }

    let captured = match_expr(&subject, &pattern, |leaf: &str| leaf.to_owned());
    assert_eq!(captured.as_deref(), Some("leaf"));
    assert!(attempt_match(&subject, &pattern, |_: &str| ()));
}

// -- Generated trees --

/// Trees without the wildcard token: atoms are lowercase words.
fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        "[a-z]{1,3}".prop_map(Expr::Atom),
        (-50i64..50).prop_map(Expr::Int),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Expr::List)
    })
}

/// Match `subject` against a list of `count` wildcards, with a callback of
/// matching arity so that only the shape can make the attempt fail.
fn matches_wildcard_list(subject: &Expr, count: usize) -> bool {
    let pattern = Expr::List(vec![Expr::atom("?"); count]);
    match count {
        0 => attempt_match(subject, &pattern, || ()),
        1 => attempt_match(subject, &pattern, |_: &Expr| ()),
        2 => attempt_match(subject, &pattern, |_: &Expr, _: &Expr| ()),
        _ => attempt_match(subject, &pattern, |_: &Expr, _: &Expr, _: &Expr| ()),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// A wildcard-free pattern matches exactly the subjects equal to it.
    #[test]
    fn prop_literal_pattern_matches_iff_equal(subject in expr_strategy(), pattern in expr_strategy()) {
        prop_assert_eq!(attempt_match(&subject, &pattern, || ()), subject == pattern);
        prop_assert!(attempt_match(&subject, &subject.clone(), || ()));
    }

    /// Three wildcards hand back the three children in order.
    #[test]
    fn prop_wildcards_capture_children_in_order(
        children in prop::collection::vec(expr_strategy(), 3)
    ) {
        let subject = Expr::List(children.clone());
        let captured = match_expr(&subject, &sexp!(? ? ?), |a: &Expr, b: &Expr, c: &Expr| {
            vec![a.clone(), b.clone(), c.clone()]
        });
        prop_assert_eq!(captured, Some(children));
    }

    /// Lists of different lengths never match, whatever the pattern holds.
    #[test]
    fn prop_length_mismatch_never_matches(
        children in prop::collection::vec(expr_strategy(), 0..4),
        count in 0usize..4,
    ) {
        let subject = Expr::List(children.clone());
        prop_assert_eq!(matches_wildcard_list(&subject, count), children.len() == count);
    }

    /// Running the same attempt twice gives the same outcome and leaves
    /// both trees untouched.
    #[test]
    fn prop_matching_is_repeatable(subject in expr_strategy(), pattern in expr_strategy()) {
        let wrapped_subject = Expr::list([Expr::atom("head"), subject.clone()]);
        let wrapped_pattern = Expr::list([Expr::atom("head"), Expr::atom("?")]);
        let snapshot = wrapped_subject.clone();

        let first = match_expr(&wrapped_subject, &wrapped_pattern, |e: &Expr| e.clone());
        let second = match_expr(&wrapped_subject, &wrapped_pattern, |e: &Expr| e.clone());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, Some(subject.clone()));
        prop_assert_eq!(&wrapped_subject, &snapshot);

        let first = diagnose(&subject, &pattern, || ());
        let second = diagnose(&subject, &pattern, || ());
        prop_assert_eq!(&first, &second);
        if subject != pattern {
            prop_assert_eq!(first, Err(MatchFailure::Structural));
        }
    }
}
