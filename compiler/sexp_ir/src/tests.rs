use super::*;
use pretty_assertions::assert_eq;

#[test]
fn sexp_single_tokens() {
    assert_eq!(sexp!(break), Expr::atom("break"));
    assert_eq!(sexp!(82), Expr::int(82));
    assert_eq!(sexp!("two words"), Expr::atom("two words"));
    assert_eq!(sexp!(?), Expr::atom("?"));
    assert_eq!(sexp!(true), Expr::atom("true"));
    assert_eq!(sexp!(false), Expr::atom("false"));
    assert_eq!(sexp!(()), Expr::nil());
}

#[test]
fn sexp_top_level_tokens_form_a_list() {
    let expected = Expr::list([Expr::atom("assign"), Expr::atom("a"), Expr::int(1)]);
    assert_eq!(sexp!(assign a 1), expected);
    assert_eq!(sexp!((assign a 1)), expected);
}

#[test]
fn sexp_nested_groups() {
    let expected = Expr::list([
        Expr::list([Expr::list([Expr::atom("id")]), Expr::atom("id")]),
    ]);
    assert_eq!(sexp!((((id) id))), expected);
}

#[test]
fn sexp_punctuation_atoms() {
    assert_eq!(
        sexp!(+ a 1),
        Expr::list([Expr::atom("+"), Expr::atom("a"), Expr::int(1)])
    );
    assert_eq!(
        sexp!(== a b),
        Expr::list([Expr::atom("=="), Expr::atom("a"), Expr::atom("b")])
    );
}

#[test]
fn sexp_splices_values() {
    let name = String::from("counter");
    assert_eq!(
        sexp!(assign { name.clone() } { -3 }),
        Expr::list([Expr::atom("assign"), Expr::atom("counter"), Expr::int(-3)])
    );
}

#[test]
fn sexp_minus_is_an_atom() {
    let expected = Expr::list([Expr::atom("-"), Expr::atom("a"), Expr::atom("b")]);
    assert_eq!(sexp!(-), Expr::atom("-"));
    assert_eq!(sexp!(- a b), expected);
    assert_eq!(sexp!((- a b)), expected);
    assert_eq!(
        sexp!(assign n (- n 1)),
        Expr::list([
            Expr::atom("assign"),
            Expr::atom("n"),
            Expr::list([Expr::atom("-"), Expr::atom("n"), Expr::int(1)]),
        ])
    );
    assert_eq!(sexp!((- n 1)).to_string(), "(- n 1)");
}
