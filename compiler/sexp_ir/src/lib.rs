//! Sexp IR - Expression Trees
//!
//! This crate holds the one data type the matcher works on: [`Expr`], a tree
//! of lists, atoms and integers. The same type describes both the subject of a
//! match and the pattern it is matched against.
//!
//! - [`Expr`] and its variant tag [`Kind`]
//! - Construction helpers (`Expr::atom`, `Expr::int`, `Expr::list`, `From` impls)
//! - The [`sexp!`] shorthand for nested literal trees
//! - [`render`] for the parenthesized text form used in diagnostics
//!
//! There is no parser: trees are built programmatically.

mod expr;
mod render;

pub use expr::{Expr, Kind};
pub use render::render;

/// Build an [`Expr`] from S-expression shorthand.
///
/// Each token becomes one node:
/// - a parenthesized group becomes a [`Expr::List`]
/// - an integer literal becomes an [`Expr::Int`]
/// - a string literal, identifier, keyword or punctuation token becomes an
///   [`Expr::Atom`] holding its text
/// - `{ expr }` splices any value convertible into an `Expr` (use this for
///   negative integers and computed atoms; a bare `-` is always the atom)
///
/// Several top-level tokens form a list, so `sexp!(assign a 1)` and
/// `sexp!((assign a 1))` build the same tree.
///
/// ```
/// use sexp_ir::sexp;
///
/// let stmt = sexp!(while true ((assign a { -1 }) break));
/// assert_eq!(stmt.to_string(), "(while true ((assign a -1) break))");
/// ```
#[macro_export]
macro_rules! sexp {
    (( $($inner:tt)* )) => {
        $crate::Expr::List(::std::vec![$($crate::sexp!($inner)),*])
    };
    ({ $value:expr }) => {
        $crate::Expr::from($value)
    };
    (true) => {
        $crate::Expr::atom("true")
    };
    (false) => {
        $crate::Expr::atom("false")
    };
    // A lone `-` would otherwise start a negative literal fragment.
    (-) => {
        $crate::Expr::atom("-")
    };
    (- $($rest:tt)+) => {
        $crate::Expr::List(::std::vec![$crate::Expr::atom("-"), $($crate::sexp!($rest)),+])
    };
    ($lit:literal) => {
        $crate::Expr::from($lit)
    };
    ($atom:tt) => {
        $crate::Expr::atom(::std::stringify!($atom))
    };
    ($($inner:tt)+) => {
        $crate::Expr::List(::std::vec![$($crate::sexp!($inner)),+])
    };
}

#[cfg(test)]
mod tests;
