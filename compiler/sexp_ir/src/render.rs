//! Parenthesized text form of an expression.
//!
//! Lists print as `(a b c)` with single spaces, atoms print their text
//! verbatim and integers print in decimal. The output is for diagnostics
//! only; nothing reads it back.

use std::fmt::{self, Write};

use crate::Expr;

/// Render `expr` to its parenthesized text form.
pub fn render(expr: &Expr) -> String {
    expr.to_string()
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Atom(text) => f.write_str(text),
            Expr::Int(value) => write!(f, "{value}"),
            Expr::List(items) => {
                f.write_char('(')?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_char(' ')?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_char(')')
            }
        }
    }
}
