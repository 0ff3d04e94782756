//! Expression lowering.
//!
//! Every expression form is recognised by matching against a pattern; the
//! first form that matches wins:
//!
//! - `true`, `false`: booleans
//! - integers
//! - any other atom: a variable
//! - `(+ a b)`, `(- a b)`, `(* a b)`, `(< a b)`, `(== a b)`

use std::fmt;

use sexp_ir::{sexp, Expr};
use sexp_match::{attempt_match, match_expr, DEFAULT_WILDCARD};

use crate::error::CompileError;

/// A lowered expression, ready for a backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Var(String),
    Binary {
        op: BinOp,
        lhs: Box<Value>,
        rhs: Box<Value>,
    },
}

impl Value {
    pub fn binary(op: BinOp, lhs: Value, rhs: Value) -> Self {
        Value::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Less,
    Equal,
}

impl BinOp {
    pub const ALL: [BinOp; 5] = [
        BinOp::Add,
        BinOp::Sub,
        BinOp::Mul,
        BinOp::Less,
        BinOp::Equal,
    ];

    /// Operator atom, shared by the source form and the C output.
    pub const fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Less => "<",
            BinOp::Equal => "==",
        }
    }

    /// `(<symbol> ? ?)`
    fn pattern(self) -> Expr {
        Expr::list([
            Expr::atom(self.symbol()),
            Expr::atom(DEFAULT_WILDCARD),
            Expr::atom(DEFAULT_WILDCARD),
        ])
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Lower one source expression.
///
/// # Errors
///
/// [`CompileError::MalformedExpression`] when no form matches, e.g. for a
/// list with an unknown operator or the wrong number of operands.
pub fn lower_expression(expr: &Expr) -> Result<Value, CompileError> {
    if attempt_match(expr, &sexp!(true), || ()) {
        return Ok(Value::Bool(true));
    }
    if attempt_match(expr, &sexp!(false), || ()) {
        return Ok(Value::Bool(false));
    }
    if let Some(value) = match_expr(expr, &sexp!(?), |value: i64| value) {
        return Ok(Value::Int(value));
    }
    if let Some(name) = match_expr(expr, &sexp!(?), |name: &str| name.to_owned()) {
        return Ok(Value::Var(name));
    }

    for op in BinOp::ALL {
        let lowered = match_expr(
            expr,
            &op.pattern(),
            |lhs: &Expr, rhs: &Expr| -> Result<Value, CompileError> {
                Ok(Value::binary(
                    op,
                    lower_expression(lhs)?,
                    lower_expression(rhs)?,
                ))
            },
        );
        if let Some(result) = lowered {
            return result;
        }
    }

    Err(CompileError::MalformedExpression {
        expression: expr.to_string(),
    })
}
