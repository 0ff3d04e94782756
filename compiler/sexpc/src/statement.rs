//! Statement compilation.
//!
//! Each statement is tried against the catalog below, in order, and the
//! first form whose pattern matches is compiled:
//!
//! | form                  | captures                               |
//! |-----------------------|----------------------------------------|
//! | `(while ? ?)`         | condition, body statements             |
//! | `(if ? ?)`            | condition, then statements             |
//! | `(if ? ? ?)`          | condition, then and else statements    |
//! | `break`               |                                        |
//! | `(assign ? ?)`        | variable name, value                   |
//! | `(return ?)`          | value                                  |
//!
//! Bodies must be lists of statements, and an assignment target must be an
//! atom; anything else falls through to [`CompileError::MalformedStatement`].

use sexp_ir::{sexp, Expr};
use sexp_match::{attempt_match, match_expr};

use crate::backend::Backend;
use crate::error::CompileError;
use crate::expression::lower_expression;
use crate::frame::Frame;

pub struct Compiler<B> {
    backend: B,
    frame: Frame,
}

impl<B: Backend> Compiler<B> {
    pub fn new(backend: B) -> Self {
        Compiler {
            backend,
            frame: Frame::new(),
        }
    }

    /// Compile statements in order, stopping at the first error.
    pub fn compile_block(&mut self, statements: &[Expr]) -> Result<(), CompileError> {
        statements
            .iter()
            .try_for_each(|statement| self.compile_statement(statement))
    }

    #[tracing::instrument(level = "trace", skip_all, fields(statement = %statement))]
    pub fn compile_statement(&mut self, statement: &Expr) -> Result<(), CompileError> {
        if let Some(result) = match_expr(
            statement,
            &sexp!(while ? ?),
            |condition: &Expr, body: &[Expr]| self.compile_while(condition, body),
        ) {
            return result;
        }
        if let Some(result) = match_expr(
            statement,
            &sexp!(if ? ?),
            |condition: &Expr, then: &[Expr]| self.compile_if(condition, then, None),
        ) {
            return result;
        }
        if let Some(result) = match_expr(
            statement,
            &sexp!(if ? ? ?),
            |condition: &Expr, then: &[Expr], otherwise: &[Expr]| {
                self.compile_if(condition, then, Some(otherwise))
            },
        ) {
            return result;
        }
        if attempt_match(statement, &sexp!(break), || ()) {
            return self.compile_break();
        }
        if let Some(result) = match_expr(
            statement,
            &sexp!(assign ? ?),
            |name: &str, value: &Expr| self.compile_assign(name, value),
        ) {
            return result;
        }
        if let Some(result) = match_expr(statement, &sexp!(return ?), |value: &Expr| {
            self.compile_return(value)
        }) {
            return result;
        }

        Err(CompileError::MalformedStatement {
            statement: statement.to_string(),
        })
    }

    /// Consume the compiler and return the generated program.
    pub fn finish(self) -> String {
        self.backend.finish()
    }

    fn compile_while(&mut self, condition: &Expr, body: &[Expr]) -> Result<(), CompileError> {
        tracing::debug!(form = "while", depth = self.frame.loop_depth(), "compiling statement");
        let condition = lower_expression(condition)?;
        let labels = self.frame.enter_loop();
        self.backend.begin_while(&condition, labels)?;
        self.compile_block(body)?;
        self.backend.end_while(labels);
        self.frame.exit_loop();
        Ok(())
    }

    fn compile_if(
        &mut self,
        condition: &Expr,
        then: &[Expr],
        otherwise: Option<&[Expr]>,
    ) -> Result<(), CompileError> {
        tracing::debug!(form = "if", has_else = otherwise.is_some(), "compiling statement");
        let condition = lower_expression(condition)?;
        match otherwise {
            None => {
                let end = self.frame.fresh_label();
                self.backend.begin_if(&condition, end)?;
                self.compile_block(then)?;
                self.backend.end_if(end);
            }
            Some(otherwise) => {
                let else_label = self.frame.fresh_label();
                let end = self.frame.fresh_label();
                self.backend.begin_if(&condition, else_label)?;
                self.compile_block(then)?;
                self.backend.begin_else(else_label, end);
                self.compile_block(otherwise)?;
                self.backend.end_if(end);
            }
        }
        Ok(())
    }

    fn compile_break(&mut self) -> Result<(), CompileError> {
        tracing::debug!(form = "break", "compiling statement");
        let labels = self
            .frame
            .innermost_loop()
            .ok_or(CompileError::BreakOutsideLoop)?;
        self.backend.emit_break(labels);
        Ok(())
    }

    fn compile_assign(&mut self, name: &str, value: &Expr) -> Result<(), CompileError> {
        tracing::debug!(form = "assign", name, "compiling statement");
        let value = lower_expression(value)?;
        self.backend.emit_assign(name, &value)
    }

    fn compile_return(&mut self, value: &Expr) -> Result<(), CompileError> {
        tracing::debug!(form = "return", "compiling statement");
        let value = lower_expression(value)?;
        self.backend.emit_return(&value)
    }
}
