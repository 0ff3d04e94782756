//! Code generation targets.
//!
//! The statement compiler drives a [`Backend`] with lowered [`Value`]s and
//! the labels it allocated; a backend only decides what text to produce.
//! Targets without jumps ignore the labels.

mod asm;
mod c;

pub use asm::AsmBackend;
pub use c::CBackend;

use crate::error::CompileError;
use crate::expression::Value;
use crate::frame::{Label, LoopLabels};

pub trait Backend {
    /// Open a loop that runs while `condition` holds.
    fn begin_while(&mut self, condition: &Value, labels: LoopLabels) -> Result<(), CompileError>;

    fn end_while(&mut self, labels: LoopLabels);

    /// Open a conditional. `otherwise` is where control goes when
    /// `condition` is false: the else branch, or the end of the statement.
    fn begin_if(&mut self, condition: &Value, otherwise: Label) -> Result<(), CompileError>;

    /// Close the then branch and open the else branch.
    fn begin_else(&mut self, otherwise: Label, end: Label);

    fn end_if(&mut self, end: Label);

    fn emit_break(&mut self, labels: LoopLabels);

    fn emit_assign(&mut self, name: &str, value: &Value) -> Result<(), CompileError>;

    fn emit_return(&mut self, value: &Value) -> Result<(), CompileError>;

    /// Consume the backend and return the generated program.
    fn finish(self) -> String;
}
