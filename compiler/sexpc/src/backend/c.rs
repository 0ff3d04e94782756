//! C-like source output.

use crate::emitter::{Emitter, StringEmitter};
use crate::error::CompileError;
use crate::expression::Value;
use crate::frame::{Label, LoopLabels};

use super::Backend;

/// Emits block-structured C statements. Labels are not needed.
#[derive(Debug)]
pub struct CBackend {
    out: StringEmitter,
    depth: usize,
}

impl CBackend {
    pub fn new(indent_width: usize) -> Self {
        CBackend {
            out: StringEmitter::new(indent_width),
            depth: 0,
        }
    }

    fn line(&mut self, text: &str) {
        self.out.emit_line(self.depth, text);
    }

    fn open(&mut self, text: &str) {
        self.line(text);
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }
}

/// Render a value as a C expression. Nested operations are parenthesised;
/// the outermost one is not.
pub(crate) fn c_expression(value: &Value) -> String {
    match value {
        Value::Int(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Var(name) => name.clone(),
        Value::Binary { op, lhs, rhs } => {
            format!("{} {op} {}", c_operand(lhs), c_operand(rhs))
        }
    }
}

fn c_operand(value: &Value) -> String {
    match value {
        Value::Binary { .. } => format!("({})", c_expression(value)),
        _ => c_expression(value),
    }
}

impl Backend for CBackend {
    fn begin_while(&mut self, condition: &Value, _: LoopLabels) -> Result<(), CompileError> {
        self.open(&format!("while ({}) {{", c_expression(condition)));
        Ok(())
    }

    fn end_while(&mut self, _: LoopLabels) {
        self.close();
    }

    fn begin_if(&mut self, condition: &Value, _: Label) -> Result<(), CompileError> {
        self.open(&format!("if ({}) {{", c_expression(condition)));
        Ok(())
    }

    fn begin_else(&mut self, _: Label, _: Label) {
        self.depth = self.depth.saturating_sub(1);
        self.open("} else {");
    }

    fn end_if(&mut self, _: Label) {
        self.close();
    }

    fn emit_break(&mut self, _: LoopLabels) {
        self.line("break;");
    }

    fn emit_assign(&mut self, name: &str, value: &Value) -> Result<(), CompileError> {
        self.line(&format!("{name} = {};", c_expression(value)));
        Ok(())
    }

    fn emit_return(&mut self, value: &Value) -> Result<(), CompileError> {
        self.line(&format!("return {};", c_expression(value)));
        Ok(())
    }

    fn finish(self) -> String {
        self.out.output()
    }
}

#[cfg(test)]
mod tests;
