//! Stack-machine assembly output (x86-64, Intel syntax).
//!
//! Every expression is evaluated into `rax`; binary operations park the
//! left operand on the machine stack while the right one is evaluated.
//! Variables live in 8-byte slots below `rbp`, allocated on first
//! assignment. Reading a variable that was never assigned is an error.

use rustc_hash::FxHashMap;

use crate::emitter::{Emitter, StringEmitter};
use crate::error::CompileError;
use crate::expression::{BinOp, Value};
use crate::frame::{Label, LoopLabels};

use super::Backend;

const WORD: i64 = 8;
const STACK_ALIGN: i64 = 16;

#[derive(Debug)]
pub struct AsmBackend {
    body: StringEmitter,
    indent_width: usize,
    /// Variable name to its offset below `rbp`.
    slots: FxHashMap<String, i64>,
    frame_size: i64,
}

impl AsmBackend {
    pub fn new(indent_width: usize) -> Self {
        AsmBackend {
            body: StringEmitter::new(indent_width),
            indent_width,
            slots: FxHashMap::default(),
            frame_size: 0,
        }
    }

    /// Offset of an assigned variable.
    pub fn slot(&self, name: &str) -> Option<i64> {
        self.slots.get(name).copied()
    }

    fn slot_or_allocate(&mut self, name: &str) -> i64 {
        if let Some(offset) = self.slot(name) {
            return offset;
        }
        self.frame_size += WORD;
        let offset = self.frame_size;
        tracing::trace!(name, offset, "allocated stack slot");
        self.slots.insert(name.to_owned(), offset);
        offset
    }

    fn instr(&mut self, text: &str) {
        self.body.emit_line(1, text);
    }

    fn label(&mut self, label: Label) {
        self.body.emit_line(0, &format!("{label}:"));
    }

    /// Emit code leaving `value` in `rax`.
    fn evaluate(&mut self, value: &Value) -> Result<(), CompileError> {
        match value {
            Value::Int(n) => self.instr(&format!("mov rax, {n}")),
            Value::Bool(b) => self.instr(&format!("mov rax, {}", i64::from(*b))),
            Value::Var(name) => {
                let offset = self
                    .slot(name)
                    .ok_or_else(|| CompileError::UndefinedVariable { name: name.clone() })?;
                self.instr(&format!("mov rax, [rbp-{offset}]"));
            }
            Value::Binary { op, lhs, rhs } => {
                self.evaluate(lhs)?;
                self.instr("push rax");
                self.evaluate(rhs)?;
                self.instr("mov rcx, rax");
                self.instr("pop rax");
                self.apply(*op);
            }
        }
        Ok(())
    }

    /// `rax = rax <op> rcx`
    fn apply(&mut self, op: BinOp) {
        match op {
            BinOp::Add => self.instr("add rax, rcx"),
            BinOp::Sub => self.instr("sub rax, rcx"),
            BinOp::Mul => self.instr("imul rax, rcx"),
            BinOp::Less | BinOp::Equal => {
                let set = if op == BinOp::Less { "setl al" } else { "sete al" };
                self.instr("cmp rax, rcx");
                self.instr(set);
                self.instr("movzx rax, al");
            }
        }
    }

    /// Jump to `target` when `condition` evaluates to zero.
    fn branch_unless(&mut self, condition: &Value, target: Label) -> Result<(), CompileError> {
        self.evaluate(condition)?;
        self.instr("cmp rax, 0");
        self.instr(&format!("je {target}"));
        Ok(())
    }
}

impl Backend for AsmBackend {
    fn begin_while(&mut self, condition: &Value, labels: LoopLabels) -> Result<(), CompileError> {
        self.label(labels.header);
        self.branch_unless(condition, labels.exit)
    }

    fn end_while(&mut self, labels: LoopLabels) {
        self.instr(&format!("jmp {}", labels.header));
        self.label(labels.exit);
    }

    fn begin_if(&mut self, condition: &Value, otherwise: Label) -> Result<(), CompileError> {
        self.branch_unless(condition, otherwise)
    }

    fn begin_else(&mut self, otherwise: Label, end: Label) {
        self.instr(&format!("jmp {end}"));
        self.label(otherwise);
    }

    fn end_if(&mut self, end: Label) {
        self.label(end);
    }

    fn emit_break(&mut self, labels: LoopLabels) {
        self.instr(&format!("jmp {}", labels.exit));
    }

    fn emit_assign(&mut self, name: &str, value: &Value) -> Result<(), CompileError> {
        // Evaluated first so that `(assign x x)` cannot read its own new slot.
        self.evaluate(value)?;
        let offset = self.slot_or_allocate(name);
        self.instr(&format!("mov [rbp-{offset}], rax"));
        Ok(())
    }

    fn emit_return(&mut self, value: &Value) -> Result<(), CompileError> {
        self.evaluate(value)?;
        self.instr("leave");
        self.instr("ret");
        Ok(())
    }

    fn finish(self) -> String {
        let mut program = StringEmitter::new(self.indent_width);
        program.emit_line(1, ".globl main");
        program.emit_line(0, "main:");
        program.emit_line(1, "push rbp");
        program.emit_line(1, "mov rbp, rsp");
        let reserved = (self.frame_size + STACK_ALIGN - 1) / STACK_ALIGN * STACK_ALIGN;
        if reserved > 0 {
            program.emit_line(1, &format!("sub rsp, {reserved}"));
        }
        program.emit(self.body.as_str());
        // Falling off the end returns 0.
        program.emit_line(1, "xor eax, eax");
        program.emit_line(1, "leave");
        program.emit_line(1, "ret");
        program.output()
    }
}
