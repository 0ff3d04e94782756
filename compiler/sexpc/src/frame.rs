//! Control-flow bookkeeping shared by every target.
//!
//! Hands out fresh labels and tracks the loops enclosing the statement being
//! compiled, so that `break` knows where to jump.

use std::fmt;

/// A jump target, unique within one compilation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Label(u32);

impl Label {
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".L{}", self.0)
    }
}

/// Labels of one enclosing loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoopLabels {
    /// Jumped to at the end of every iteration.
    pub header: Label,
    /// Jumped to when the condition fails or on `break`.
    pub exit: Label,
}

#[derive(Debug, Default)]
pub struct Frame {
    next_label: u32,
    loops: Vec<LoopLabels>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh_label(&mut self) -> Label {
        let label = Label(self.next_label);
        self.next_label += 1;
        label
    }

    /// Allocate labels for a new innermost loop and enter it.
    pub fn enter_loop(&mut self) -> LoopLabels {
        let labels = LoopLabels {
            header: self.fresh_label(),
            exit: self.fresh_label(),
        };
        self.loops.push(labels);
        labels
    }

    pub fn exit_loop(&mut self) {
        self.loops.pop();
    }

    /// The loop a `break` at this point leaves, if any.
    pub fn innermost_loop(&self) -> Option<LoopLabels> {
        self.loops.last().copied()
    }

    pub fn loop_depth(&self) -> usize {
        self.loops.len()
    }
}
