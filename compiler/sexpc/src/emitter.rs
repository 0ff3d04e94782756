//! Output Emitter
//!
//! Backends write generated code through an [`Emitter`] so that indentation
//! and line handling live in one place.

/// Trait for emitting generated code.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit indentation for the given nesting level.
    fn emit_indent(&mut self, level: usize);

    /// Emit one indented line, newline included.
    fn emit_line(&mut self, level: usize, text: &str) {
        self.emit_indent(level);
        self.emit(text);
        self.emit_newline();
    }
}

/// String-based emitter.
///
/// Builds the output incrementally; `indent_width` spaces per level.
#[derive(Debug)]
pub struct StringEmitter {
    buffer: String,
    indent_width: usize,
}

impl StringEmitter {
    pub fn new(indent_width: usize) -> Self {
        StringEmitter {
            buffer: String::new(),
            indent_width,
        }
    }

    /// Get the generated output.
    pub fn output(self) -> String {
        self.buffer
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, level: usize) {
        let spaces = level * self.indent_width;
        for _ in 0..spaces {
            self.buffer.push(' ');
        }
    }
}
