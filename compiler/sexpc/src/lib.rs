//! Sexpc - a toy statement compiler built on structural pattern matching.
//!
//! Programs are lists of S-expression statements. Statement and expression
//! forms are recognised with `sexp_match` patterns rather than by inspecting
//! the trees by hand, and compiled to C-like source or to stack-machine
//! assembly.
//!
//! ```
//! use sexp_ir::sexp;
//! use sexpc::{compile, CompileOptions};
//!
//! let program = [sexp!(assign x (+ 1 2)), sexp!(return x)];
//! let output = compile(&program, &CompileOptions::default()).unwrap();
//! assert_eq!(output, "x = 1 + 2;\nreturn x;\n");
//! ```

mod backend;
mod config;
mod emitter;
mod error;
mod expression;
mod frame;
pub mod samples;
mod statement;

use std::sync::Once;

use sexp_ir::Expr;

pub use backend::{AsmBackend, Backend, CBackend};
pub use config::{parse_options, CompileOptions, Invocation, OptionsError, Target};
pub use emitter::{Emitter, StringEmitter};
pub use error::CompileError;
pub use expression::{lower_expression, BinOp, Value};
pub use frame::{Frame, Label, LoopLabels};
pub use statement::Compiler;

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence. Without it, `verbose` enables debug output
/// for this crate; otherwise nothing is installed. Safe to call repeatedly.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new("sexpc=debug")
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    });
}

/// Compile a program for the target selected in `options`.
///
/// # Errors
///
/// The first [`CompileError`] met; no partial output is returned.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(output = %options.target, statements = program.len())
)]
pub fn compile(program: &[Expr], options: &CompileOptions) -> Result<String, CompileError> {
    match options.target {
        Target::C => compile_with(CBackend::new(options.indent_width), program),
        Target::Asm => compile_with(AsmBackend::new(options.indent_width), program),
    }
}

fn compile_with<B: Backend>(backend: B, program: &[Expr]) -> Result<String, CompileError> {
    let mut compiler = Compiler::new(backend);
    compiler.compile_block(program)?;
    Ok(compiler.finish())
}
