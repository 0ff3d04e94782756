//! Command-line options for the `sexpc` driver.

use std::fmt;
use std::str::FromStr;

/// Output language.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Target {
    /// C-like source text.
    #[default]
    C,
    /// x86-64 flavoured stack-machine assembly.
    Asm,
}

impl Target {
    pub const fn name(self) -> &'static str {
        match self {
            Target::C => "c",
            Target::Asm => "asm",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" => Ok(Target::C),
            "asm" => Ok(Target::Asm),
            other => Err(OptionsError::UnknownTarget(other.to_owned())),
        }
    }
}

/// Configuration for one compilation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    pub target: Target,
    /// Spaces per nesting level in the output.
    pub indent_width: usize,
    /// Enable debug logging when `RUST_LOG` is not set.
    pub verbose: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            target: Target::C,
            indent_width: 4,
            verbose: false,
        }
    }
}

/// A command line the driver cannot act on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("unknown target `{0}` (expected `c` or `asm`)")]
    UnknownTarget(String),

    #[error("invalid indent width `{0}`")]
    InvalidIndent(String),

    #[error("unknown option `{0}`")]
    UnknownFlag(String),

    #[error("unexpected argument `{0}`, only one program can be compiled")]
    ExtraArgument(String),
}

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    pub options: CompileOptions,
    /// Name of the built-in program to compile, if given.
    pub program: Option<String>,
    pub help: bool,
}

/// Parse driver arguments, without the executable name.
///
/// Accepts `--target=c|asm`, `--indent=N`, `-v`/`--verbose`, `-h`/`--help`
/// and at most one positional program name.
///
/// # Errors
///
/// Returns an [`OptionsError`] for unknown flags, bad values and a second
/// positional argument.
pub fn parse_options(args: &[String]) -> Result<Invocation, OptionsError> {
    let mut invocation = Invocation::default();

    for arg in args {
        if let Some(target) = arg.strip_prefix("--target=") {
            invocation.options.target = target.parse()?;
        } else if let Some(width) = arg.strip_prefix("--indent=") {
            invocation.options.indent_width = width
                .parse()
                .map_err(|_| OptionsError::InvalidIndent(width.to_owned()))?;
        } else if arg == "-v" || arg == "--verbose" {
            invocation.options.verbose = true;
        } else if arg == "-h" || arg == "--help" {
            invocation.help = true;
        } else if arg.starts_with('-') {
            return Err(OptionsError::UnknownFlag(arg.clone()));
        } else if invocation.program.is_some() {
            return Err(OptionsError::ExtraArgument(arg.clone()));
        } else {
            invocation.program = Some(arg.clone());
        }
    }

    Ok(invocation)
}
