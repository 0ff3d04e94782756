//! Compilation errors.
//!
//! Any error aborts the whole compilation; no partial output is returned.

/// Reason a program could not be compiled.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// No statement form in the catalog matched.
    #[error("malformed statement: {statement}")]
    MalformedStatement { statement: String },

    /// No expression form in the catalog matched.
    #[error("malformed expression: {expression}")]
    MalformedExpression { expression: String },

    #[error("`break` outside of a loop")]
    BreakOutsideLoop,

    /// The assembly target reads a variable that has no stack slot yet.
    #[error("variable `{name}` is read before it is assigned")]
    UndefinedVariable { name: String },
}
