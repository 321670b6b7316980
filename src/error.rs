//! Error types for each stage of the pipeline.
//!
//! Every stage reports at most one error and stops at it. [`Error`] wraps the
//! three stage errors so a caller can tell where a program was rejected.

use std::io;

use thiserror::Error;

/// Grammar violation found by the parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("syntax error: expected {expected} (found '{found}') at line {line}")]
pub struct SyntaxError {
    /// The construct the parser was looking for.
    pub expected: String,
    /// Lexeme of the offending token. Empty at end of input.
    pub found: String,
    /// 1-based source line of the offending token.
    pub line: usize,
}

/// Declare-before-use violation found by the semantic analyzer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("semantic error: variable '{name}' is undeclared")]
    UndeclaredVariable { name: String },
}

/// Failure while executing a program.
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("runtime error: variable '{name}' used before assignment")]
    UndefinedVariable { name: String },

    #[error("runtime error: failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// The single error a run of the pipeline can end with.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Semantic(#[from] SemanticError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Name of the stage that rejected the program, used for logging.
    pub fn stage(&self) -> &'static str {
        match self {
            Error::Syntax(_) => "parser",
            Error::Semantic(_) => "analyzer",
            Error::Runtime(_) => "interpreter",
        }
    }
}
