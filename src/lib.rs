pub mod analyzer;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;

use std::io::Write;

use tracing::info;

use analyzer::SemanticVisitor;
use error::{Error, SyntaxError};
use interpreter::Interpreter;
use lexer::Lexer;
use parser::{Parser, Program};

#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Run semantic analysis before execution. When disabled the
    /// interpreter's own undefined-variable check is the only guard.
    pub check: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { check: true }
    }
}

pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    info!("starting parse");
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

/// Analyzes then executes an already parsed program, writing output lines to
/// `out`.
pub fn execute<W: Write>(program: &Program, out: W, options: &RunOptions) -> Result<(), Error> {
    if options.check {
        let mut visitor = SemanticVisitor::new();
        visitor.visit_program(program)?;
    }

    let mut interpreter = Interpreter::new(out);
    interpreter.interpret(program)?;
    Ok(())
}

/// Runs one program through every stage with fresh state.
pub fn run<W: Write>(source: &str, out: W, options: &RunOptions) -> Result<(), Error> {
    let program = parse(source)?;
    execute(&program, out, options)
}
