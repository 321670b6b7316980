use std::io::Write;

use tracing::{debug, info};

use crate::error::RuntimeError;
use crate::parser::{Expr, IncrementCall, PrintStmt, Program, Stmt, VarDecl};

use super::memory::Memory;

/// Tree-walking interpreter. Each `print` writes one `Output: <value>` line
/// to `out`.
#[derive(Debug)]
pub struct Interpreter<W: Write> {
    memory: Memory,
    out: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Self {
            memory: Memory::new(),
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Runs every statement in order, stopping at the first failure. Lines
    /// written before the failure stay written.
    pub fn interpret(&mut self, program: &Program) -> Result<(), RuntimeError> {
        info!("starting execution");

        for stmt in program.stmts.iter() {
            self.exec_stmt(stmt)?;
        }
        self.out.flush()?;

        info!("execution finished");
        Ok(())
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::VarDecl(decl) => {
                self.exec_var_decl(decl);
                Ok(())
            }
            Stmt::Print(print) => self.exec_print(print),
        }
    }

    fn exec_var_decl(&mut self, VarDecl { name, init }: &VarDecl) {
        debug!(%name, value = init.value, "store");
        self.memory.store(name, init.value);
    }

    fn exec_print(&mut self, PrintStmt { expr }: &PrintStmt) -> Result<(), RuntimeError> {
        let value = self.evaluate(expr)?;
        let line = format!("Output: {}\n", value);
        self.out.write_all(line.as_bytes())?;
        Ok(())
    }

    /// `inc` adds one per level and wraps on overflow.
    pub fn evaluate(&self, mut expr: &Expr) -> Result<i64, RuntimeError> {
        let mut increments: i64 = 0;
        loop {
            match expr {
                Expr::Number(num) => return Ok(num.value.wrapping_add(increments)),
                Expr::Ident(ident) => {
                    let value = self.memory.load(&ident.name).ok_or_else(|| {
                        RuntimeError::UndefinedVariable {
                            name: ident.name.clone(),
                        }
                    })?;
                    return Ok(value.wrapping_add(increments));
                }
                Expr::Inc(IncrementCall { argument }) => {
                    increments = increments.wrapping_add(1);
                    expr = argument.as_ref();
                }
            }
        }
    }
}
