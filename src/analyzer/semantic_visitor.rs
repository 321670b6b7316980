use tracing::{debug, info};

use crate::error::SemanticError;
use crate::parser::{Expr, Identifier, IncrementCall, PrintStmt, Program, Stmt, VarDecl};

use super::symbol_table::SymbolTable;

/// Checks declare-before-use over a whole program. Names become visible to
/// the statements after their declaration, never to the declaration itself.
#[derive(Debug, Default)]
pub struct SemanticVisitor {
    symbol_table: SymbolTable,
}

impl SemanticVisitor {
    pub fn new() -> Self {
        Self {
            symbol_table: SymbolTable::new(),
        }
    }

    pub fn visit_program(&mut self, program: &Program) -> Result<SymbolTable, SemanticError> {
        info!("starting semantic analysis");

        for stmt in program.stmts.iter() {
            self.visit_stmt(stmt)?;
        }

        info!(
            declared = self.symbol_table.len(),
            "semantic analysis passed"
        );
        Ok(self.symbol_table.clone())
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<(), SemanticError> {
        match stmt {
            Stmt::VarDecl(decl) => {
                self.visit_var_decl(decl);
                Ok(())
            }
            Stmt::Print(print) => self.visit_print(print),
        }
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) {
        if !self.symbol_table.declare_var(&decl.name) {
            debug!(name = %decl.name, "redeclaration overwrites previous value");
        }
    }

    fn visit_print(&mut self, print: &PrintStmt) -> Result<(), SemanticError> {
        self.visit_expr(&print.expr)
    }

    fn visit_expr(&mut self, mut expr: &Expr) -> Result<(), SemanticError> {
        loop {
            match expr {
                Expr::Number(_) => return Ok(()),
                Expr::Ident(ident) => return self.visit_identifier(ident),
                Expr::Inc(IncrementCall { argument }) => expr = argument.as_ref(),
            }
        }
    }

    fn visit_identifier(&mut self, ident: &Identifier) -> Result<(), SemanticError> {
        if self.symbol_table.is_declared(&ident.name) {
            Ok(())
        } else {
            Err(SemanticError::UndeclaredVariable {
                name: ident.name.clone(),
            })
        }
    }
}
