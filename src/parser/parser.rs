use tracing::debug;

use crate::error::SyntaxError;
use crate::lexer::{Lexer, Token, TokenKind};

use super::{Expr, NumberLiteral, PrintStmt, Program, Stmt, VarDecl};

/// Recursive-descent parser with a single token of lookahead. Tokens are
/// pulled from the lexer one at a time and dropped once consumed.
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    current: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        Self { lexer, current }
    }

    pub fn parse(&mut self) -> Result<Program, SyntaxError> {
        self.parse_program()
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    fn error(&self, expected: &str) -> SyntaxError {
        SyntaxError {
            expected: expected.to_string(),
            found: self.current.lexeme.clone(),
            line: self.current.line,
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, SyntaxError> {
        if !self.check(kind) {
            return Err(self.error(expected));
        }
        Ok(self.advance())
    }

    /// program = stmt*
    fn parse_program(&mut self) -> Result<Program, SyntaxError> {
        let mut stmts = vec![];

        while !self.current.is_eof() {
            stmts.push(self.parse_stmt()?);
        }

        debug!(statements = stmts.len(), "parsed program");
        Ok(Program { stmts })
    }

    /// stmt = ident "=" num ";"
    ///      | "print" "(" expr ")" ";"
    fn parse_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        match self.current.kind {
            TokenKind::Ident => self.parse_var_decl().map(Stmt::VarDecl),
            TokenKind::Print => self.parse_print().map(Stmt::Print),
            _ => Err(self.error("statement")),
        }
    }

    fn parse_var_decl(&mut self) -> Result<VarDecl, SyntaxError> {
        let name = self.expect(TokenKind::Ident, "identifier")?.lexeme;
        self.expect(TokenKind::Assign, "'='")?;
        let init = self.parse_number()?;
        self.expect(TokenKind::SemiColon, "';'")?;
        Ok(VarDecl { name, init })
    }

    fn parse_print(&mut self) -> Result<PrintStmt, SyntaxError> {
        self.expect(TokenKind::Print, "'print'")?;
        self.expect(TokenKind::LeftParen, "'('")?;
        let expr = self.parse_expr()?;
        self.expect(TokenKind::RightParen, "')'")?;
        self.expect(TokenKind::SemiColon, "';'")?;
        Ok(PrintStmt { expr })
    }

    /// expr = num | ident | "inc" "(" expr ")"
    ///
    /// The `inc(` prefixes are counted rather than recursed into, so nesting
    /// depth does not grow the call stack.
    fn parse_expr(&mut self) -> Result<Expr, SyntaxError> {
        let mut depth = 0;
        while self.check(TokenKind::Inc) {
            self.advance();
            self.expect(TokenKind::LeftParen, "'('")?;
            depth += 1;
        }

        let mut expr = match self.current.kind {
            TokenKind::Num => Expr::Number(self.parse_number()?),
            TokenKind::Ident => Expr::ident(self.advance().lexeme),
            _ => return Err(self.error("expression")),
        };

        for _ in 0..depth {
            self.expect(TokenKind::RightParen, "')'")?;
            expr = Expr::inc(expr);
        }

        Ok(expr)
    }

    fn parse_number(&mut self) -> Result<NumberLiteral, SyntaxError> {
        let token = self.expect(TokenKind::Num, "number")?;
        match token.lexeme.parse() {
            Ok(value) => Ok(NumberLiteral { value }),
            Err(_) => Err(SyntaxError {
                expected: "integer literal within 64-bit range".to_string(),
                found: token.lexeme,
                line: token.line,
            }),
        }
    }
}
