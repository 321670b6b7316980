use tracing::trace;

use super::{
    token::{KEYWORDS, ONE_SYMBOL_TOKENS},
    Token, TokenKind,
};

/// Pull-based scanner. Each call to [`Lexer::next_token`] produces one token;
/// once the input is exhausted every further call returns `Eof`.
#[derive(Debug)]
pub struct Lexer {
    chars: Vec<char>,
    index: usize,
    line: usize,
    finished: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            index: 0,
            line: 1,
            finished: false,
        }
    }

    /// Scans the whole source, `Eof` included.
    pub fn tokenize(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    fn new_token(&mut self, kind: TokenKind, s: String) -> Token {
        self.index += s.chars().count();
        let token = Token::new(kind, s, self.line);
        trace!(kind = ?token.kind, lexeme = %token.lexeme, line = token.line, "token");
        token
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.chars.get(self.index) {
            match c {
                ' ' | '\t' | '\r' => self.index += 1,
                '\n' => {
                    self.line += 1;
                    self.index += 1;
                }
                _ => break,
            }
        }
    }

    fn parse_number(&mut self) -> Token {
        let s: String = self.chars[self.index..]
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        self.new_token(TokenKind::Num, s)
    }

    fn parse_identifier(&mut self) -> Token {
        let s: String = self.chars[self.index..]
            .iter()
            .take_while(|&&c| c.is_ascii_alphanumeric() || c == '_')
            .collect();

        match KEYWORDS.get(s.as_str()) {
            Some(kind) => self.new_token(*kind, s),
            None => self.new_token(TokenKind::Ident, s),
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(&c) = self.chars.get(self.index) else {
            return Token::new(TokenKind::Eof, "", self.line);
        };

        if c.is_ascii_digit() {
            self.parse_number()
        } else if c.is_ascii_alphabetic() {
            self.parse_identifier()
        } else if let Some(kind) = ONE_SYMBOL_TOKENS.get(&c) {
            self.new_token(*kind, c.to_string())
        } else {
            self.new_token(TokenKind::Unknown, c.to_string())
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token up to and including the first `Eof`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}
