use phf::phf_map;

pub static KEYWORDS: phf::Map<&str, TokenKind> = phf_map! {
    "inc" => TokenKind::Inc,
    "print" => TokenKind::Print,
};

pub static ONE_SYMBOL_TOKENS: phf::Map<char, TokenKind> = phf_map! {
    '=' => TokenKind::Assign,
    ';' => TokenKind::SemiColon,
    '(' => TokenKind::LeftParen,
    ')' => TokenKind::RightParen,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Inc,
    Print,
    Assign,
    SemiColon,
    LeftParen,
    RightParen,
    Num,
    Ident,
    Eof,
    Unknown,
}

/// A lexical token. `lexeme` is the exact source text (empty for `Eof`) and
/// `line` is 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
