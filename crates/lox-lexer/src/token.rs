use std::fmt;

/// Token classification for Lox source.
///
/// A closed set: single-character punctuation, one/two-character
/// operators, literals, reserved keywords, and the terminal
/// end-of-input marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    // End of input
    Eof,
}

/// A token produced by the Lox scanner.
///
/// `lexeme` is the exact source substring that produced the token
/// (surrounding quotes included for strings, empty for `Eof`) and
/// `line` is the 1-based line its first character appears on.
#[derive(Debug, Clone, PartialEq, Eq)]
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
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "{:?}", self.kind)
        } else {
            write!(f, "{:?} {}", self.kind, self.lexeme)
        }
    }
}

/// The fixed keyword table: an immutable mapping from UPPERCASE
/// keyword text to token kind. Callers case-fold the lexeme before
/// lookup, which is what makes keyword matching case-insensitive.
pub fn keyword(upper: &str) -> Option<TokenKind> {
    match upper {
        "AND" => Some(TokenKind::And),
        "CLASS" => Some(TokenKind::Class),
        "ELSE" => Some(TokenKind::Else),
        "FALSE" => Some(TokenKind::False),
        "FUN" => Some(TokenKind::Fun),
        "FOR" => Some(TokenKind::For),
        "IF" => Some(TokenKind::If),
        "NIL" => Some(TokenKind::Nil),
        "OR" => Some(TokenKind::Or),
        "PRINT" => Some(TokenKind::Print),
        "RETURN" => Some(TokenKind::Return),
        "SUPER" => Some(TokenKind::Super),
        "THIS" => Some(TokenKind::This),
        "TRUE" => Some(TokenKind::True),
        "VAR" => Some(TokenKind::Var),
        "WHILE" => Some(TokenKind::While),
        _ => None,
    }
}
