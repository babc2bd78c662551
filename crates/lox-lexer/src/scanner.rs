use crate::token::{keyword, Token, TokenKind};
use crate::LexError;

/// Result of one scan pass: the full token sequence plus every
/// diagnostic encountered along the way.
///
/// `tokens` is never empty; its last element is always a single `Eof`
/// token with an empty lexeme, carrying the final line count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<LexError>,
}

/// Lox source scanner.
///
/// Tokenizes a source string in one left-to-right pass with at most
/// two characters of lookahead and no backtracking. Lexical errors do
/// not abort the pass: each is recorded as a diagnostic and scanning
/// resynchronizes at the next character, so every error in the input
/// is surfaced in a single scan.
///
/// All cursor state is per-invocation; nothing is shared across calls,
/// so independent sources may be scanned concurrently.
pub struct Scanner {
    chars: Vec<char>,
    start: usize,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
    diagnostics: Vec<LexError>,
}

impl Scanner {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// Never fails: malformed lexemes surface as diagnostics in the
    /// returned output and scanning continues past them.
    pub fn scan(source: &str) -> ScanOutput {
        let mut scanner = Scanner::new(source);
        scanner.scan_tokens();
        ScanOutput {
            tokens: scanner.tokens,
            diagnostics: scanner.diagnostics,
        }
    }

    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
        self.tokens.push(Token::new(TokenKind::Eof, "", self.line));
    }

    /// Scan the next lexeme, starting at `self.start`.
    fn scan_token(&mut self) {
        let ch = self.advance();
        match ch {
            '(' => self.emit(TokenKind::LeftParen),
            ')' => self.emit(TokenKind::RightParen),
            '{' => self.emit(TokenKind::LeftBrace),
            '}' => self.emit(TokenKind::RightBrace),
            ',' => self.emit(TokenKind::Comma),
            '.' => self.emit(TokenKind::Dot),
            '-' => self.emit(TokenKind::Minus),
            '+' => self.emit(TokenKind::Plus),
            ';' => self.emit(TokenKind::Semicolon),
            '*' => self.emit(TokenKind::Star),

            '!' => {
                let kind = if self.match_next('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.emit(kind);
            }
            '=' => {
                let kind = if self.match_next('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.emit(kind);
            }
            '<' => {
                let kind = if self.match_next('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.emit(kind);
            }
            '>' => {
                let kind = if self.match_next('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.emit(kind);
            }

            '/' => {
                if self.match_next('/') {
                    // Line comment: discard through end of line.
                    while !self.is_at_end() && self.peek() != '\n' {
                        self.advance();
                    }
                } else {
                    self.emit(TokenKind::Slash);
                }
            }

            '"' => self.scan_string(),

            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_ascii_alphabetic() => self.scan_identifier(),

            _ => self
                .diagnostics
                .push(LexError::UnexpectedCharacter { line: self.line }),
        }
    }

    // --- Scanners ---

    /// Scan a string literal. The opening quote is already consumed;
    /// the emitted lexeme keeps both quotes. Strings may span lines.
    fn scan_string(&mut self) {
        let start_line = self.line;

        while !self.is_at_end() && self.peek() != '"' {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            // Reported exactly once, at the line the string opened on.
            // The partial lexeme (opening quote, no closing quote) is
            // still emitted so downstream consumers see a best-effort
            // token.
            self.diagnostics
                .push(LexError::UnterminatedString { line: start_line });
            self.tokens
                .push(Token::new(TokenKind::String, self.lexeme(), start_line));
            return;
        }

        self.advance(); // closing quote
        self.tokens
            .push(Token::new(TokenKind::String, self.lexeme(), start_line));
    }

    /// Scan a number literal: a digit run with an optional fraction.
    /// A trailing `.` with no digit after it is not consumed, so `1.`
    /// lexes as a number followed by a dot.
    fn scan_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // the '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        self.emit(TokenKind::Number);
    }

    /// Scan an identifier or keyword: a maximal run of ASCII letters.
    /// The lexeme is case-folded before the keyword lookup, so keyword
    /// matching is case-insensitive.
    fn scan_identifier(&mut self) {
        while self.peek().is_ascii_alphabetic() {
            self.advance();
        }

        let lexeme = self.lexeme();
        let kind = keyword(&lexeme.to_ascii_uppercase()).unwrap_or(TokenKind::Identifier);
        self.tokens.push(Token::new(kind, lexeme, self.line));
    }

    // --- Helpers ---

    /// The source substring for the lexeme in progress.
    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn emit(&mut self, kind: TokenKind) {
        self.tokens.push(Token::new(kind, self.lexeme(), self.line));
    }

    /// Consume the next character if it equals `expected`.
    fn match_next(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}
