//! Token types for the scalc lexer.

use std::fmt;

/// Classification of a single atom.
///
/// The four kinds are mutually exclusive: `[` and `]` are literal
/// brackets, function names are upper-case (`[A-Z][A-Z_]*`) and file
/// names start with a lower-case letter (`[a-z][a-z0-9_./]*`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// `[`
    FuncCallStart,
    /// `]`
    FuncCallEnd,
    /// `SUM`, `INT`, `DIF`, ...
    FuncName,
    /// `a.txt`, `data/b.txt`, ...
    FileName,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::FuncCallStart => "'['",
            TokenKind::FuncCallEnd => "']'",
            TokenKind::FuncName => "function name",
            TokenKind::FileName => "file name",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified atom.
///
/// Compared and hashed by value; two tokens are equal when both the kind
/// and the raw text match.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub raw: String,
}

impl Token {
    pub fn new(kind: TokenKind, raw: impl Into<String>) -> Self {
        Token {
            kind,
            raw: raw.into(),
        }
    }

    /// Shorthand for a `[` token.
    pub fn call_start() -> Self {
        Token::new(TokenKind::FuncCallStart, "[")
    }

    /// Shorthand for a `]` token.
    pub fn call_end() -> Self {
        Token::new(TokenKind::FuncCallEnd, "]")
    }

    pub fn func_name(name: impl Into<String>) -> Self {
        Token::new(TokenKind::FuncName, name)
    }

    pub fn file_name(name: impl Into<String>) -> Self {
        Token::new(TokenKind::FileName, name)
    }
}

/// Displays the raw text, so joining tokens with spaces rebuilds the program.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
