//! Lexer for scalc.
//!
//! The source is split on runs of whitespace into atoms, and each atom is
//! classified on its own. Classification is whole-atom only: an atom is a
//! token when a single token rule spans all of it, otherwise lexing fails.
//! `SUM*` is never read as `SUM` followed by stray text.

mod lex_error;

pub use lex_error::LexError;

use logos::Logos;
use scalc_ir::{Token, TokenKind};
use tracing::debug;

/// Token rules for a single atom (no whitespace ever reaches logos).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum RawToken {
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[regex(r"[A-Z][A-Z_]*")]
    FuncName,
    // `/` is accepted so sources can live in subdirectories.
    #[regex(r"[a-z][a-z0-9_./]*")]
    FileName,
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::LBracket => TokenKind::FuncCallStart,
            RawToken::RBracket => TokenKind::FuncCallEnd,
            RawToken::FuncName => TokenKind::FuncName,
            RawToken::FileName => TokenKind::FileName,
        }
    }
}

/// Tokenize a program, failing on the first atom that matches no rule.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = source
        .split_whitespace()
        .enumerate()
        .map(|(position, atom)| {
            classify(atom)
                .map(|kind| Token::new(kind, atom))
                .ok_or_else(|| lex_error::unknown_token(atom, position))
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Classify one atom, or `None` if no single rule covers it entirely.
pub fn classify(atom: &str) -> Option<TokenKind> {
    let mut lexer = RawToken::lexer(atom);
    let raw = lexer.next()?.ok()?;
    let whole_atom = lexer.span() == (0..atom.len());
    if whole_atom && lexer.next().is_none() {
        Some(raw.into())
    } else {
        None
    }
}
