//! Token cursor for navigating the token stream.
//!
//! The compiler only ever moves forward: a subtree is built from one
//! contiguous span of tokens and nothing is re-read once consumed.

use scalc_ir::{Token, TokenKind};
use tracing::trace;

pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at `pos`.
    pub fn at(tokens: &'a [Token], pos: usize) -> Self {
        debug_assert!(
            pos <= tokens.len(),
            "cursor position {} out of bounds (max {})",
            pos,
            tokens.len()
        );
        Cursor { tokens, pos }
    }

    /// Index of the next unconsumed token.
    ///
    /// Equals the token count once the stream is exhausted.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The next unconsumed token, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Whether the next token has the given kind. Always false at end of input.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|token| token.kind == kind)
    }

    /// Consume the current token.
    pub fn advance(&mut self) {
        debug_assert!(!self.is_at_end(), "advance past end of token stream");
        if let Some(token) = self.current() {
            trace!(pos = self.pos, kind = %token.kind, raw = %token.raw, "advance");
        }
        self.pos += 1;
    }
}
