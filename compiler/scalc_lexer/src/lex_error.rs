//! Lexer error type.

use thiserror::Error;

/// An atom that matches none of the token rules.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("unknown token '{atom}'")]
pub struct LexError {
    /// The offending atom, verbatim.
    pub atom: String,
    /// Zero-based index of the atom among all atoms of the source.
    pub position: usize,
}

#[cold]
pub(crate) fn unknown_token(atom: &str, position: usize) -> LexError {
    LexError {
        atom: atom.to_string(),
        position,
    }
}
