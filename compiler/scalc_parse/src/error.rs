//! Compile errors.
//!
//! Every grammar or semantic violation is reported here; the compiler
//! never returns a partial tree and nothing is deferred to evaluation.

use scalc_ir::Token;
use thiserror::Error;

/// A compile error and the token index where it was detected.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct CompileError {
    pub kind: CompileErrorKind,
    /// Index into the token sequence. Equal to the token count for
    /// end-of-input errors.
    pub position: usize,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum CompileErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// A `]` or a function name where an expression must start.
    #[error("unexpected token '{found}', expected '[' or a file name")]
    UnexpectedToken { found: String },
    #[error("expected function name after '[', found '{found}'")]
    ExpectedFunctionName { found: String },
    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },
    #[error("function call '{name}' expects at least one argument")]
    EmptyCall { name: String },
    #[error("unexpected extra tokens after root expression, starting at '{found}'")]
    TrailingTokens { found: String, count: usize },
}

#[cold]
pub(crate) fn unexpected_eof(position: usize) -> CompileError {
    CompileError {
        kind: CompileErrorKind::UnexpectedEof,
        position,
    }
}

#[cold]
pub(crate) fn unexpected_token(found: &Token, position: usize) -> CompileError {
    CompileError {
        kind: CompileErrorKind::UnexpectedToken {
            found: found.raw.clone(),
        },
        position,
    }
}

#[cold]
pub(crate) fn expected_function_name(found: &Token, position: usize) -> CompileError {
    CompileError {
        kind: CompileErrorKind::ExpectedFunctionName {
            found: found.raw.clone(),
        },
        position,
    }
}

#[cold]
pub(crate) fn unknown_function(name: &str, position: usize) -> CompileError {
    CompileError {
        kind: CompileErrorKind::UnknownFunction {
            name: name.to_string(),
        },
        position,
    }
}

#[cold]
pub(crate) fn empty_call(name: &str, position: usize) -> CompileError {
    CompileError {
        kind: CompileErrorKind::EmptyCall {
            name: name.to_string(),
        },
        position,
    }
}

#[cold]
pub(crate) fn trailing_tokens(rest: &[Token], position: usize) -> CompileError {
    CompileError {
        kind: CompileErrorKind::TrailingTokens {
            found: rest.first().map(|token| token.raw.clone()).unwrap_or_default(),
            count: rest.len(),
        },
        position,
    }
}
