//! One error type for the whole pipeline.
//!
//! Each stage reports its own error; [`Problem`] tags it with the category
//! the user sees in front of the message.

use scalc_eval::RuntimeError;
use scalc_lexer::LexError;
use scalc_parse::CompileError;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Problem {
    #[error("SYNTAX ERROR: {0}")]
    Syntax(#[from] LexError),
    #[error("COMPILE ERROR: {0}")]
    Compile(#[from] CompileError),
    #[error("RUNTIME ERROR: {0}")]
    Runtime(#[from] RuntimeError),
}
