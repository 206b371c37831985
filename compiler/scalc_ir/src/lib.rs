//! Scalc IR - the data shared by every stage of the set calculator.
//!
//! ```text
//! source text ──tokenize──► Vec<Token> ──compile──► Expr ──evaluate──► IntSet
//! ```
//!
//! - [`Token`] / [`TokenKind`]: classified atoms produced by `scalc_lexer`
//! - [`Expr`]: the closed expression tree produced by `scalc_parse`
//! - [`SetFunction`]: the fixed set of fold operations bound into call nodes
//! - [`FunctionRegistry`]: name → function table consulted at compile time

mod expr;
mod function;
mod registry;
mod token;

pub use expr::Expr;
pub use function::SetFunction;
pub use registry::FunctionRegistry;
pub use token::{Token, TokenKind};

/// A set of integers, the only value type in the language.
pub type IntSet = rustc_hash::FxHashSet<i64>;
