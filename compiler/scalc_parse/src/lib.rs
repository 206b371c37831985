//! Compiler for scalc: token sequence → expression tree.
//!
//! Recursive descent over the grammar
//!
//! ```text
//! program    := expression
//! expression := FILE_NAME | "[" FUNC_NAME expression+ "]"
//! ```
//!
//! Function names are resolved against a [`FunctionRegistry`] while
//! parsing, so the resulting [`Expr`] carries bound [`SetFunction`]
//! handles and evaluation never looks names up again.
//!
//! [`SetFunction`]: scalc_ir::SetFunction

mod cursor;
mod error;

pub use error::{CompileError, CompileErrorKind};

use cursor::Cursor;
use scalc_ir::{Expr, FunctionRegistry, Token, TokenKind};
use scalc_stack::ensure_sufficient_stack;
use tracing::trace;

/// Compile a complete program.
///
/// The root expression must consume every token; anything left over is an
/// error rather than a second top-level expression.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn compile(tokens: &[Token], functions: &FunctionRegistry) -> Result<Expr, CompileError> {
    let (root, consumed) = build_expression_at(tokens, 0, functions)?;
    if consumed < tokens.len() {
        return Err(error::trailing_tokens(&tokens[consumed..], consumed));
    }
    Ok(root)
}

/// Build one expression starting at token `index`.
///
/// Returns the expression and the number of tokens it consumed.
pub fn build_expression_at(
    tokens: &[Token],
    index: usize,
    functions: &FunctionRegistry,
) -> Result<(Expr, usize), CompileError> {
    let mut parser = Parser {
        cursor: Cursor::at(tokens, index),
        functions,
    };
    let expr = parser.parse_expression()?;
    Ok((expr, parser.cursor.position() - index))
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    functions: &'a FunctionRegistry,
}

impl Parser<'_> {
    fn parse_expression(&mut self) -> Result<Expr, CompileError> {
        ensure_sufficient_stack(|| {
            let position = self.cursor.position();
            let Some(token) = self.cursor.current() else {
                return Err(error::unexpected_eof(position));
            };
            match token.kind {
                TokenKind::FileName => {
                    self.cursor.advance();
                    Ok(Expr::load(token.raw.as_str()))
                }
                TokenKind::FuncCallStart => self.parse_call(),
                TokenKind::FuncCallEnd | TokenKind::FuncName => {
                    Err(error::unexpected_token(token, position))
                }
            }
        })
    }

    /// `"[" FUNC_NAME expression+ "]"`, with the cursor on the `[`.
    fn parse_call(&mut self) -> Result<Expr, CompileError> {
        let start = self.cursor.position();
        self.cursor.advance();

        let name_position = self.cursor.position();
        let name = match self.cursor.current() {
            None => return Err(error::unexpected_eof(name_position)),
            Some(token) if token.kind == TokenKind::FuncName => token.raw.as_str(),
            Some(token) => return Err(error::expected_function_name(token, name_position)),
        };
        let Some(function) = self.functions.get(name) else {
            return Err(error::unknown_function(name, name_position));
        };
        self.cursor.advance();

        let mut args = Vec::new();
        while !self.cursor.check(TokenKind::FuncCallEnd) {
            if self.cursor.is_at_end() {
                return Err(error::unexpected_eof(self.cursor.position()));
            }
            args.push(self.parse_expression()?);
        }

        if args.is_empty() {
            return Err(error::empty_call(name, self.cursor.position()));
        }
        self.cursor.advance();

        trace!(
            start,
            end = self.cursor.position(),
            %function,
            arity = args.len(),
            "call"
        );
        Ok(Expr::call(function, args))
    }
}
