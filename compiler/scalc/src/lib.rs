//! Scalc - a set calculator.
//!
//! Evaluates programs such as `[ SUM [ DIF a.txt b.txt ] [ INT b.txt c.txt ] ]`
//! over integer sets read from line-oriented sources.
//!
//! ```text
//! program text
//!     │ scalc_lexer::tokenize
//!     ▼
//! Vec<Token>
//!     │ scalc_parse::compile (+ FunctionRegistry)
//!     ▼
//! Expr
//!     │ scalc_eval::Executor::execute (+ SourceLoader)
//!     ▼
//! IntSet ──► sorted Vec<i64>
//! ```
//!
//! The `scalc` binary writes results to stdout and reports a [`Problem`] as
//! one prefixed line on stderr with exit status 1, so scripts can tell a
//! failed program from an empty result.

pub mod cli;
pub mod problem;

pub use cli::{parse_args, Command, Emit, RunOptions, UsageError, USAGE};
pub use problem::Problem;

use scalc_eval::{Executor, FileLoader, SourceLoader};
use scalc_ir::FunctionRegistry;
use std::sync::Once;

/// Tokenize, compile and evaluate `source`.
///
/// Returns the resulting integers in ascending order, without duplicates.
#[tracing::instrument(level = "debug", skip(functions, loader))]
pub fn run_program(
    source: &str,
    functions: &FunctionRegistry,
    loader: &dyn SourceLoader,
) -> Result<Vec<i64>, Problem> {
    let tokens = scalc_lexer::tokenize(source)?;
    let root = scalc_parse::compile(&tokens, functions)?;
    let result = Executor::new(functions, loader).execute(&root)?;

    let mut values: Vec<i64> = result.into_iter().collect();
    values.sort_unstable();
    Ok(values)
}

/// Produce the output lines for `source` as selected by `options.emit`.
pub fn render(source: &str, options: &RunOptions) -> Result<Vec<String>, Problem> {
    let functions = FunctionRegistry::builtin();
    match options.emit {
        Emit::Result => {
            let loader = match &options.base_dir {
                Some(dir) => FileLoader::with_base_dir(dir),
                None => FileLoader::new(),
            };
            let values = run_program(source, &functions, &loader)?;
            Ok(values.iter().map(ToString::to_string).collect())
        }
        Emit::Tokens => {
            let tokens = scalc_lexer::tokenize(source)?;
            Ok(tokens
                .iter()
                .map(|token| format!("{:?} {}", token.kind, token.raw))
                .collect())
        }
        Emit::Tree => {
            let tokens = scalc_lexer::tokenize(source)?;
            let root = scalc_parse::compile(&tokens, &functions)?;
            Ok(vec![root.to_string()])
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Only active when `RUST_LOG` is set, e.g. `RUST_LOG=scalc_parse=trace`.
/// Output goes to stderr as an indented tree so nested calls line up.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
