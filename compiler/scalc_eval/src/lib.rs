//! Scalc Eval - tree-walking evaluator for set expressions.
//!
//! Evaluation is a post-order walk: a `Load` leaf reads its source through a
//! [`SourceLoader`], a `Call` node evaluates its arguments left to right and
//! folds the results with its bound [`SetFunction`].
//!
//! [`SetFunction`]: scalc_ir::SetFunction

pub mod errors;
mod executor;
mod loader;

pub use errors::RuntimeError;
pub use executor::Executor;
pub use loader::{FileLoader, Lines, LoadError, MemoryLoader, SourceLoader};

use scalc_ir::{Expr, IntSet};
use scalc_stack::ensure_sufficient_stack;
use tracing::debug;

/// Evaluate `expr` into a set of integers.
///
/// Arguments are evaluated in source order and the first failure aborts
/// the whole evaluation.
pub fn evaluate(expr: &Expr, loader: &dyn SourceLoader) -> Result<IntSet, RuntimeError> {
    ensure_sufficient_stack(|| match expr {
        Expr::Load { source } => load_source(source, loader),
        Expr::Call { function, args } => {
            let operands = args
                .iter()
                .map(|arg| evaluate(arg, loader))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(function.apply(operands))
        }
    })
}

/// Read every line of `name` as an integer.
///
/// Surrounding whitespace is ignored, but every line must hold an integer:
/// a blank line is as invalid as any other text. Duplicates collapse. The
/// source stays open only for the duration of this call.
fn load_source(name: &str, loader: &dyn SourceLoader) -> Result<IntSet, RuntimeError> {
    let lines = loader.load(name).map_err(|err| match err {
        LoadError::NotFound => errors::source_not_found(name),
        LoadError::Io(err) => errors::source_read(name, &err),
    })?;

    let mut values = IntSet::default();
    for (index, line) in lines.enumerate() {
        let line = line.map_err(|err| errors::source_read(name, &err))?;
        let value = line
            .trim()
            .parse::<i64>()
            .map_err(|_| errors::invalid_integer(name, &line, index + 1))?;
        values.insert(value);
    }

    debug!(source = name, count = values.len(), "loaded source");
    Ok(values)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
