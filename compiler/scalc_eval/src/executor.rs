//! Program execution entry point.

use crate::{evaluate, RuntimeError, SourceLoader};
use scalc_ir::{Expr, FunctionRegistry, IntSet};

/// Runs compiled programs against a source loader.
///
/// Holds the same registry the compiler used. Function handles are already
/// bound inside call nodes, so execution itself never consults it.
pub struct Executor<'a> {
    functions: &'a FunctionRegistry,
    loader: &'a dyn SourceLoader,
}

impl<'a> Executor<'a> {
    pub fn new(functions: &'a FunctionRegistry, loader: &'a dyn SourceLoader) -> Self {
        Executor { functions, loader }
    }

    pub fn registry(&self) -> &'a FunctionRegistry {
        self.functions
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn execute(&self, root: &Expr) -> Result<IntSet, RuntimeError> {
        evaluate(root, self.loader)
    }
}
