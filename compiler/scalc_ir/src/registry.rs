//! Function name → [`SetFunction`] table.

use crate::SetFunction;
use rustc_hash::FxHashMap;

/// Immutable lookup table from upper-case function name to function.
///
/// Built once at start-up and passed by reference to the compiler and the
/// executor. Adding a function to the language means extending this table;
/// the compiler only ever asks it whether a name exists.
///
/// Functions are always registered under [`SetFunction::name`], the same
/// name `Display for Expr` prints, so canonical program text compiles back
/// against the registry that produced it.
#[derive(Clone, Debug, Default)]
pub struct FunctionRegistry {
    functions: FxHashMap<&'static str, SetFunction>,
}

impl FunctionRegistry {
    /// An empty registry. Every call fails to compile against it.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard table: `SUM`, `INT` and `DIF`.
    pub fn builtin() -> Self {
        SetFunction::ALL
            .into_iter()
            .fold(Self::new(), FunctionRegistry::with)
    }

    /// Register `function` under its canonical name.
    #[must_use]
    pub fn with(mut self, function: SetFunction) -> Self {
        self.functions.insert(function.name(), function);
        self
    }

    pub fn get(&self, name: &str) -> Option<SetFunction> {
        self.functions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
