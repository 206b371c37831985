//! The expression tree.
//!
//! A closed sum type with exactly two variants. Each node owns its
//! children outright; the compiler builds trees bottom-up and never shares
//! a subexpression, so there are no cycles and no reference counting.

use crate::SetFunction;
use scalc_stack::ensure_sufficient_stack;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Expr {
    /// Leaf: the integers of a named source.
    Load { source: String },
    /// A function applied to one or more argument expressions, in source order.
    Call {
        function: SetFunction,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn load(source: impl Into<String>) -> Self {
        Expr::Load {
            source: source.into(),
        }
    }

    pub fn call(function: SetFunction, args: Vec<Expr>) -> Self {
        Expr::Call { function, args }
    }

    /// Number of tokens this expression occupies in canonical source form.
    pub fn token_len(&self) -> usize {
        ensure_sufficient_stack(|| match self {
            Expr::Load { .. } => 1,
            Expr::Call { args, .. } => 3 + args.iter().map(Expr::token_len).sum::<usize>(),
        })
    }
}

/// Children are unlinked into a worklist so dropping a deeply nested tree
/// does not recurse once per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let Expr::Call { args, .. } = self else {
            return;
        };
        let mut pending = std::mem::take(args);
        while let Some(mut expr) = pending.pop() {
            if let Expr::Call { args, .. } = &mut expr {
                pending.append(args);
            }
        }
    }
}

/// Canonical program text: `[ NAME arg ... ]`, single spaces between tokens.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Load { source } => f.write_str(source),
            Expr::Call { function, args } => {
                write!(f, "[ {function}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                f.write_str(" ]")
            }
        })
    }
}
