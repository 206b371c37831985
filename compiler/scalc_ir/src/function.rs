//! Built-in set functions.
//!
//! Every function is a left fold over its operands, seeded with the first
//! operand. Only the binary step differs between them, so the fold itself
//! lives in one place ([`SetFunction::apply`]) and each variant supplies
//! its step through [`SetFunction::combine`].

use crate::IntSet;
use std::fmt;

/// One of the fixed set-algebra reducers a call node can be bound to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SetFunction {
    /// Union: `SUM(A, B, C) = A ∪ B ∪ C`.
    Sum,
    /// Intersection: `INT(A, B, C) = A ∩ B ∩ C`.
    Int,
    /// Left-associative difference: `DIF(A, B, C) = (A − B) − C`.
    Dif,
}

impl SetFunction {
    /// All built-in functions, in registration order.
    pub const ALL: [SetFunction; 3] = [SetFunction::Sum, SetFunction::Int, SetFunction::Dif];

    /// The upper-case name the function is registered under.
    pub fn name(self) -> &'static str {
        match self {
            SetFunction::Sum => "SUM",
            SetFunction::Int => "INT",
            SetFunction::Dif => "DIF",
        }
    }

    /// Fold `next` into the accumulator in place.
    pub fn combine(self, acc: &mut IntSet, next: &IntSet) {
        match self {
            SetFunction::Sum => acc.extend(next.iter().copied()),
            SetFunction::Int => acc.retain(|value| next.contains(value)),
            SetFunction::Dif => acc.retain(|value| !next.contains(value)),
        }
    }

    /// Left-fold `operands` in order, seeded with the first one.
    ///
    /// A single operand is returned unchanged. No operands yields the empty
    /// set; the compiler never produces such a call, but the function stays
    /// total.
    pub fn apply(self, operands: impl IntoIterator<Item = IntSet>) -> IntSet {
        let mut operands = operands.into_iter();
        let Some(mut acc) = operands.next() else {
            return IntSet::default();
        };
        for next in operands {
            self.combine(&mut acc, &next);
        }
        acc
    }
}

impl fmt::Display for SetFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
