//! Comparison operators for building predicates from key paths.
//!
//! [`Op`] applies Rust's own comparison operators, so a predicate built with
//! `Op::Gt` behaves exactly like writing `value > constant` by hand.

use std::fmt;
use std::str::FromStr;

use crate::error::KeyPathError;

/// Comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal (`==`).
    Eq,
    /// Not equal (`!=`).
    Ne,
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    Gte,
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Lte,
}

impl Op {
    /// All operators, in declaration order.
    pub const ALL: [Op; 6] = [Op::Eq, Op::Ne, Op::Gt, Op::Gte, Op::Lt, Op::Lte];

    /// Applies the operator as `lhs <op> rhs`.
    pub fn eval<V: PartialOrd + ?Sized>(self, lhs: &V, rhs: &V) -> bool {
        match self {
            Op::Eq => lhs == rhs,
            Op::Ne => lhs != rhs,
            Op::Gt => lhs > rhs,
            Op::Gte => lhs >= rhs,
            Op::Lt => lhs < rhs,
            Op::Lte => lhs <= rhs,
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
        }
    }

    /// Returns the Rust symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Op {
    type Err = KeyPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Op::ALL
            .into_iter()
            .find(|op| op.symbol() == trimmed || op.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| KeyPathError::UnknownOperator(s.to_string()))
    }
}
