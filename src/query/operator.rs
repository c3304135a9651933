//! Comparison operators of the filter language.

use crate::query::ValueKind;
use std::fmt;

/// Comparison operators supported in filter clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equals,
    NotEquals,
    Contains,
    GreaterThan,
    LessThan,
    GreaterEqual,
    LessEqual,
}

impl Operator {
    /// Operators in the order a clause is scanned for them.
    ///
    /// Two-character symbols come first so that `>=` is never read as `>`
    /// followed by a value starting with `=`.
    pub const PRECEDENCE: [Operator; 7] = [
        Operator::Equals,
        Operator::NotEquals,
        Operator::GreaterEqual,
        Operator::LessEqual,
        Operator::Contains,
        Operator::GreaterThan,
        Operator::LessThan,
    ];

    /// Get the symbol for this operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "==",
            Operator::NotEquals => "!=",
            Operator::Contains => "~=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterEqual => ">=",
            Operator::LessEqual => "<=",
        }
    }

    /// Find the operator of a clause and the byte offset of its first occurrence
    pub fn scan(clause: &str) -> Option<(Operator, usize)> {
        Self::PRECEDENCE
            .iter()
            .find_map(|op| clause.find(op.as_str()).map(|pos| (*op, pos)))
    }

    /// Check whether this operator can be applied to a column of the given kind
    pub fn supports(&self, kind: ValueKind) -> bool {
        match self {
            Operator::Contains => kind == ValueKind::Text,
            _ => true,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
