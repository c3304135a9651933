//! Parsing of single filter clauses.
//!
//! A clause has the shape `column operator value`, e.g. `minPlayers > 2` or
//! `name ~= "Go"`. The operator is found by scanning [`Operator::PRECEDENCE`]
//! in order; the clause is split at the first occurrence of that symbol.

use crate::query::{Column, Operator, QueryError, QueryResult, ValueKind};
use std::fmt;
use std::str::FromStr;

/// Literal right-hand side of a condition
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Text(String),
    Number(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Text(s) => write!(f, "\"{}\"", s),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A fully parsed, immediately evaluable clause
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: Column,
    pub operator: Operator,
    pub literal: Literal,
}

impl Condition {
    pub fn new(column: Column, operator: Operator, literal: Literal) -> Self {
        Self {
            column,
            operator,
            literal,
        }
    }

    /// Parse one clause
    pub fn parse(clause: &str) -> QueryResult<Condition> {
        let clause = clause.trim();
        let malformed = |reason: &str| QueryError::MalformedClause {
            clause: clause.to_string(),
            reason: reason.to_string(),
        };

        let (operator, pos) = Operator::scan(clause).ok_or_else(|| malformed("no operator"))?;

        let column_part = clause[..pos].trim();
        let value_part = strip_quotes(clause[pos + operator.as_str().len()..].trim());

        if column_part.is_empty() {
            return Err(malformed("missing column"));
        }
        if value_part.is_empty() {
            return Err(malformed("missing value"));
        }

        let column = Column::resolve(column_part)?;

        let kind = column.kind();
        if !operator.supports(kind) {
            return Err(QueryError::InvalidOperator {
                column: column.canonical_name().to_string(),
                operator,
                kind,
            });
        }

        let literal = match kind {
            ValueKind::Text => Literal::Text(value_part.to_string()),
            ValueKind::Numeric => Literal::Number(parse_number(column, value_part)?),
        };

        Ok(Condition::new(column, operator, literal))
    }
}

impl FromStr for Condition {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::parse(s)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.operator, self.literal)
    }
}

/// Remove one pair of matching quotes wrapping the whole value
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn parse_number(column: Column, value: &str) -> QueryResult<f64> {
    let invalid = || QueryError::InvalidValue {
        column: column.canonical_name().to_string(),
        value: value.to_string(),
    };
    let number: f64 = value.parse().map_err(|_| invalid())?;
    if !number.is_finite() {
        return Err(invalid());
    }
    Ok(number)
}
