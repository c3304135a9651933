//! Error types for filter and sort parsing.

use crate::query::{Operator, ValueKind};
use thiserror::Error;

/// Errors that can occur while parsing a filter or sort specification.
///
/// Every error is reported for the whole query: a filter with one bad clause
/// fails entirely instead of silently dropping that clause.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// No column alias matches
    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),

    /// Operator not legal for the column's value kind
    #[error("Operator {operator} is not supported for {kind} column '{column}'")]
    InvalidOperator {
        column: String,
        operator: Operator,
        kind: ValueKind,
    },

    /// Numeric literal failed to parse
    #[error("Invalid value for column '{column}': '{value}' is not a number")]
    InvalidValue { column: String, value: String },

    /// Clause has no operator or an empty side
    #[error("Malformed clause '{clause}': {reason}")]
    MalformedClause { clause: String, reason: String },

    /// Sort direction is neither `asc` nor `desc`
    #[error("Invalid sort specification '{spec}': {reason}")]
    InvalidSortSpec { spec: String, reason: String },
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QueryError::UnknownColumn("foo".to_string());
        assert_eq!(err.to_string(), "Unknown column: 'foo'");

        let err = QueryError::InvalidOperator {
            column: "rating".to_string(),
            operator: Operator::Contains,
            kind: ValueKind::Numeric,
        };
        assert_eq!(
            err.to_string(),
            "Operator ~= is not supported for numeric column 'rating'"
        );

        let err = QueryError::InvalidValue {
            column: "minPlayers".to_string(),
            value: "two".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for column 'minPlayers': 'two' is not a number"
        );

        let err = QueryError::MalformedClause {
            clause: "name".to_string(),
            reason: "no operator".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed clause 'name': no operator");
    }
}
