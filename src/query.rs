//! Filter and sort query engine.
//!
//! This module provides:
//! - A column registry mapping aliases to typed record accessors
//! - The operator table and single-clause parser
//! - Predicate construction from parsed conditions
//! - The query entry point combining clauses with AND and sorting the result

pub mod column;
pub mod condition;
pub mod engine;
pub mod error;
pub mod operator;
pub mod predicate;

pub use column::{cmp_ignore_case, fold_case, Column, FieldValue, ValueKind};
pub use condition::{Condition, Literal};
pub use engine::{query, Filter, SortSpec};
pub use error::{QueryError, QueryResult};
pub use operator::Operator;
pub use predicate::{build_predicate, Predicate};
