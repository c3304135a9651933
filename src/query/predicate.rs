//! Predicate evaluators.
//!
//! [`build_predicate`] turns a parsed [`Condition`] into a reusable closure
//! over [`GameRecord`]s. Text comparisons ignore case; numeric comparisons are
//! plain `f64` comparisons, so `==` is exact equality with no tolerance.

use crate::game::GameRecord;
use crate::query::column::fold_case;
use crate::query::{Column, Condition, FieldValue, Literal, Operator};

/// A boolean test over a single record
pub type Predicate = Box<dyn Fn(&GameRecord) -> bool + Send + Sync>;

/// Build the predicate for a condition
pub fn build_predicate(condition: &Condition) -> Predicate {
    let column = condition.column;
    let operator = condition.operator;
    match &condition.literal {
        Literal::Text(value) => text_predicate(column, operator, value),
        Literal::Number(value) => numeric_predicate(column, operator, *value),
    }
}

fn text_predicate(column: Column, operator: Operator, value: &str) -> Predicate {
    let needle = fold_case(value);
    Box::new(move |record: &GameRecord| {
        let FieldValue::Text(actual) = column.extract(record) else {
            return false;
        };
        let actual = fold_case(actual);
        match operator {
            Operator::Equals => actual == needle,
            Operator::NotEquals => actual != needle,
            Operator::Contains => actual.contains(&needle),
            Operator::GreaterThan => actual > needle,
            Operator::LessThan => actual < needle,
            Operator::GreaterEqual => actual >= needle,
            Operator::LessEqual => actual <= needle,
        }
    })
}

fn numeric_predicate(column: Column, operator: Operator, value: f64) -> Predicate {
    Box::new(move |record: &GameRecord| {
        let FieldValue::Number(actual) = column.extract(record) else {
            return false;
        };
        compare_f64(actual, operator, value)
    })
}

fn compare_f64(actual: f64, operator: Operator, value: f64) -> bool {
    match operator {
        Operator::Equals => actual == value,
        Operator::NotEquals => actual != value,
        Operator::GreaterThan => actual > value,
        Operator::LessThan => actual < value,
        Operator::GreaterEqual => actual >= value,
        Operator::LessEqual => actual <= value,
        // Rejected by the parser for numeric columns
        Operator::Contains => false,
    }
}
