//! Query engine: conjunctive filtering followed by a stable sort.
//!
//! Every call to [`query`] starts from the records it is given. There is no
//! accumulated "current subset" between calls, so the same inputs always
//! produce the same ordered output.

use crate::game::GameRecord;
use crate::query::{build_predicate, Column, Condition, Predicate, QueryError, QueryResult};
use log::debug;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A parsed filter string: every clause must hold for a record to match
pub struct Filter {
    conditions: Vec<Condition>,
    predicates: Vec<Predicate>,
}

impl Filter {
    /// Parse a comma-separated filter string.
    ///
    /// The first clause that fails to parse fails the whole filter.
    pub fn parse(filter: &str) -> QueryResult<Filter> {
        let conditions = filter
            .split(',')
            .map(Condition::parse)
            .collect::<QueryResult<Vec<_>>>()?;
        let predicates = conditions.iter().map(build_predicate).collect();
        Ok(Filter {
            conditions,
            predicates,
        })
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Check a record against every clause
    pub fn matches(&self, record: &GameRecord) -> bool {
        self.predicates.iter().all(|predicate| predicate(record))
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("conditions", &self.conditions)
            .finish()
    }
}

/// Column and direction to order query results by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: Column,
    pub ascending: bool,
}

impl SortSpec {
    pub fn new(column: Column, ascending: bool) -> Self {
        Self { column, ascending }
    }

    pub fn ascending(column: Column) -> Self {
        Self::new(column, true)
    }

    pub fn descending(column: Column) -> Self {
        Self::new(column, false)
    }

    /// Compare two records. Descending order reverses the comparison itself,
    /// so ties keep their input order in both directions.
    pub fn compare(&self, a: &GameRecord, b: &GameRecord) -> Ordering {
        let ordering = self.column.compare(a, b);
        if self.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::ascending(Column::Name)
    }
}

impl FromStr for SortSpec {
    type Err = QueryError;

    /// Parse `column[:asc|:desc]`, e.g. `rating:desc`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column_part, direction) = match s.split_once(':') {
            Some((column, direction)) => (column, Some(direction.trim())),
            None => (s, None),
        };
        let column = Column::resolve(column_part)?;
        let ascending = match direction.map(str::to_lowercase).as_deref() {
            None | Some("asc") | Some("ascending") => true,
            Some("desc") | Some("descending") => false,
            Some(other) => {
                return Err(QueryError::InvalidSortSpec {
                    spec: s.to_string(),
                    reason: format!("unknown direction '{}'", other),
                })
            }
        };
        Ok(SortSpec::new(column, ascending))
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.ascending { "asc" } else { "desc" };
        write!(f, "{}:{}", self.column, direction)
    }
}

/// Filter and sort a collection of records.
///
/// A `None` or blank filter keeps every record. The returned vector is an
/// owned snapshot; later changes to the source do not affect it.
pub fn query(
    records: &[GameRecord],
    filter: Option<&str>,
    sort: &SortSpec,
) -> QueryResult<Vec<GameRecord>> {
    let filter = match filter.map(str::trim) {
        Some(text) if !text.is_empty() => Some(Filter::parse(text)?),
        _ => None,
    };

    let mut results: Vec<GameRecord> = match &filter {
        Some(filter) => records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect(),
        None => records.to_vec(),
    };

    // sort_by is stable
    results.sort_by(|a, b| sort.compare(a, b));

    debug!(
        "query {:?} sorted by {}: {} of {} records",
        filter.as_ref().map(Filter::conditions),
        sort,
        results.len(),
        records.len()
    );
    Ok(results)
}
