//! Column registry.
//!
//! Every filterable and sortable field of a [`GameRecord`] is described by one
//! row of [`REGISTRY`]: the aliases that resolve to it, whether it holds text
//! or numbers, and how to read it from a record. Adding a column means adding
//! a variant and a row here.

use crate::game::GameRecord;
use crate::query::{QueryError, QueryResult};
use std::cmp::Ordering;
use std::fmt;

/// Columns of a game record usable in filters and sorts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    MinPlayers,
    MaxPlayers,
    MinTime,
    MaxTime,
    Rating,
    Difficulty,
    Rank,
    Year,
    Id,
}

/// Kind of value a column holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Numeric,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Text => f.write_str("text"),
            ValueKind::Numeric => f.write_str("numeric"),
        }
    }
}

/// A field value read from a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

struct ColumnDef {
    column: Column,
    canonical: &'static str,
    /// Normalized aliases (lowercase, no underscores or spaces)
    aliases: &'static [&'static str],
    kind: ValueKind,
    extract: for<'a> fn(&'a GameRecord) -> FieldValue<'a>,
}

static REGISTRY: [ColumnDef; 10] = [
    ColumnDef {
        column: Column::Name,
        canonical: "name",
        aliases: &["name", "objectname", "title"],
        kind: ValueKind::Text,
        extract: |g| FieldValue::Text(g.name()),
    },
    ColumnDef {
        column: Column::MinPlayers,
        canonical: "minPlayers",
        aliases: &["minplayers"],
        kind: ValueKind::Numeric,
        extract: |g| FieldValue::Number(g.min_players() as f64),
    },
    ColumnDef {
        column: Column::MaxPlayers,
        canonical: "maxPlayers",
        aliases: &["maxplayers"],
        kind: ValueKind::Numeric,
        extract: |g| FieldValue::Number(g.max_players() as f64),
    },
    ColumnDef {
        column: Column::MinTime,
        canonical: "minTime",
        aliases: &["mintime", "minplaytime"],
        kind: ValueKind::Numeric,
        extract: |g| FieldValue::Number(g.min_play_time() as f64),
    },
    ColumnDef {
        column: Column::MaxTime,
        canonical: "maxTime",
        aliases: &["maxtime", "maxplaytime", "playtime"],
        kind: ValueKind::Numeric,
        extract: |g| FieldValue::Number(g.max_play_time() as f64),
    },
    ColumnDef {
        column: Column::Rating,
        canonical: "rating",
        aliases: &["rating", "average", "avgrating"],
        kind: ValueKind::Numeric,
        extract: |g| FieldValue::Number(g.rating()),
    },
    ColumnDef {
        column: Column::Difficulty,
        canonical: "difficulty",
        aliases: &["difficulty", "avgweight", "weight"],
        kind: ValueKind::Numeric,
        extract: |g| FieldValue::Number(g.difficulty()),
    },
    ColumnDef {
        column: Column::Rank,
        canonical: "rank",
        aliases: &["rank"],
        kind: ValueKind::Numeric,
        extract: |g| FieldValue::Number(g.rank() as f64),
    },
    ColumnDef {
        column: Column::Year,
        canonical: "year",
        aliases: &["year", "yearpublished"],
        kind: ValueKind::Numeric,
        extract: |g| FieldValue::Number(g.year_published() as f64),
    },
    ColumnDef {
        column: Column::Id,
        canonical: "id",
        aliases: &["id"],
        kind: ValueKind::Numeric,
        extract: |g| FieldValue::Number(g.id() as f64),
    },
];

/// Normalize a raw column name: trim, lowercase, drop `_` and whitespace
fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl Column {
    /// All columns, in registry order
    pub const ALL: [Column; 10] = [
        Column::Name,
        Column::MinPlayers,
        Column::MaxPlayers,
        Column::MinTime,
        Column::MaxTime,
        Column::Rating,
        Column::Difficulty,
        Column::Rank,
        Column::Year,
        Column::Id,
    ];

    /// Resolve a user-supplied column name or alias
    pub fn resolve(raw: &str) -> QueryResult<Column> {
        let key = normalize(raw);
        REGISTRY
            .iter()
            .find(|def| def.aliases.contains(&key.as_str()))
            .map(|def| def.column)
            .ok_or_else(|| QueryError::UnknownColumn(raw.trim().to_string()))
    }

    fn def(&self) -> &'static ColumnDef {
        // Registry rows are declared in variant order
        &REGISTRY[*self as usize]
    }

    /// Display name of the column
    pub fn canonical_name(&self) -> &'static str {
        self.def().canonical
    }

    pub fn kind(&self) -> ValueKind {
        self.def().kind
    }

    /// Read this column's value from a record
    pub fn extract<'a>(&self, record: &'a GameRecord) -> FieldValue<'a> {
        (self.def().extract)(record)
    }

    /// Natural ordering of two records on this column: case-insensitive
    /// ordinal for text, numeric otherwise.
    pub fn compare(&self, a: &GameRecord, b: &GameRecord) -> Ordering {
        match (self.extract(a), self.extract(b)) {
            (FieldValue::Text(x), FieldValue::Text(y)) => cmp_ignore_case(x, y),
            (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(&y),
            // A column always yields the same variant
            _ => Ordering::Equal,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Per-character lowercase folding shared by every text comparison.
///
/// Unlike `str::to_lowercase` it ignores context, so a final `Σ` folds to `σ`
/// wherever it appears.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Case-insensitive ordinal string comparison under [`fold_case`], not
/// locale aware
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
