//! Catalog import from CSV exports.
//!
//! The expected layout is the board-game-geek collection export: a header row
//! with `objectname`, `id`, `minplayers`, `maxplayers`, `minplaytime`,
//! `maxplaytime`, `avgweight`, `rank`, `average` and `yearpublished`.
//! Header names are matched case-insensitively. Only `objectname` is
//! required; other missing columns or empty cells default to zero.

use crate::game::{GameError, GameRecord, GameResult};
use log::info;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(alias = "name")]
    objectname: String,
    #[serde(default)]
    id: Option<u32>,
    #[serde(default)]
    minplayers: Option<u32>,
    #[serde(default)]
    maxplayers: Option<u32>,
    #[serde(default)]
    minplaytime: Option<u32>,
    #[serde(default)]
    maxplaytime: Option<u32>,
    #[serde(default)]
    avgweight: Option<f64>,
    #[serde(default)]
    rank: Option<u32>,
    #[serde(default)]
    average: Option<f64>,
    #[serde(default)]
    yearpublished: Option<i32>,
}

impl CatalogRow {
    fn into_record(self, row: usize) -> GameResult<GameRecord> {
        GameRecord::builder(self.objectname)
            .id(self.id.unwrap_or_default())
            .players(
                self.minplayers.unwrap_or_default(),
                self.maxplayers.unwrap_or_default(),
            )
            .play_time(
                self.minplaytime.unwrap_or_default(),
                self.maxplaytime.unwrap_or_default(),
            )
            .difficulty(self.avgweight.unwrap_or_default())
            .rank(self.rank.unwrap_or_default())
            .rating(self.average.unwrap_or_default())
            .year_published(self.yearpublished.unwrap_or_default())
            .build()
            .map_err(|e| GameError::InvalidRow {
                row,
                reason: e.to_string(),
            })
    }
}

/// Read catalog records from any CSV source
pub fn read_catalog<R: Read>(reader: R) -> GameResult<Vec<GameRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let lowered: csv::StringRecord = csv_reader.headers()?.iter().map(str::to_lowercase).collect();

    let mut records = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        // Row 1 is the header
        let row = i + 2;
        let raw = result?;
        let parsed: CatalogRow = raw
            .deserialize(Some(&lowered))
            .map_err(|e| GameError::InvalidRow {
                row,
                reason: e.to_string(),
            })?;
        records.push(parsed.into_record(row)?);
    }
    Ok(records)
}

/// Load a catalog CSV file
pub fn load_catalog(path: impl AsRef<Path>) -> GameResult<Vec<GameRecord>> {
    let path = path.as_ref();
    let records = read_catalog(File::open(path)?)?;
    info!("Loaded {} games from {}", records.len(), path.display());
    Ok(records)
}
