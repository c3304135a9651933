//! Immutable board-game records.

use crate::game::{GameError, GameResult};
use std::fmt;

/// A single board game.
///
/// Records are value objects: they are built once through [`GameRecordBuilder`]
/// and never mutated afterwards. Identity is the name, compared
/// case-insensitively (see [`GameRecord::key`]).
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    name: String,
    min_players: u32,
    max_players: u32,
    min_play_time: u32,
    max_play_time: u32,
    rating: f64,
    difficulty: f64,
    rank: u32,
    year_published: i32,
    id: u32,
}

impl GameRecord {
    /// Start building a record with the given name
    pub fn builder(name: impl Into<String>) -> GameRecordBuilder {
        GameRecordBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_players(&self) -> u32 {
        self.min_players
    }

    pub fn max_players(&self) -> u32 {
        self.max_players
    }

    /// Minimum play time in minutes
    pub fn min_play_time(&self) -> u32 {
        self.min_play_time
    }

    /// Maximum play time in minutes
    pub fn max_play_time(&self) -> u32 {
        self.max_play_time
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    /// Catalog rank, 0 when the record did not come from a catalog import
    pub fn rank(&self) -> u32 {
        self.rank
    }

    /// Publication year, 0 when unknown. Negative for BCE.
    pub fn year_published(&self) -> i32 {
        self.year_published
    }

    /// External catalog id, 0 when unknown
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Identity key used for collection membership
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Whether two records denote the same game
    pub fn same_game(&self, other: &GameRecord) -> bool {
        self.key() == other.key()
    }
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}-{} players, {} minutes)",
            self.name, self.min_players, self.max_players, self.min_play_time
        )
    }
}

/// Builder for [`GameRecord`]
#[derive(Debug, Clone)]
pub struct GameRecordBuilder {
    record: GameRecord,
}

impl GameRecordBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            record: GameRecord {
                name: name.into(),
                min_players: 0,
                max_players: 0,
                min_play_time: 0,
                max_play_time: 0,
                rating: 0.0,
                difficulty: 0.0,
                rank: 0,
                year_published: 0,
                id: 0,
            },
        }
    }

    /// Set both player bounds
    pub fn players(mut self, min: u32, max: u32) -> Self {
        self.record.min_players = min;
        self.record.max_players = max;
        self
    }

    /// Set both play time bounds, in minutes
    pub fn play_time(mut self, min: u32, max: u32) -> Self {
        self.record.min_play_time = min;
        self.record.max_play_time = max;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.record.rating = rating;
        self
    }

    pub fn difficulty(mut self, difficulty: f64) -> Self {
        self.record.difficulty = difficulty;
        self
    }

    pub fn rank(mut self, rank: u32) -> Self {
        self.record.rank = rank;
        self
    }

    pub fn year_published(mut self, year: i32) -> Self {
        self.record.year_published = year;
        self
    }

    pub fn id(mut self, id: u32) -> Self {
        self.record.id = id;
        self
    }

    /// Finish the record. Surrounding whitespace is trimmed from the name,
    /// which must not end up empty.
    pub fn build(mut self) -> GameResult<GameRecord> {
        let trimmed = self.record.name.trim();
        if trimmed.is_empty() {
            return Err(GameError::EmptyName);
        }
        if trimmed.len() != self.record.name.len() {
            self.record.name = trimmed.to_string();
        }
        Ok(self.record)
    }
}
