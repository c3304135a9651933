//! The user's game list.

use crate::game::{GameError, GameRecord, GameResult, Selection};
use crate::query::{self, cmp_ignore_case, Column, QueryResult, SortSpec};
use log::{info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A set of games keyed by case-insensitive name, kept in insertion order.
///
/// Insertion order is the scan order handed to the query engine, which makes
/// tie order in sorted results reproducible.
#[derive(Debug, Clone, Default)]
pub struct GameCollection {
    games: Vec<GameRecord>,
    keys: HashSet<String>,
}

impl GameCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection, dropping later duplicates
    pub fn from_records(records: impl IntoIterator<Item = GameRecord>) -> Self {
        let mut collection = Self::new();
        for record in records {
            if collection.contains(&record) {
                warn!("Skipping duplicate game '{}'", record.name());
                continue;
            }
            collection.add(record);
        }
        collection
    }

    /// Add a game. Returns false if a game with the same name is already present.
    pub fn add(&mut self, record: GameRecord) -> bool {
        if !self.keys.insert(record.key()) {
            return false;
        }
        self.games.push(record);
        true
    }

    /// Remove the game with the same name. Returns false if absent.
    pub fn remove(&mut self, record: &GameRecord) -> bool {
        let key = record.key();
        if !self.keys.remove(&key) {
            return false;
        }
        self.games.retain(|game| game.key() != key);
        true
    }

    pub fn contains(&self, record: &GameRecord) -> bool {
        self.keys.contains(&record.key())
    }

    /// All games in insertion order
    pub fn all(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn clear(&mut self) {
        self.games.clear();
        self.keys.clear();
    }

    /// Case-insensitive lookup by name
    pub fn find_by_name(&self, name: &str) -> Option<&GameRecord> {
        let key = name.trim().to_lowercase();
        if !self.keys.contains(&key) {
            return None;
        }
        self.games.iter().find(|game| game.key() == key)
    }

    /// Game names sorted case-insensitively
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.games.iter().map(|g| g.name().to_string()).collect();
        names.sort_by(|a, b| cmp_ignore_case(a, b));
        names
    }

    /// Games sorted by name, the order used for positional selections
    pub fn sorted(&self) -> Vec<GameRecord> {
        let mut games = self.games.clone();
        games.sort_by(|a, b| Column::Name.compare(a, b));
        games
    }

    /// Run a query over this collection
    pub fn query(&self, filter: Option<&str>, sort: &SortSpec) -> QueryResult<Vec<GameRecord>> {
        query::query(&self.games, filter, sort)
    }

    /// Add games picked from a numbered candidate list (usually a query
    /// result). Returns how many were actually added.
    pub fn add_selection(&mut self, selection: &str, candidates: &[GameRecord]) -> GameResult<usize> {
        if candidates.is_empty() {
            return Err(GameError::NoCandidates);
        }
        let picked = Selection::parse(selection)?.pick(candidates)?;
        Ok(picked
            .into_iter()
            .filter(|game| self.add((*game).clone()))
            .count())
    }

    /// Remove games by selection. Positions refer to the name-sorted list;
    /// an unknown name removes nothing. Returns how many were removed.
    pub fn remove_selection(&mut self, selection: &str) -> GameResult<usize> {
        match Selection::parse(selection)? {
            Selection::All => {
                let removed = self.len();
                self.clear();
                Ok(removed)
            }
            Selection::Name(name) => match self.find_by_name(&name).cloned() {
                Some(game) => Ok(usize::from(self.remove(&game))),
                None => Ok(0),
            },
            positional => {
                let sorted = self.sorted();
                let picked: Vec<GameRecord> =
                    positional.pick(&sorted)?.into_iter().cloned().collect();
                Ok(picked.iter().filter(|game| self.remove(game)).count())
            }
        }
    }

    /// Write the sorted game names to a text file, one per line
    pub fn save_names(&self, path: impl AsRef<Path>) -> GameResult<()> {
        let path = path.as_ref();
        let mut content = self.names().join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(path, content)?;
        info!("Saved {} game names to {}", self.len(), path.display());
        Ok(())
    }
}
