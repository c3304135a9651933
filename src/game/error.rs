//! Game layer error types.

use thiserror::Error;

/// Errors that can occur while building, importing or editing game lists.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Game name must not be empty")]
    EmptyName,

    #[error("Catalog row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("No games to add")]
    NoCandidates,

    #[error("Invalid index: {index} (list has {len} games)")]
    InvalidIndex { index: usize, len: usize },

    #[error("Invalid range: {start}-{end} (list has {len} games)")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("Invalid selection: '{0}'")]
    InvalidSelection(String),

    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog operations.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            GameError::EmptyName.to_string(),
            "Game name must not be empty"
        );
        assert_eq!(
            GameError::InvalidRange {
                start: 3,
                end: 9,
                len: 4
            }
            .to_string(),
            "Invalid range: 3-9 (list has 4 games)"
        );
        assert_eq!(
            GameError::InvalidRow {
                row: 2,
                reason: "missing name".to_string()
            }
            .to_string(),
            "Catalog row 2: missing name"
        );
    }
}
