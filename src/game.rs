//! Game records and the collections that hold them.
//!
//! - **GameRecord**: immutable value describing one board game
//! - **GameCollection**: set of games keyed by case-insensitive name
//! - **Selection**: `all` / `N` / `N-M` / name pickers over numbered lists
//! - **import**: CSV catalog loading

pub mod collection;
pub mod error;
pub mod import;
pub mod record;
pub mod selection;

pub use collection::GameCollection;
pub use error::{GameError, GameResult};
pub use import::{load_catalog, read_catalog};
pub use record::{GameRecord, GameRecordBuilder};
pub use selection::Selection;
