pub mod config;
pub mod game;
pub mod query;
pub mod shell;
