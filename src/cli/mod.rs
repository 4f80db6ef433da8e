//! CLI module
//!
//! Command-line interface over `TmdbClient`.
//!
//! # Commands
//!
//! - `search-movies` / `search-tv` - Search by title or name
//! - `popular` - Popular movies or series
//! - `movie` / `tv` - Details of one title
//! - `genres` - Genre list of a media kind

mod commands;
mod runner;

pub use commands::{Cli, Commands, Kind, OutputFormat};
pub use runner::Runner;
