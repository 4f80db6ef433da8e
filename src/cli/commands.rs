//! CLI commands and argument parsing

use crate::types::MediaKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query The Movie Database from the command line
#[derive(Parser, Debug)]
#[command(name = "tmdb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TMDb v3 API key (falls back to the config file, then TMDB_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// TMDb v4 read access token (falls back to the config file, then TMDB_BEARER_TOKEN)
    #[arg(long, global = true)]
    pub bearer_token: Option<String>,

    /// Response language, e.g. en-US (falls back to the config file, then TMDB_LANGUAGE)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search movies by title
    SearchMovies {
        query: String,

        /// Release year
        #[arg(long)]
        year: Option<u32>,

        /// Include adult titles
        #[arg(long)]
        include_adult: bool,

        /// Page to show
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Search TV series by name
    SearchTv {
        query: String,

        /// Year of any episode
        #[arg(long)]
        year: Option<u32>,

        /// Year of the first episode
        #[arg(long)]
        first_air_date_year: Option<u32>,

        /// Include adult titles
        #[arg(long)]
        include_adult: bool,

        /// Page to show
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// List popular movies or series
    Popular {
        #[arg(value_enum)]
        kind: Kind,

        /// Page to show
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Show movie details
    Movie { id: u64 },

    /// Show TV series details
    Tv { id: u64 },

    /// List genres
    Genres {
        #[arg(value_enum)]
        kind: Kind,
    },
}

/// Media kind argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Kind {
    Movie,
    Tv,
}

impl From<Kind> for MediaKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Movie => MediaKind::Movie,
            Kind::Tv => MediaKind::Tv,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_movies() {
        let cli = Cli::try_parse_from([
            "tmdb",
            "--api-key",
            "k",
            "search-movies",
            "alien",
            "--year",
            "1979",
            "--page",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("k"));
        match cli.command {
            Commands::SearchMovies {
                query,
                year,
                include_adult,
                page,
            } => {
                assert_eq!(query, "alien");
                assert_eq!(year, Some(1979));
                assert!(!include_adult);
                assert_eq!(page, 2);
            }
            other => panic!("Unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tmdb", "genres", "tv", "--format", "pretty", "-v"]).unwrap();

        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Genres { kind: Kind::Tv }));
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["tmdb", "popular", "person"]).is_err());
    }
}
