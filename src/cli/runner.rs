//! CLI runner - executes commands

use crate::auth::Credential;
use crate::cli::commands::{Cli, Commands, Kind, OutputFormat};
use crate::client::{MovieSearch, TmdbClient, TvSearch};
use crate::config::{ClientConfig, ConfigFile, ENV_API_KEY, ENV_BEARER_TOKEN, ENV_LANGUAGE};
use crate::error::Result;
use crate::pagination::Paginator;
use serde::Serialize;
use tracing::debug;

/// Printed shape of a paged command
#[derive(Serialize)]
struct PageOutput<'a, T> {
    page: u32,
    total_pages: Option<u32>,
    total_results: Option<u64>,
    results: &'a [T],
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.client_config()?;
        debug!(base_url = %config.base_url, language = ?config.language, "Client configured");
        let client = TmdbClient::new(&config)?;

        match &self.cli.command {
            Commands::SearchMovies {
                query,
                year,
                include_adult,
                page,
            } => {
                let mut search = MovieSearch::new(query.as_str());
                search.year = *year;
                if *include_adult {
                    search = search.include_adult(true);
                }
                self.output_page(client.search_movies(search), *page).await
            }
            Commands::SearchTv {
                query,
                year,
                first_air_date_year,
                include_adult,
                page,
            } => {
                let mut search = TvSearch::new(query.as_str());
                search.year = *year;
                search.first_air_date_year = *first_air_date_year;
                if *include_adult {
                    search = search.include_adult(true);
                }
                self.output_page(client.search_tv_series(search), *page).await
            }
            Commands::Popular { kind, page } => match kind {
                Kind::Movie => self.output_page(client.popular_movies(), *page).await,
                Kind::Tv => self.output_page(client.popular_tv_series(), *page).await,
            },
            Commands::Movie { id } => self.output(&client.movie_details(*id).await?),
            Commands::Tv { id } => self.output(&client.tv_series_details(*id).await?),
            Commands::Genres { kind } => self.output(&client.genres((*kind).into()).await?),
        }
    }

    /// Settings from flags, then the config file, then the environment
    pub fn client_config(&self) -> Result<ClientConfig> {
        self.client_config_from(|name| std::env::var(name).ok())
    }

    /// Same as [`Runner::client_config`] with a custom variable source
    ///
    /// Each setting comes from the first source that has it. Credentials
    /// resolve as a pair, so a `--bearer-token` flag never meets an API key
    /// from the file or the environment.
    pub fn client_config_from<F>(&self, env: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match &self.cli.config {
            Some(path) => Some(ConfigFile::from_yaml_file(path)?),
            None => None,
        };
        let file_has_credential = file
            .as_ref()
            .is_some_and(|f| f.api_key.is_some() || f.bearer_token.is_some());
        let file_has_language = file.as_ref().is_some_and(|f| f.language.is_some());

        let mut builder = match file {
            Some(file) => file.into_builder(),
            None => ClientConfig::builder(),
        };

        let flag_credential =
            credential_from(self.cli.api_key.clone(), self.cli.bearer_token.clone())?;
        if let Some(credential) = flag_credential {
            builder = builder.credential(credential);
        } else if !file_has_credential {
            if let Some(credential) = credential_from(env(ENV_API_KEY), env(ENV_BEARER_TOKEN))? {
                debug!("Credential taken from the environment");
                builder = builder.credential(credential);
            }
        }

        let language = match &self.cli.language {
            Some(language) => Some(language.clone()),
            None if file_has_language => None,
            None => env(ENV_LANGUAGE),
        };
        if let Some(language) = language {
            builder = builder.language(language);
        }

        builder.build()
    }

    /// Fetch one page and print it with its page metadata
    async fn output_page<T: Serialize>(&self, mut pager: Paginator<T>, page: u32) -> Result<()> {
        if page == pager.page() {
            pager.get_data().await?;
        } else {
            pager.get_page(page).await?;
        }

        self.output(&PageOutput {
            page: pager.page(),
            total_pages: pager.known_total_pages(),
            total_results: pager.known_total_results(),
            results: pager.get_data().await?,
        })
    }

    /// Print a value in the selected format
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}

/// `None` when neither half is given
fn credential_from(
    api_key: Option<String>,
    bearer_token: Option<String>,
) -> Result<Option<Credential>> {
    if api_key.is_none() && bearer_token.is_none() {
        return Ok(None);
    }
    Credential::from_parts(api_key, bearer_token).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::Parser;
    use std::collections::HashMap;
    use std::io::Write;

    fn runner(args: &[&str]) -> Runner {
        let mut argv = vec!["tmdb"];
        argv.extend_from_slice(args);
        Runner::new(Cli::try_parse_from(argv).unwrap())
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_of(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        move |name| vars.get(name).map(|v| v.to_string())
    }

    fn config_file(yaml: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{yaml}").unwrap();
        file
    }

    #[test]
    fn test_config_from_flags() {
        let config = runner(&["--bearer-token", "tok", "--language", "pt-BR", "movie", "1"])
            .client_config_from(no_env)
            .unwrap();

        assert_eq!(config.credential, Credential::bearer("tok"));
        assert_eq!(config.language.as_deref(), Some("pt-BR"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let file = config_file("bearer_token: file-token\nlanguage: fr-FR\ntimeout_secs: 5");
        let path = file.path().to_string_lossy().to_string();

        let config = runner(&["-C", &path, "--api-key", "flag-key", "tv", "1396"])
            .client_config_from(no_env)
            .unwrap();

        assert_eq!(config.credential, Credential::api_key("flag-key"));
        assert_eq!(config.language.as_deref(), Some("fr-FR"));
        assert_eq!(config.timeout.as_secs(), 5);
    }

    #[test]
    fn test_conflicting_flags() {
        let result = runner(&["--api-key", "a", "--bearer-token", "b", "genres", "movie"])
            .client_config_from(no_env);
        assert!(matches!(result, Err(Error::ConflictingCredentials)));
    }

    #[test]
    fn test_bearer_flag_wins_over_env_api_key() {
        let config = runner(&["--bearer-token", "tok", "movie", "1"])
            .client_config_from(env_of(&[(ENV_API_KEY, "env-key")]))
            .unwrap();

        assert_eq!(config.credential, Credential::bearer("tok"));
    }

    #[test]
    fn test_api_key_flag_wins_over_env_bearer_token() {
        let config = runner(&["--api-key", "flag-key", "movie", "1"])
            .client_config_from(env_of(&[(ENV_BEARER_TOKEN, "env-token")]))
            .unwrap();

        assert_eq!(config.credential, Credential::api_key("flag-key"));
    }

    #[test]
    fn test_config_file_wins_over_env() {
        let file = config_file("bearer_token: file-token\nlanguage: fr-FR");
        let path = file.path().to_string_lossy().to_string();
        let env = env_of(&[(ENV_API_KEY, "env-key"), (ENV_LANGUAGE, "de-DE")]);

        let config = runner(&["-C", &path, "movie", "1"])
            .client_config_from(env)
            .unwrap();

        assert_eq!(config.credential, Credential::bearer("file-token"));
        assert_eq!(config.language.as_deref(), Some("fr-FR"));
    }

    #[test]
    fn test_env_fills_what_flags_and_file_leave_out() {
        let env = env_of(&[(ENV_BEARER_TOKEN, "env-token"), (ENV_LANGUAGE, "ja-JP")]);

        let config = runner(&["movie", "1"]).client_config_from(env).unwrap();

        assert_eq!(config.credential, Credential::bearer("env-token"));
        assert_eq!(config.language.as_deref(), Some("ja-JP"));
    }

    #[test]
    fn test_no_credential_anywhere() {
        let result = runner(&["movie", "1"]).client_config_from(no_env);
        assert!(matches!(result, Err(Error::MissingCredential)));
    }
}
