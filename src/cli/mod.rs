//! CLI module for hookdash
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `status` - Show the service dashboard (health, stats, recent activity)
//! - `fetch` - Call any service endpoint and print the JSON result
//! - `url` - Print the URL a path and query resolve to
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Dashboard against a remote service
//! hookdash status --api-url https://hooks.example.com
//!
//! # Inspect one subscription
//! hookdash fetch /subscriptions/3f2a
//!
//! # Generate shell completions
//! hookdash completions bash > ~/.bash_completion.d/hookdash
//! ```

pub mod completions;
pub mod config;
pub mod fetch;
pub mod output;
pub mod status;

pub use completions::handle_completions;
pub use config::handle_config_init;

use crate::api::QueryPair;
use crate::config::DashboardConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// hookdash - webhook delivery service dashboard
#[derive(Parser, Debug)]
#[command(
    name = "hookdash",
    version,
    about = "Status dashboard and HTTP client for a webhook delivery service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show service health, statistics and recent activity
    Status(StatusArgs),
    /// Call a service endpoint and print the JSON response
    Fetch(FetchArgs),
    /// Print the full URL for a path and query
    Url(UrlArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every command that talks to the service
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "hookdash.toml")]
    pub config: PathBuf,

    /// Override the service base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Number of recent activity items to show
    #[arg(long)]
    pub limit: Option<u32>,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Endpoint path (e.g., /status/stats)
    pub path: String,

    /// Query parameter as key=value (repeatable)
    #[arg(short, long = "query", value_name = "KEY=VALUE")]
    pub query: Vec<QueryPair>,

    /// HTTP method
    #[arg(short = 'X', long, default_value = "GET")]
    pub method: String,

    /// Request header as 'Name: value' (repeatable). Any header disables the
    /// default JSON content type.
    #[arg(short = 'H', long = "header", value_name = "NAME: VALUE")]
    pub headers: Vec<String>,

    /// Request body
    #[arg(short, long)]
    pub data: Option<String>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Endpoint path
    pub path: String,

    /// Query parameter as key=value (repeatable)
    #[arg(short, long = "query", value_name = "KEY=VALUE")]
    pub query: Vec<QueryPair>,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "hookdash.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,

    /// Service base URL to write into the file
    #[arg(long)]
    pub api_url: Option<String>,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Load configuration with CLI overrides
///
/// A missing config file is not an error; defaults are used instead.
pub fn load_config_with_overrides(
    args: &ConnectionArgs,
) -> Result<DashboardConfig, Box<dyn std::error::Error>> {
    let mut config = if args.config.exists() {
        DashboardConfig::load(Some(&args.config))?
    } else {
        tracing::debug!(path = %args.config.display(), "Config file not found, using defaults");
        DashboardConfig::default()
    };

    config = config.with_env_overrides();

    if let Some(ref url) = args.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.api.timeout_seconds = timeout;
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::QueryValue;
    use clap::Parser;
    use tempfile::NamedTempFile;

    fn connection(config: PathBuf) -> ConnectionArgs {
        ConnectionArgs {
            config,
            api_url: None,
            timeout: None,
            log_level: None,
        }
    }

    #[test]
    fn test_cli_parse_status_defaults() {
        let cli = Cli::try_parse_from(["hookdash", "status"]).unwrap();
        match cli.command {
            Commands::Status(args) => {
                assert!(!args.json);
                assert!(args.limit.is_none());
                assert_eq!(args.connection.config, PathBuf::from("hookdash.toml"));
            }
            _ => panic!("Expected Status command"),
        }
    }

    #[test]
    fn test_cli_parse_status_with_overrides() {
        let cli = Cli::try_parse_from([
            "hookdash",
            "status",
            "--json",
            "--limit",
            "10",
            "--api-url",
            "https://hooks.example.com",
        ])
        .unwrap();
        match cli.command {
            Commands::Status(args) => {
                assert!(args.json);
                assert_eq!(args.limit, Some(10));
                assert_eq!(
                    args.connection.api_url.as_deref(),
                    Some("https://hooks.example.com")
                );
            }
            _ => panic!("Expected Status command"),
        }
    }

    #[test]
    fn test_cli_parse_fetch_with_query_and_headers() {
        let cli = Cli::try_parse_from([
            "hookdash",
            "fetch",
            "/status/activity",
            "-q",
            "limit=5",
            "-q",
            "type=delivery_attempt",
            "-H",
            "X-Trace: 1",
            "-X",
            "POST",
        ])
        .unwrap();
        match cli.command {
            Commands::Fetch(args) => {
                assert_eq!(args.path, "/status/activity");
                assert_eq!(args.query.len(), 2);
                assert_eq!(args.query[0].value, QueryValue::Text("5".to_string()));
                assert_eq!(args.headers, vec!["X-Trace: 1".to_string()]);
                assert_eq!(args.method, "POST");
            }
            _ => panic!("Expected Fetch command"),
        }
    }

    #[test]
    fn test_cli_parse_fetch_bad_query_rejected() {
        let result = Cli::try_parse_from(["hookdash", "fetch", "/x", "-q", "novalue"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_url() {
        let cli = Cli::try_parse_from(["hookdash", "url", "health"]).unwrap();
        assert!(matches!(cli.command, Commands::Url(_)));
    }

    #[test]
    fn test_cli_parse_config_init() {
        let cli = Cli::try_parse_from(["hookdash", "config", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Config(ConfigCommands::Init(args)) => assert!(args.force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[api]\nactivity_limit = 12").unwrap();

        let config = load_config_with_overrides(&connection(temp.path().to_path_buf())).unwrap();
        assert_eq!(config.api.activity_limit, 12);
    }

    #[test]
    fn test_load_config_cli_overrides_file() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(
            temp.path(),
            "[api]\nbase_url = \"http://file.example.com\"\ntimeout_seconds = 3",
        )
        .unwrap();

        let mut args = connection(temp.path().to_path_buf());
        args.timeout = Some(30);
        args.log_level = Some("debug".to_string());

        let config = load_config_with_overrides(&args).unwrap();
        assert_eq!(config.api.timeout_seconds, 30); // CLI wins
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_config_without_file() {
        let config =
            load_config_with_overrides(&connection(PathBuf::from("nonexistent.toml"))).unwrap();
        assert_eq!(config.api.activity_limit, 5); // Default
    }

    #[test]
    fn test_load_config_rejects_invalid_url() {
        let mut args = connection(PathBuf::from("nonexistent.toml"));
        args.api_url = Some("not a url".to_string());

        assert!(load_config_with_overrides(&args).is_err());
    }
}
