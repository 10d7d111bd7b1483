//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `scorecache lookup <url>...` - Look up scores through the cache
//! - `scorecache review <url>` - Request a manual review of a domain
//! - `scorecache cache list|show|stats|prune|clear` - Inspect stored records
//! - `scorecache domain <url>...` - Print registrable domains
//! - `scorecache bridge` - Serve JSON messages over stdin/stdout
//! - `scorecache config show|init` - Manage settings

mod bridge;
mod cache;
mod config;
mod domain;
mod lookup;
mod review;

pub use bridge::BridgeCommand;
pub use cache::{CacheAction, CacheCommand};
pub use config::{ConfigAction, ConfigCommand};
pub use domain::DomainCommand;
pub use lookup::LookupCommand;
pub use review::ReviewCommand;

use crate::cache::ScoreCache;
use crate::client::ScoreClient;
use crate::config::{Paths, Settings};
use crate::error::CliResult;
use crate::storage::JsonStore;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

/// scorecache - a local cache for domain privacy scores.
///
/// Looks up a domain's score from the remote scoring service and keeps it
/// on disk, refetching scored domains after 30 days and unscored domains
/// after 1 day by default.
#[derive(Parser, Debug)]
#[command(name = "scorecache")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Local cache for domain privacy scores", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding cached score records
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Scoring API origin
    #[arg(long, global = true, value_name = "URL", env = "SCORECACHE_BASE_URL")]
    pub base_url: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up the score for one or more URLs
    #[command(alias = "l")]
    Lookup(LookupCommand),

    /// Request a manual review of a URL's domain
    #[command(alias = "r")]
    Review(ReviewCommand),

    /// Inspect and maintain cached records
    #[command(alias = "c")]
    Cache(CacheCommand),

    /// Print the registrable domain of one or more URLs
    #[command(alias = "d")]
    Domain(DomainCommand),

    /// Serve newline-delimited JSON messages over stdin/stdout
    Bridge(BridgeCommand),

    /// Show or initialize settings
    Config(ConfigCommand),
}

impl Cli {
    /// Run the selected subcommand.
    pub async fn run(self) -> CliResult<()> {
        let ctx = Context::from_cli(&self)?;

        match &self.command {
            Commands::Lookup(cmd) => cmd.execute(&ctx).await,
            Commands::Review(cmd) => cmd.execute(&ctx).await,
            Commands::Cache(cmd) => cmd.execute(&ctx).await,
            Commands::Domain(cmd) => cmd.execute(&ctx),
            Commands::Bridge(cmd) => cmd.execute(&ctx).await,
            Commands::Config(cmd) => cmd.execute(&ctx),
        }
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Resolved settings and paths shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: Settings,
    /// Settings file in use, whether or not it exists yet.
    pub settings_file: PathBuf,
    /// Directory holding one JSON file per domain.
    pub records_dir: PathBuf,
    pub verbose: bool,
    pub quiet: bool,
}

impl Context {
    /// Resolve settings from the global flags.
    ///
    /// The `--config` file, or else the XDG settings file, is read when it
    /// exists; defaults apply otherwise. `--base-url` overrides the file.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let paths = Paths::resolve();

        let settings_file = match (&cli.config, &paths) {
            (Some(path), _) => path.clone(),
            (None, Ok(paths)) => paths.settings_file(),
            (None, Err(_)) => PathBuf::from("settings.json"),
        };

        let mut settings = if settings_file.exists() {
            Settings::load_from(&settings_file)?
        } else {
            Settings::default()
        };

        if let Some(base_url) = &cli.base_url {
            settings.base_url = base_url.clone();
            settings.validate()?;
        }

        let records_dir = match (&cli.cache_dir, paths) {
            (Some(dir), _) => dir.clone(),
            (None, Ok(paths)) => paths.records_dir(),
            (None, Err(e)) => return Err(e.into()),
        };

        Ok(Self {
            settings,
            settings_file,
            records_dir,
            verbose: cli.verbose,
            quiet: cli.quiet,
        })
    }

    /// Open the on-disk record store.
    pub fn store(&self) -> CliResult<JsonStore> {
        Ok(JsonStore::new(&self.records_dir)?)
    }

    /// Build a cache over the on-disk store and the remote client.
    pub fn cache(&self) -> CliResult<ScoreCache> {
        let store = Arc::new(self.store()?);
        let client = Arc::new(ScoreClient::new(self.settings.client_config())?);
        Ok(ScoreCache::new(store, client, self.settings.policy()))
    }
}
