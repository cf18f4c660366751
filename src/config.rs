use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Log levels as defined in log2 crate
#[derive(Debug, Serialize, Deserialize, Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Program arguments. The crawl-specific subset gets translated into an
/// `EngineConfig` by the runner.
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Seed URL to start crawling from
    #[arg(short, long)]
    pub seed_url: String,
    /// Maximum number of visit attempts for the run
    #[arg(long, default_value = "10")]
    pub max_visits: usize,
    /// Delay before every request in milliseconds
    #[arg(short, long, default_value = "500")]
    pub request_delay: u64,
    /// Deny-list patterns; a link containing any of these is never enqueued
    #[arg(long, value_delimiter = ',')]
    pub deny: Vec<String>,
    /// Allow-list patterns; when non-empty, a link must contain one of these
    #[arg(long, value_delimiter = ',')]
    pub allow: Vec<String>,
    /// Per-request timeout in seconds
    #[arg(long, default_value = "2")]
    pub timeout: u64,
    /// Output file for the visited page list
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", value_enum)]
    pub log_level: LogLevel,
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if Url::parse(&self.seed_url).is_err() {
            anyhow::bail!("seed_url is not a valid URL: {}", self.seed_url);
        }
        if self.max_visits == 0 {
            anyhow::bail!("max_visits must be greater than 0");
        }
        Ok(())
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}
