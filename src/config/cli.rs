use crate::config::toml_config::RailConfig;
use crate::core::output::OutputFormat;
use crate::core::Category;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "irish-rail")]
#[command(about = "Query the Irish Rail realtime API")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "API base URL (overrides the configuration file)")]
    pub base_url: Option<String>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, value_enum, help = "Output format [default: json]")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List all stations
    Stations {
        #[arg(long, value_parser = parse_category, help = "mainline, suburban or dart")]
        category: Option<Category>,
    },
    /// List trains currently running
    Trains {
        #[arg(long, value_parser = parse_category, help = "mainline, suburban or dart")]
        category: Option<Category>,
    },
    /// Trains due at a station, looked up by name
    ByName {
        name: String,
        #[arg(long, help = "Minutes ahead to look")]
        minutes: Option<u32>,
    },
    /// Trains due at a station, looked up by station code
    ByCode {
        code: String,
        #[arg(long, help = "Minutes ahead to look")]
        minutes: Option<u32>,
    },
}

fn parse_category(value: &str) -> Result<Category> {
    value.parse()
}

impl CliConfig {
    /// Configuration file (or defaults) with command-line flags applied on top.
    pub fn resolve(&self) -> Result<RailConfig> {
        let mut config = match &self.config {
            Some(path) => RailConfig::from_file(path)?,
            None => RailConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        Ok(config)
    }
}
