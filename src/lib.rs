pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::RailConfig;
pub use crate::core::{
    client::IrishRailClient,
    http::HttpFetcher,
    output::OutputFormat,
    Category, Record, RecordKind,
};
pub use crate::utils::error::{RailError, Result};
