//! Command-line interface

pub mod output;

use crate::fetch::http::{FetchConfig, DEFAULT_URL};
use clap::Parser;
use std::ffi::OsString;

/// Pipeline statistics for a GoCD server
#[derive(Debug, Parser, Clone)]
#[command(name = "go-stats")]
#[command(version = "0.1.0")]
#[command(about = "Counts the pipelines in a GoCD config file", long_about = None)]
pub struct Cli {
    /// The url of the GoCD config file
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// The user for authentication to get the config file
    #[arg(long, default_value = "user")]
    pub user: String,

    /// The password for the user
    #[arg(long, default_value = "pwd")]
    pub pwd: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }

    /// Fetcher configuration described by the flags
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig::new()
            .with_url(&self.url)
            .with_credentials(&self.user, &self.pwd)
    }
}
