//! Stats engine - fetches, decodes and aggregates one configuration

use crate::{
    core::{parse_config, ConfigStats, ParseError},
    fetch::{ConfigFetcher, FetchError},
};
use tracing::{debug, info};

/// Outcome of a run that managed to fetch a document
#[derive(Debug, Default)]
pub struct StatsReport {
    /// Statistics over whatever could be decoded
    pub stats: ConfigStats,

    /// Decoding failure, if the document was malformed
    pub decode_error: Option<ParseError>,
}

/// Runs fetch, parse and aggregation in sequence
pub struct StatsEngine<F> {
    fetcher: F,
}

impl<F: ConfigFetcher> StatsEngine<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Run the whole pipeline once
    ///
    /// Only a fetch failure is an error. A decode failure yields statistics
    /// for an empty document with `decode_error` set.
    pub async fn run(&self) -> Result<StatsReport, FetchError> {
        let data = self.fetcher.fetch().await?;
        info!("Fetched config ({} bytes)", data.len());

        let parsed = parse_config(&data);
        let stats = ConfigStats::from_config(&parsed.config);
        debug!(
            "Found {} pipelines in {} groups",
            stats.pipelines, stats.pipeline_groups
        );

        Ok(StatsReport {
            stats,
            decode_error: parsed.error,
        })
    }
}
