//! go-stats - pipeline statistics for a GoCD server configuration

pub mod cli;
pub mod core;
pub mod execution;
pub mod fetch;

// Re-export commonly used types
pub use crate::core::{Cruise, Pipeline, PipelineGroup, ConfigStats, TemplateCounts, ParseError};
pub use crate::execution::{StatsEngine, StatsReport};
pub use crate::fetch::{ConfigFetcher, FetchConfig, FetchError, HttpConfigFetcher};
