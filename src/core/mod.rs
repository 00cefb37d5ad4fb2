//! Core domain models for the GoCD configuration
//!
//! This module defines the parsed document, how it is decoded from XML,
//! and the statistics computed over it.

pub mod document;
pub mod parser;
pub mod stats;

pub use document::*;
pub use parser::{parse_config, ParseError, ParsedConfig};
pub use stats::*;
