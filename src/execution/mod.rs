//! Stats execution engine

pub mod engine;

pub use engine::{StatsEngine, StatsReport};
