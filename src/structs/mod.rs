pub mod aggregate_state;
pub mod analysis_result;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod language_stats;
pub mod repository_descriptor;
