pub mod cloc_counter;
pub mod git_cli;
pub mod github_client;
pub mod report_renderer;
pub mod repository_analyzer;
pub mod repository_source;
pub mod result_aggregator;
