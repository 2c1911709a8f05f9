use std::path::PathBuf;

/// Immutable run configuration, constructed once from CLI flags and the
/// environment and passed explicitly into every component.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub account: String,
    pub include_private: bool,
    pub include_forks: bool,
    pub include_archived: bool,
    pub output_path: PathBuf,
    pub language_filter: Option<Vec<String>>,
    pub scratch_root: PathBuf,
    pub timeout_secs: u64,
}
