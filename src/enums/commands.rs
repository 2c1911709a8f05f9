use crate::config::constants::{DEFAULT_OUTPUT_PATH, DEFAULT_TIMEOUT_SECS};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Discover, clone and measure every repository of an account
    Analyze {
        /// GitHub token; falls back to the GITHUB_TOKEN environment variable
        #[clap(short, long)]
        token: Option<String>,
        /// Account login whose repositories are analyzed
        #[clap(short, long)]
        account: String,
        /// Path of the rendered report
        #[clap(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: String,
        /// Restrict counting to these languages (by name)
        #[clap(short, long)]
        languages: Vec<String>,
        /// Skip private repositories
        #[clap(long)]
        exclude_private: bool,
        /// Include forked repositories
        #[clap(long)]
        include_forks: bool,
        /// Include archived repositories
        #[clap(long)]
        include_archived: bool,
        /// Timeout applied to each network request and subprocess
        #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,
        /// Directory used for per-repository scratch clones
        #[clap(long)]
        scratch_root: Option<String>,
    },
    /// Print the built-in language to file-extension table
    Languages,
}
