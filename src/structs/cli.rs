use crate::enums::commands::Commands;
use clap::Parser;

#[derive(Parser)]
#[clap(name = "gitloc")]
#[clap(about = "Counts lines of code across all repositories of a GitHub account", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
