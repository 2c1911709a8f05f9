use crate::structs::cli::Cli;
use crate::workers::command_runner::CommandRunner;
use clap::Parser;

mod config;
mod enums;
mod errors;
mod helpers;
mod services;
mod structs;
mod traits;
mod workers;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    if let Err(e) = runner.run_command(cli.command).await {
        log::error!("❌ {}", e);
        return Err(e.into());
    }

    Ok(())
}
