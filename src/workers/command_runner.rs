use std::sync::Arc;
use std::time::Instant;
use tokio::process::Command;

use crate::config::config_manager::ConfigManager;
use crate::config::constants::LANGUAGE_EXTENSIONS;
use crate::enums::commands::Commands;
use crate::errors::{GitlocError, GitlocResult};
use crate::services::cloc_counter::ClocCounter;
use crate::services::git_cli::GitCli;
use crate::services::github_client::GithubClient;
use crate::services::report_renderer::ReportRenderer;
use crate::services::repository_analyzer::RepositoryAnalyzer;
use crate::services::repository_source::RepositorySource;
use crate::services::result_aggregator::ResultAggregator;
use crate::structs::aggregate_state::AggregateState;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> GitlocResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Analyze {
                token,
                account,
                output,
                languages,
                exclude_private,
                include_forks,
                include_archived,
                timeout_secs,
                scratch_root,
            } => {
                let config = ConfigManager::build(
                    token,
                    account,
                    output,
                    languages,
                    exclude_private,
                    include_forks,
                    include_archived,
                    timeout_secs,
                    scratch_root,
                )?;
                self.analyze_command(config).await
            }
            Commands::Languages => self.languages_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn analyze_command(&self, config: Config) -> GitlocResult<()> {
        Self::check_tool("git").await?;
        Self::check_tool("cloc").await?;

        log::info!("🌍 Discovering repositories for account '{}'...", config.account);
        let listing = Arc::new(GithubClient::new(&config)?);
        let source = RepositorySource::new(listing);
        let discovery = source.discover(&config).await;

        if discovery.repositories.is_empty() {
            log::info!("⚠️ No repositories matched the configured filters.");
        } else {
            log::info!("📦 {} repositories to analyze", discovery.repositories.len());
        }

        let analyzer = RepositoryAnalyzer::new(
            Arc::new(GitCli::new(config.timeout_secs)),
            Arc::new(ClocCounter::new(config.timeout_secs)),
        );

        let mut state = AggregateState::new();
        for descriptor in &discovery.repositories {
            let result = analyzer.analyze(&config, descriptor).await;
            ResultAggregator::accumulate(&mut state, result);
        }

        let report = ReportRenderer::render(&config, &state, discovery.truncated);
        tokio::fs::write(&config.output_path, report).await?;

        log::info!(
            "✅ Analyzed {} repositories ({} skipped)",
            state.processed.len(),
            state.skipped.len()
        );
        log::info!("📊 Report written to {}", config.output_path.display());

        Ok(())
    }

    fn languages_command(&self) -> GitlocResult<()> {
        let mut entries: Vec<_> = LANGUAGE_EXTENSIONS.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        println!("{:<15} extension", "language");
        for (language, extension) in entries {
            println!("{:<15} {}", language, extension);
        }

        Ok(())
    }

    async fn check_tool(name: &str) -> GitlocResult<()> {
        let available = Command::new(name)
            .arg("--version")
            .output()
            .await
            .map(|output| output.status.success())
            .unwrap_or(false);

        if available {
            Ok(())
        } else {
            let message = format!("required tool '{}' is not available", name);
            let suggestion = format!("install '{}' and make sure it is on PATH", name);
            Err(GitlocError::config_error(&message, None, Some(suggestion.as_str())))
        }
    }
}
