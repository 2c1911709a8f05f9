use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

use crate::errors::{GitlocError, GitlocResult};
use crate::traits::source_control_client::SourceControlClient;

pub struct GitCli {
    timeout: Duration,
}

impl GitCli {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl SourceControlClient for GitCli {
    async fn shallow_clone(&self, clone_url: &str, branch: &str, target: &Path) -> GitlocResult<()> {
        let mut command = Command::new("git");
        command
            .args([
                "clone",
                "--depth",
                "1",
                "--branch",
                branch,
                "--single-branch",
                "--quiet",
                clone_url,
            ])
            .arg(target);

        let output = timeout(self.timeout, command.output())
            .await
            .map_err(|_| GitlocError::system_error("git clone", "operation timed out"))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitlocError::system_error("git clone", stderr.trim()));
        }

        Ok(())
    }
}
