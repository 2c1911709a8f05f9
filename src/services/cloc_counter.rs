use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

use crate::errors::{GitlocError, GitlocResult};
use crate::traits::line_counter::LineCounter;

/// Line counter backed by the external `cloc` executable in JSON mode.
pub struct ClocCounter {
    timeout: Duration,
}

impl ClocCounter {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl LineCounter for ClocCounter {
    async fn count(
        &self,
        tree: &Path,
        include_extensions: Option<&[String]>,
    ) -> GitlocResult<HashMap<String, serde_json::Value>> {
        let mut command = Command::new("cloc");
        command.arg("--json").arg("--quiet");
        if let Some(extensions) = include_extensions {
            command.arg(format!("--include-ext={}", extensions.join(",")));
        }
        command.arg(tree);

        let output = timeout(self.timeout, command.output())
            .await
            .map_err(|_| GitlocError::system_error("cloc", "operation timed out"))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitlocError::system_error("cloc", stderr.trim()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() {
            // cloc emits nothing when no countable files match.
            return Ok(HashMap::new());
        }

        Ok(serde_json::from_str(stdout.trim())?)
    }
}
