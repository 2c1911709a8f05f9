use async_trait::async_trait;
use std::path::Path;

use crate::errors::GitlocResult;

#[async_trait]
pub trait SourceControlClient: Send + Sync {
    /// Clone only the given branch at history depth 1 into `target`.
    async fn shallow_clone(&self, clone_url: &str, branch: &str, target: &Path) -> GitlocResult<()>;
}
