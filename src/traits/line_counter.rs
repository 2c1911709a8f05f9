use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

use crate::errors::GitlocResult;

/// Measures a filesystem tree and returns the counter's raw mapping keyed by
/// language name. The mapping may contain `header`/`SUM` pseudo-entries; the
/// analyzer is responsible for discarding them.
#[async_trait]
pub trait LineCounter: Send + Sync {
    async fn count(
        &self,
        tree: &Path,
        include_extensions: Option<&[String]>,
    ) -> GitlocResult<HashMap<String, serde_json::Value>>;
}
