use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::config::constants::extension_for;
use crate::enums::analysis_status::AnalysisStatus;
use crate::errors::GitlocResult;
use crate::helpers::scratch_dir::ScratchDir;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::config::Config;
use crate::structs::language_stats::LanguageStats;
use crate::structs::repository_descriptor::RepositoryDescriptor;
use crate::traits::line_counter::LineCounter;
use crate::traits::source_control_client::SourceControlClient;

/// Clones and measures one repository at a time, fully isolated: every call
/// gets its own scratch directory and failures never escape as errors, only
/// as a non-success status on the result.
pub struct RepositoryAnalyzer {
    source_control: Arc<dyn SourceControlClient>,
    line_counter: Arc<dyn LineCounter>,
}

impl RepositoryAnalyzer {
    pub fn new(
        source_control: Arc<dyn SourceControlClient>,
        line_counter: Arc<dyn LineCounter>,
    ) -> Self {
        Self {
            source_control,
            line_counter,
        }
    }

    pub async fn analyze(&self, config: &Config, descriptor: &RepositoryDescriptor) -> AnalysisResult {
        log::info!("🔍 Analyzing repository: {}", descriptor.name);

        let scratch = match ScratchDir::create(&config.scratch_root, &descriptor.name) {
            Ok(scratch) => scratch,
            Err(e) => {
                log::error!("❌ Scratch directory for '{}' failed: {}", descriptor.name, e);
                return AnalysisResult::failed(&descriptor.name, descriptor.private, AnalysisStatus::CloneFailed);
            }
        };

        if let Err(e) = self
            .source_control
            .shallow_clone(&descriptor.clone_url, &descriptor.default_branch, scratch.path())
            .await
        {
            log::error!("❌ Clone failed for '{}': {}", descriptor.name, e);
            return AnalysisResult::failed(&descriptor.name, descriptor.private, AnalysisStatus::CloneFailed);
        }

        let languages = match self.measure(config, &scratch).await {
            Ok(languages) => languages,
            Err(e) => {
                log::error!("❌ Line counting failed for '{}': {}", descriptor.name, e);
                return AnalysisResult::failed(&descriptor.name, descriptor.private, AnalysisStatus::CountFailed);
            }
        };

        let result = AnalysisResult::success(&descriptor.name, descriptor.private, languages);
        log::info!(
            "✅ {}: {} languages, {} lines of code",
            result.name,
            result.languages.len(),
            result.totals.code
        );
        result
    }

    async fn measure(
        &self,
        config: &Config,
        scratch: &ScratchDir,
    ) -> GitlocResult<BTreeMap<String, LanguageStats>> {
        let extensions = config.language_filter.as_ref().map(|languages| {
            languages
                .iter()
                .map(|language| extension_for(language))
                .collect::<Vec<_>>()
        });

        let raw = self
            .line_counter
            .count(scratch.path(), extensions.as_deref())
            .await?;

        Ok(Self::parse_language_stats(raw))
    }

    /// Drop the counter's `header`/`SUM` pseudo-entries and every language
    /// without actual code lines.
    fn parse_language_stats(raw: HashMap<String, serde_json::Value>) -> BTreeMap<String, LanguageStats> {
        let mut languages = BTreeMap::new();
        for (name, value) in raw {
            if name == "header" || name == "SUM" {
                continue;
            }
            match serde_json::from_value::<LanguageStats>(value) {
                Ok(stats) if stats.code > 0 => {
                    languages.insert(name, stats);
                }
                Ok(_) => {}
                Err(e) => {
                    log::debug!("Ignoring unparsable counter entry '{}': {}", name, e);
                }
            }
        }
        languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use tempfile::TempDir;

    use crate::errors::GitlocError;
    use crate::structs::repository_descriptor::RepositoryOwner;

    fn test_config(scratch_root: PathBuf, language_filter: Option<Vec<String>>) -> Config {
        Config {
            token: "tkn".to_string(),
            account: "octocat".to_string(),
            include_private: true,
            include_forks: false,
            include_archived: false,
            output_path: PathBuf::from("out.txt"),
            language_filter,
            scratch_root,
            timeout_secs: 30,
        }
    }

    fn descriptor(name: &str) -> RepositoryDescriptor {
        RepositoryDescriptor {
            name: name.to_string(),
            owner: RepositoryOwner {
                login: "octocat".to_string(),
            },
            default_branch: "main".to_string(),
            clone_url: format!("https://example.com/octocat/{}.git", name),
            private: false,
            fork: false,
            archived: false,
        }
    }

    struct FakeGit {
        fail: bool,
    }

    #[async_trait]
    impl SourceControlClient for FakeGit {
        async fn shallow_clone(&self, _url: &str, _branch: &str, target: &Path) -> GitlocResult<()> {
            if self.fail {
                return Err(GitlocError::system_error("git clone", "remote hung up"));
            }
            std::fs::write(target.join("lib.rs"), "fn main() {}\n")?;
            Ok(())
        }
    }

    struct FakeCounter {
        response: GitlocResult<HashMap<String, serde_json::Value>>,
        seen_extensions: Mutex<Option<Vec<String>>>,
    }

    impl FakeCounter {
        fn ok(entries: HashMap<String, serde_json::Value>) -> Self {
            Self {
                response: Ok(entries),
                seen_extensions: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(GitlocError::system_error("cloc", "crashed")),
                seen_extensions: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl LineCounter for FakeCounter {
        async fn count(
            &self,
            _tree: &Path,
            include_extensions: Option<&[String]>,
        ) -> GitlocResult<HashMap<String, serde_json::Value>> {
            *self.seen_extensions.lock().unwrap() = include_extensions.map(<[String]>::to_vec);
            self.response.clone()
        }
    }

    fn cloc_output() -> HashMap<String, serde_json::Value> {
        HashMap::from([
            (
                "header".to_string(),
                json!({"cloc_version": "1.98", "n_files": 3}),
            ),
            (
                "SUM".to_string(),
                json!({"nFiles": 3, "blank": 12, "comment": 4, "code": 150}),
            ),
            (
                "Rust".to_string(),
                json!({"nFiles": 2, "blank": 10, "comment": 3, "code": 150}),
            ),
            (
                "Markdown".to_string(),
                json!({"nFiles": 1, "blank": 2, "comment": 1, "code": 0}),
            ),
        ])
    }

    #[tokio::test]
    async fn success_drops_pseudo_entries_and_zero_code_languages() {
        let root = TempDir::new().unwrap();
        let analyzer = RepositoryAnalyzer::new(
            Arc::new(FakeGit { fail: false }),
            Arc::new(FakeCounter::ok(cloc_output())),
        );

        let config = test_config(root.path().to_path_buf(), None);
        let result = analyzer.analyze(&config, &descriptor("repo-a")).await;

        assert_eq!(result.status, AnalysisStatus::Success);
        assert_eq!(result.languages.len(), 1);
        let rust = &result.languages["Rust"];
        assert_eq!(rust.files, 2);
        assert_eq!(rust.code, 150);
        assert_eq!(result.totals.code, 150);
        assert_eq!(result.totals.files, 2);
    }

    #[tokio::test]
    async fn clone_failure_yields_clone_failed_without_language_data() {
        let root = TempDir::new().unwrap();
        let analyzer = RepositoryAnalyzer::new(
            Arc::new(FakeGit { fail: true }),
            Arc::new(FakeCounter::ok(cloc_output())),
        );

        let config = test_config(root.path().to_path_buf(), None);
        let result = analyzer.analyze(&config, &descriptor("repo-a")).await;

        assert_eq!(result.status, AnalysisStatus::CloneFailed);
        assert!(result.languages.is_empty());
        assert_eq!(result.totals, LanguageStats::default());
    }

    #[tokio::test]
    async fn count_failure_yields_count_failed() {
        let root = TempDir::new().unwrap();
        let analyzer = RepositoryAnalyzer::new(
            Arc::new(FakeGit { fail: false }),
            Arc::new(FakeCounter::failing()),
        );

        let config = test_config(root.path().to_path_buf(), None);
        let result = analyzer.analyze(&config, &descriptor("repo-a")).await;

        assert_eq!(result.status, AnalysisStatus::CountFailed);
        assert!(result.languages.is_empty());
    }

    #[tokio::test]
    async fn scratch_directory_is_removed_on_every_path() {
        let root = TempDir::new().unwrap();
        let config = test_config(root.path().to_path_buf(), None);

        let analyzer = RepositoryAnalyzer::new(
            Arc::new(FakeGit { fail: false }),
            Arc::new(FakeCounter::ok(cloc_output())),
        );
        analyzer.analyze(&config, &descriptor("repo-a")).await;
        assert!(!root.path().join("repo-a").exists());

        let failing = RepositoryAnalyzer::new(
            Arc::new(FakeGit { fail: true }),
            Arc::new(FakeCounter::ok(cloc_output())),
        );
        failing.analyze(&config, &descriptor("repo-b")).await;
        assert!(!root.path().join("repo-b").exists());
    }

    #[tokio::test]
    async fn language_filter_is_mapped_to_extensions() {
        let root = TempDir::new().unwrap();
        let counter = Arc::new(FakeCounter::ok(cloc_output()));
        let analyzer = RepositoryAnalyzer::new(
            Arc::new(FakeGit { fail: false }),
            Arc::clone(&counter) as Arc<dyn LineCounter>,
        );

        let config = test_config(
            root.path().to_path_buf(),
            Some(vec!["Rust".to_string(), "python".to_string(), "vhdl".to_string()]),
        );
        analyzer.analyze(&config, &descriptor("repo-a")).await;

        let seen = counter.seen_extensions.lock().unwrap().clone();
        assert_eq!(
            seen,
            Some(vec!["rs".to_string(), "py".to_string(), "vhdl".to_string()])
        );
    }
}
