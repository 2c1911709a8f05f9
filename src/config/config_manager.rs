use std::env;
use std::path::PathBuf;

use crate::errors::{GitlocError, GitlocResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    /// Build the single immutable run configuration from the analyze
    /// subcommand's flags, falling back to the environment for the token.
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        token: Option<String>,
        account: String,
        output: String,
        languages: Vec<String>,
        exclude_private: bool,
        include_forks: bool,
        include_archived: bool,
        timeout_secs: u64,
        scratch_root: Option<String>,
    ) -> GitlocResult<Config> {
        let token = token
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                GitlocError::config_error(
                    "no GitHub token supplied",
                    Some("token"),
                    Some("pass --token or set the GITHUB_TOKEN environment variable"),
                )
            })?;

        if account.trim().is_empty() {
            return Err(GitlocError::config_error(
                "account login must not be empty",
                Some("account"),
                None,
            ));
        }

        let language_filter = if languages.is_empty() {
            None
        } else {
            Some(languages)
        };

        let scratch_root = scratch_root
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join("gitloc"));

        Ok(Config {
            token,
            account,
            include_private: !exclude_private,
            include_forks,
            include_archived,
            output_path: PathBuf::from(output),
            language_filter,
            scratch_root,
            timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_with_token(token: Option<String>) -> GitlocResult<Config> {
        ConfigManager::build(
            token,
            "octocat".to_string(),
            "out.txt".to_string(),
            vec![],
            false,
            false,
            false,
            300,
            None,
        )
    }

    #[test]
    fn missing_token_is_a_fatal_configuration_error() {
        // The env fallback would mask the failure when GITHUB_TOKEN is set.
        if env::var("GITHUB_TOKEN").is_ok() {
            return;
        }
        let err = build_with_token(None).unwrap_err();
        assert!(matches!(err, GitlocError::ConfigurationError { .. }));
    }

    #[test]
    fn flag_token_wins_and_defaults_apply() {
        let config = build_with_token(Some("tkn".to_string())).unwrap();
        assert_eq!(config.token, "tkn");
        assert!(config.include_private);
        assert!(!config.include_forks);
        assert!(!config.include_archived);
        assert!(config.language_filter.is_none());
    }

    #[test]
    fn exclude_private_selects_public_listing() {
        let config = ConfigManager::build(
            Some("tkn".to_string()),
            "octocat".to_string(),
            "out.txt".to_string(),
            vec!["Rust".to_string()],
            true,
            true,
            true,
            60,
            Some("/tmp/scratch".to_string()),
        )
        .unwrap();
        assert!(!config.include_private);
        assert!(config.include_forks);
        assert!(config.include_archived);
        assert_eq!(config.language_filter.as_deref(), Some(&["Rust".to_string()][..]));
        assert_eq!(config.scratch_root, PathBuf::from("/tmp/scratch"));
    }
}
