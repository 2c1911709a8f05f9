use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::constants::{GITHUB_API_BASE, USER_AGENT};
use crate::errors::{GitlocError, GitlocResult};
use crate::structs::config::config::Config;
use crate::structs::repository_descriptor::RepositoryDescriptor;
use crate::traits::repository_listing_client::RepositoryListingClient;

pub struct GithubClient {
    client: Client,
    base_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(config: &Config) -> GitlocResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: GITHUB_API_BASE.to_string(),
            token: config.token.clone(),
        })
    }
}

#[async_trait]
impl RepositoryListingClient for GithubClient {
    async fn list_page(
        &self,
        include_private: bool,
        page: u32,
        per_page: u32,
    ) -> GitlocResult<Vec<RepositoryDescriptor>> {
        let url = format!("{}/user/repos", self.base_url);
        let repo_type = if include_private { "all" } else { "public" };

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .query(&[
                ("type", repo_type.to_string()),
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
                ("sort", "updated".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitlocError::NetworkError {
                operation: "repository listing".to_string(),
                url: Some(url),
                status_code: Some(status.as_u16()),
                reason: format!("unexpected status {}", status),
            });
        }

        Ok(response.json().await?)
    }
}
