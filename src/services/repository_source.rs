use std::sync::Arc;

use crate::config::constants::PAGE_SIZE;
use crate::structs::config::config::Config;
use crate::structs::discovery::Discovery;
use crate::structs::repository_descriptor::RepositoryDescriptor;
use crate::traits::repository_listing_client::RepositoryListingClient;

/// Paginated discovery and filtering of the account's repositories.
pub struct RepositorySource {
    client: Arc<dyn RepositoryListingClient>,
}

impl RepositorySource {
    pub fn new(client: Arc<dyn RepositoryListingClient>) -> Self {
        Self { client }
    }

    /// Walk the listing pages in order, keeping repositories that are owned
    /// by the configured account and match the fork/archived policies.
    ///
    /// A page error stops pagination and keeps what was collected so far
    /// (fail-open); the truncation is recorded so the report can surface it.
    pub async fn discover(&self, config: &Config) -> Discovery {
        let mut discovery = Discovery::default();
        let mut page = 1u32;

        loop {
            let entries = match self
                .client
                .list_page(config.include_private, page, PAGE_SIZE)
                .await
            {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("⚠️ Repository listing stopped on page {}: {}", page, e);
                    log::warn!(
                        "   Keeping the {} repositories collected so far.",
                        discovery.repositories.len()
                    );
                    discovery.truncated = true;
                    break;
                }
            };

            let fetched = entries.len();
            discovery
                .repositories
                .extend(entries.into_iter().filter(|repo| Self::keep(config, repo)));

            // A short or empty page is the last one.
            if (fetched as u32) < PAGE_SIZE {
                break;
            }
            page += 1;
        }

        discovery
    }

    fn keep(config: &Config, repo: &RepositoryDescriptor) -> bool {
        repo.owner.login == config.account
            && (config.include_forks || !repo.fork)
            && (config.include_archived || !repo.archived)
    }
}
