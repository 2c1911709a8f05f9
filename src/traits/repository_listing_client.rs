use async_trait::async_trait;

use crate::errors::GitlocResult;
use crate::structs::repository_descriptor::RepositoryDescriptor;

/// One page of the account's repository listing, in API order.
#[async_trait]
pub trait RepositoryListingClient: Send + Sync {
    async fn list_page(
        &self,
        include_private: bool,
        page: u32,
        per_page: u32,
    ) -> GitlocResult<Vec<RepositoryDescriptor>>;
}
