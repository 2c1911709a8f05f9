use crate::structs::repository_descriptor::RepositoryDescriptor;

/// Outcome of the discovery phase. `truncated` records that a listing page
/// failed and pagination stopped early with partial results.
#[derive(Debug, Default)]
pub struct Discovery {
    pub repositories: Vec<RepositoryDescriptor>,
    pub truncated: bool,
}
