use serde::Deserialize;

/// Identity and cloning metadata for one remote repository, in the shape
/// returned by the GitHub repository-listing API.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryDescriptor {
    pub name: String,
    pub owner: RepositoryOwner,
    pub default_branch: String,
    pub clone_url: String,
    pub private: bool,
    pub fork: bool,
    pub archived: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
}

impl RepositoryDescriptor {
    pub fn visibility(&self) -> &'static str {
        if self.private {
            "private"
        } else {
            "public"
        }
    }
}
