// GitHub API response types.
// Raw deserialization shapes and the normalized record kept in the cache.

use serde::{Deserialize, Serialize};

/// Owner block within a starred-listing entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOwner {
    pub login: String,
}

/// One entry of the starred listing as the API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStarredRepo {
    pub id: u64,
    pub name: String,
    pub owner: RawOwner,
    pub full_name: String,
    pub html_url: String,
    pub default_branch: String,
    pub description: Option<String>,
}

/// A starred repository as cached and searched.
///
/// An empty readme means "fetched, nothing there"; it is never null in the
/// cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarredRepo {
    pub id: u64,
    pub name: String,
    pub owner: String,
    pub full_name: String,
    pub html_url: String,
    pub default_branch: String,
    pub description: Option<String>,
    pub readme: String,
}

impl RawStarredRepo {
    /// Normalize into the cached record, attaching the fetched readme.
    pub fn into_record(self, readme: String) -> StarredRepo {
        StarredRepo {
            id: self.id,
            name: self.name,
            owner: self.owner.login,
            full_name: self.full_name,
            html_url: self.html_url,
            default_branch: self.default_branch,
            description: self.description,
            readme,
        }
    }
}
