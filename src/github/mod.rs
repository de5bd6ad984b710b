// GitHub API module.
// Client, starred-listing endpoints, and response types.

pub mod client;
pub mod stars;
pub mod types;

pub use client::GitHubClient;
pub use stars::{PER_PAGE, StarsPage};
pub use types::{RawStarredRepo, StarredRepo};
