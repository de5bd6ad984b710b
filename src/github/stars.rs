// Starred-listing and README endpoints.
// One listing page per call; the Link header on page 1 reveals the page count.

use reqwest::StatusCode;
use reqwest::header::LINK;
use tracing::debug;
use url::Url;

use crate::error::Result;
use crate::output;

use super::client::GitHubClient;
use super::types::{RawStarredRepo, StarredRepo};

/// Repositories per listing page.
pub const PER_PAGE: u32 = 50;

/// One page of starred repositories.
#[derive(Debug)]
pub struct StarsPage {
    pub repos: Vec<StarredRepo>,
    /// Total page count from the Link header; populated on page 1 only.
    pub last_page: Option<u32>,
}

impl GitHubClient {
    /// Fetch one page of a user's starred repositories, resolving each
    /// entry's README as it is mapped.
    pub async fn fetch_starred_page(&self, username: &str, page: u32) -> Result<StarsPage> {
        let params = [
            ("per_page", PER_PAGE.to_string()),
            ("page", page.to_string()),
        ];
        let response = self
            .get_with_params(&format!("/users/{}/starred", username), &params)
            .await?;

        let last_page = if page == 1 {
            response
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_last_page)
        } else {
            None
        };

        let raw: Vec<RawStarredRepo> = response.json().await?;

        let mut repos = Vec::with_capacity(raw.len());
        for entry in raw {
            output::progress(&format!("Fetching README.md for {}...", entry.full_name));
            let readme = self
                .fetch_readme(&entry.full_name, &entry.default_branch)
                .await;
            repos.push(entry.into_record(readme));
        }

        Ok(StarsPage { repos, last_page })
    }

    /// Fetch a repository's README from the raw content host.
    ///
    /// Anything but a 200 — including a transport failure — means "no README"
    /// and degrades that one record to an empty readme.
    pub async fn fetch_readme(&self, full_name: &str, default_branch: &str) -> String {
        let url = format!("{}/{}/{}/README.md", self.raw_base, full_name, default_branch);

        match self.client.get(&url).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                response.text().await.unwrap_or_default()
            }
            Ok(response) => {
                debug!("no README for {} ({})", full_name, response.status());
                String::new()
            }
            Err(err) => {
                debug!("README fetch failed for {}: {}", full_name, err);
                String::new()
            }
        }
    }
}

/// Extract the last page number from a Link header value.
///
/// The header lists related-page URLs like
/// `<https://api.github.com/...?page=4>; rel="last"`; the page count is the
/// `page` query parameter of the URL tagged `rel="last"`.
fn parse_last_page(header: &str) -> Option<u32> {
    header.split(',').find_map(|part| {
        let (target, params) = part.split_once(';')?;
        if !params.contains(r#"rel="last""#) {
            return None;
        }

        let target = target.trim().trim_start_matches('<').trim_end_matches('>');
        let url = Url::parse(target).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok())
    })
}
