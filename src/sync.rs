// Sync controller.
// Decides between cached data and a full refetch, and owns the paging loop.

use tracing::debug;

use crate::cache::StarCache;
use crate::error::Result;
use crate::github::{GitHubClient, StarredRepo};
use crate::output;

/// Produce the up-to-date record collection for a user.
///
/// With flush, the cache entry is emptied and rebuilt from a full fetch.
/// Otherwise the cache is used when it holds parseable data; a missing,
/// empty, or corrupt entry triggers the same full fetch-and-write. Every
/// fetching path reads the written cache back, so the in-memory view is
/// always the deserialized persisted view.
pub async fn load_stars(
    client: &GitHubClient,
    cache: &StarCache,
    username: &str,
    flush: bool,
) -> Result<Vec<StarredRepo>> {
    if flush {
        if cache.exists(username) {
            cache.clear(username)?;
        } else {
            cache.create(username)?;
        }
        let stars = fetch_all(client, username).await?;
        cache.write(username, &stars)?;
    } else if cache.load(username).is_none() {
        cache.create(username)?;
        let stars = fetch_all(client, username).await?;
        cache.write(username, &stars)?;
    } else {
        debug!("using cached stars for {}", username);
    }

    Ok(cache.read(username))
}

/// Fetch every page of a user's starred repositories, in page order.
///
/// The page count comes from page 1's Link header; a single failed page
/// aborts the whole run.
async fn fetch_all(client: &GitHubClient, username: &str) -> Result<Vec<StarredRepo>> {
    output::progress("Fetching page 1...");
    let first = client.fetch_starred_page(username, 1).await?;
    let last_page = first.last_page.unwrap_or(1);

    let mut stars = first.repos;
    for page in 2..=last_page {
        output::progress(&format!("Fetching page {} of {}...", page, last_page));
        let next = client.fetch_starred_page(username, page).await?;
        stars.extend(next.repos);
    }

    output::progress_done("Fetch complete");
    Ok(stars)
}
