// Application run sequence.
// Wires the client, cache, sync controller, filter, and presenter together.

use crate::cache::StarCache;
use crate::cli::Cli;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::{output, search, sync};

/// Fetch or load the user's stars, filter them, and print the matches.
pub async fn run(cli: Cli) -> Result<()> {
    let client = GitHubClient::from_env()?;
    let cache = StarCache::open_default()?;

    let stars = sync::load_stars(&client, &cache, &cli.username, cli.flush).await?;
    let matches = search::filter_stars(&stars, &cli.greps, cli.mode());

    output::display_matches(&matches, &cli.greps);

    Ok(())
}
