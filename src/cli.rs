// Command-line interface.
// Username, keyword, and mode flags; nothing else is configurable here.

use clap::Parser;

use crate::search::MatchMode;

/// Grep over your GitHub starred repositories.
#[derive(Debug, Parser)]
#[command(name = "findstar", version)]
pub struct Cli {
    /// GitHub username whose stars to search
    #[arg(short, long)]
    pub username: String,

    /// Refresh the cache before searching
    #[arg(short, long)]
    pub flush: bool,

    /// Match keywords using AND instead of OR
    #[arg(short = 'a', long = "and")]
    pub match_all: bool,

    /// Strings to grep for
    pub greps: Vec<String>,
}

impl Cli {
    /// Record-inclusion mode selected by the flags.
    pub fn mode(&self) -> MatchMode {
        if self.match_all {
            MatchMode::All
        } else {
            MatchMode::Any
        }
    }
}
