// Cache store for starred-repository data.
// One JSON file per user; corrupt or empty entries read as "no data".

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::warn;

use crate::error::{FindstarError, Result};
use crate::github::StarredRepo;

use super::paths;

/// Per-user store of starred repositories under a single cache root.
pub struct StarCache {
    root: PathBuf,
}

impl StarCache {
    /// Create a store over an explicit cache root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Open the store at the platform cache directory, creating it if needed.
    pub fn open_default() -> Result<Self> {
        let root = paths::cache_dir().ok_or(FindstarError::CacheDir)?;
        paths::ensure_dir(&root)?;
        Ok(Self::new(root))
    }

    fn user_path(&self, username: &str) -> PathBuf {
        paths::user_cache_path(&self.root, username)
    }

    /// Check whether a cache entry exists for a user.
    pub fn exists(&self, username: &str) -> bool {
        self.user_path(username).is_file()
    }

    /// Ensure an entry exists, leaving any existing content untouched.
    pub fn create(&self, username: &str) -> Result<()> {
        paths::ensure_dir(&self.root)?;
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.user_path(username))?;
        Ok(())
    }

    /// Read an entry if it holds usable data.
    ///
    /// Returns None for a missing, empty, or corrupt entry. A parseable entry
    /// with zero repositories is Some(vec![]) — the user genuinely has no stars.
    pub fn load(&self, username: &str) -> Option<Vec<StarredRepo>> {
        let path = self.user_path(username);
        let contents = fs::read_to_string(&path).ok()?;
        if contents.is_empty() {
            return None;
        }

        match serde_json::from_str(&contents) {
            Ok(stars) => Some(stars),
            Err(err) => {
                warn!("discarding corrupt cache entry {}: {}", path.display(), err);
                None
            }
        }
    }

    /// Read an entry, treating missing and corrupt data alike as empty.
    pub fn read(&self, username: &str) -> Vec<StarredRepo> {
        self.load(username).unwrap_or_default()
    }

    /// Replace an entry with the full record sequence.
    pub fn write(&self, username: &str, stars: &[StarredRepo]) -> Result<()> {
        paths::ensure_dir(&self.root)?;
        let json = serde_json::to_string_pretty(stars)?;

        // Write atomically via temp file
        let path = self.user_path(username);
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Truncate an entry to empty without deleting it.
    pub fn clear(&self, username: &str) -> Result<()> {
        fs::File::create(self.user_path(username))?;
        Ok(())
    }

    /// Remove an entry entirely.
    pub fn delete(&self, username: &str) -> Result<()> {
        let path = self.user_path(username);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
