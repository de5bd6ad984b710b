// Cache path utilities.
// Builds per-user cache file locations under the platform cache directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/findstar on macOS/Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "findstar").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the cache file holding one user's starred repositories.
pub fn user_cache_path(root: &Path, username: &str) -> PathBuf {
    root.join(format!("{}.json", sanitize_name(username)))
}

/// Create the cache directory if it is absent.
/// On Unix the directory is left owner-writable only (mode 0o755).
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.is_dir() {
        fs::create_dir_all(path)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
        }
    }
    Ok(())
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
