use home::home_dir;
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
///
/// # Errors
///
/// Returns an error if the path starts with `~` and no home directory is known.
pub fn expand_tilde(path: &Path) -> Result<PathBuf, String> {
    if path.starts_with("~") {
        if let Some(home) = home_dir() {
            Ok(home.join(path.strip_prefix("~").unwrap_or(path)))
        } else {
            Err("Home directory could not be determined.".to_string())
        }
    } else {
        Ok(path.to_path_buf())
    }
}
