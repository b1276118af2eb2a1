use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{MirrorError, Result};

/// Environment variable naming the credential key file
pub const CREDENTIALS_ENV_VAR: &str = "BUCKET_MIRROR_CREDENTIALS";

/// Key file location under the home directory when nothing else is given
pub const DEFAULT_KEY_FILE: &str = ".config/bucket-mirror/hmac_credentials.json";

pub const CREDENTIALS_HINT: &str = "Set the BUCKET_MIRROR_CREDENTIALS environment variable to the path of your key file:\n  export BUCKET_MIRROR_CREDENTIALS=/path/to/your/keyfile.json";

/// How the storage client obtains credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Provider chain from the environment and shared profile
    DefaultChain,
    /// HMAC key pair read from a JSON key file
    KeyFile(PathBuf),
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyFile {
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Pick the key file path: explicit flag, then environment, then the home default.
///
/// `env_value` is the current value of [`CREDENTIALS_ENV_VAR`], passed in so
/// callers decide where the environment comes from.
pub fn resolve_key_file_path(explicit: Option<&Path>, env_value: Option<String>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return Some(PathBuf::from(value));
    }
    home::home_dir().map(|home| home.join(DEFAULT_KEY_FILE))
}

impl CredentialSource {
    /// Build the key-file source, failing early when the file is absent.
    ///
    /// # Errors
    ///
    /// Returns `MissingKeyFile` if the resolved path does not exist, or a
    /// credential error if no path could be resolved at all.
    pub fn key_file(explicit: Option<&Path>, env_value: Option<String>) -> Result<Self> {
        let path = resolve_key_file_path(explicit, env_value).ok_or_else(|| {
            MirrorError::Credentials("Home directory could not be determined.".to_string())
        })?;
        if !path.is_file() {
            return Err(MirrorError::MissingKeyFile(path));
        }
        Ok(Self::KeyFile(path))
    }

    pub fn describe(&self) -> String {
        match self {
            Self::DefaultChain => "default credential chain".to_string(),
            Self::KeyFile(path) => format!("key file {}", path.display()),
        }
    }
}

impl KeyFile {
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or has empty keys.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let key_file: Self = serde_json::from_str(&content).map_err(|e| {
            MirrorError::Credentials(format!("Invalid key file {}: {e}", path.display()))
        })?;
        if key_file.access_key_id.trim().is_empty() || key_file.secret_access_key.trim().is_empty() {
            return Err(MirrorError::Credentials(format!(
                "Key file {} has an empty access key",
                path.display()
            )));
        }
        Ok(key_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins_over_environment() {
        let resolved = resolve_key_file_path(
            Some(Path::new("/etc/keys.json")),
            Some("/tmp/env.json".to_string()),
        );
        assert_eq!(resolved, Some(PathBuf::from("/etc/keys.json")));
    }

    #[test]
    fn environment_wins_over_default() {
        let resolved = resolve_key_file_path(None, Some("/tmp/env.json".to_string()));
        assert_eq!(resolved, Some(PathBuf::from("/tmp/env.json")));
    }

    #[test]
    fn blank_environment_falls_back_to_home() {
        let resolved = resolve_key_file_path(None, Some("  ".to_string()));
        if let Some(home) = home::home_dir() {
            assert_eq!(resolved, Some(home.join(DEFAULT_KEY_FILE)));
        }
    }

    #[test]
    fn missing_key_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = CredentialSource::key_file(Some(&path), None).unwrap_err();
        assert!(matches!(err, MirrorError::MissingKeyFile(p) if p == path));
    }
}
