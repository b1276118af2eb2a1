use super::expansion::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// Checks if a file is readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    let expanded_path = expand_tilde(&path)?;

    if expanded_path.is_file() && fs::metadata(&expanded_path).is_ok() {
        Ok(expanded_path)
    } else {
        Err(format!("The file '{file}' is not readable."))
    }
}

/// Checks that a file is readable and parses as YAML
pub fn check_yaml_file(file: &str) -> Result<PathBuf, String> {
    let path = check_readable_file(file)?;
    let content =
        fs::read_to_string(&path).map_err(|e| format!("Unable to read '{file}': {e}"))?;
    serde_yaml::from_str::<serde_yaml::Value>(&content)
        .map_err(|e| format!("Invalid YAML in '{file}': {e}"))?;
    Ok(path)
}
