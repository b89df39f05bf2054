//! File loading for the shell. A missing file or malformed JSON is fatal:
//! the caller turns the error into a single-error report and skips
//! validation entirely.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Reads `path` and parses it as `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("File {} not found or unreadable", path.display()))?;

    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("validator-cli-test-{name}"));
        fs::write(&path, contents).expect("scratch file is writable");
        path
    }

    #[test]
    fn missing_file_reports_the_path() {
        let result = read_json::<Value>(Path::new("no/such/file.json"));

        let error = format!("{:#}", result.unwrap_err());
        assert!(error.starts_with("File no/such/file.json not found"));
    }

    #[test]
    fn malformed_json_reports_the_path() {
        let path = scratch_file("malformed.json", "{ not json");

        let result = read_json::<Value>(&path);

        let error = format!("{:#}", result.unwrap_err());
        assert!(error.starts_with(&format!("Invalid JSON in {}", path.display())));
    }

    #[test]
    fn well_formed_json_parses() {
        let path = scratch_file("routes.json", r#"[{ "city1": "Boston" }]"#);

        let routes: Vec<Value> = read_json(&path).expect("document parses");

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0]["city1"], "Boston");
    }
}
