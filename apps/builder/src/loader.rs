//! Document Loader — reads a YAML file into a top-level mapping.
//!
//! Failure never escapes this module: a missing, unreadable, malformed or
//! non-mapping document is logged and comes back as an empty mapping. Callers
//! treat the empty mapping as the load-failure signal.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error: {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Error parsing {}: top-level document is not a mapping", .0.display())]
    NotAMapping(PathBuf),
}

/// Loads `path` as a YAML mapping, returning an empty mapping on any failure.
pub fn load_document(path: &Path) -> Mapping {
    match try_load(path) {
        Ok(doc) => {
            debug!("Loaded {} ({} top-level keys)", path.display(), doc.len());
            doc
        }
        Err(e) => {
            error!("{e}");
            Mapping::new()
        }
    }
}

fn try_load(path: &Path) -> Result<Mapping, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    parse_document(&text).map_err(|e| match e {
        ParseFailure::Yaml(source) => LoadError::Parse {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::NotAMapping => LoadError::NotAMapping(path.to_path_buf()),
    })
}

enum ParseFailure {
    Yaml(serde_yaml::Error),
    NotAMapping,
}

fn parse_document(text: &str) -> Result<Mapping, ParseFailure> {
    match serde_yaml::from_str::<Value>(text).map_err(ParseFailure::Yaml)? {
        Value::Mapping(map) => Ok(map),
        // An empty file parses as null; it carries no document.
        _ => Err(ParseFailure::NotAMapping),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_valid_mapping() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jane.yml");
        fs::write(&path, "personal:\n  full_name: Jane Doe\nsections: {}\n").unwrap();

        let doc = load_document(&path);
        assert_eq!(doc.len(), 2);
        assert!(doc.contains_key("personal"));
    }

    #[test]
    fn test_missing_file_returns_empty_mapping() {
        let dir = tempdir().unwrap();
        let doc = load_document(&dir.path().join("absent.yml"));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_malformed_yaml_returns_empty_mapping() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yml");
        fs::write(&path, "personal: [unterminated\n  - : :").unwrap();

        assert!(load_document(&path).is_empty());
    }

    #[test]
    fn test_empty_file_is_a_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.yml");
        fs::write(&path, "").unwrap();

        assert!(matches!(try_load(&path), Err(LoadError::NotAMapping(_))));
        assert!(load_document(&path).is_empty());
    }

    #[test]
    fn test_top_level_sequence_is_a_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list.yml");
        fs::write(&path, "- one\n- two\n").unwrap();

        assert!(matches!(try_load(&path), Err(LoadError::NotAMapping(_))));
    }

    #[test]
    fn test_not_found_error_message() {
        let err = try_load(Path::new("nowhere/layout-config.yml")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
        assert_eq!(err.to_string(), "Error: nowhere/layout-config.yml not found");
    }
}
