//! Locally configured places.
//!
//! The map falls back to these when `/api/atl-places` is unreachable, and
//! ranks them locally when the upstream search fails.

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::{ListPage, Place};

/// Loads places from a JSON file holding an array or `{"places": [...]}`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn load_places(path: &Path) -> Result<Vec<Place>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fallback places from {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;
    let page: ListPage<Place> = ListPage::from_value(&value);
    Ok(page.items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("page-hydrator-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_array_and_wrapped() {
        let bare = temp_file("bare.json", r#"[{"title": "A", "lat": 1, "lng": 2}]"#);
        let wrapped = temp_file("wrapped.json", r#"{"places": [{"title": "B"}, {"title": "C"}]}"#);

        assert_eq!(load_places(&bare).unwrap().len(), 1);
        assert_eq!(load_places(&wrapped).unwrap().len(), 2);

        std::fs::remove_file(bare).ok();
        std::fs::remove_file(wrapped).ok();
    }

    #[test]
    fn test_missing_file_errors() {
        let err = load_places(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read fallback places"));
    }
}
