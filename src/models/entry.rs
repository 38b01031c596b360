//! Directory listing payload from the backend.

use serde::{Deserialize, Serialize};

/// One entry of a directory listing, as served by `GET /api/list`.
///
/// The backend owns this record; the client only reads it. Listings arrive
/// already ordered (directories first, then alphabetical) and the client
/// renders them in received order.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FileEntry {
    /// Entry name within its parent directory.
    pub name: String,
    /// Path relative to the storage root, slash-separated.
    pub path: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Size in bytes (0 for directories).
    pub size: u64,
    /// Last modification time, epoch seconds.
    pub modified: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_backend_listing() {
        let json = r#"[
            {"name": "docs", "path": "docs", "is_dir": true, "size": 0, "modified": 1700000000},
            {"name": "notes.md", "path": "docs/notes.md", "is_dir": false, "size": 1536, "modified": 1700000100}
        ]"#;
        let entries: Vec<FileEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_dir);
        assert_eq!(entries[1].name, "notes.md");
        assert_eq!(entries[1].size, 1536);
    }
}
