//! File-to-icon resolution.
//!
//! The registry is parsed once from an embedded JSON table mapping icon ids
//! to the file names, extensions, and language ids they cover, and is
//! read-only afterwards. Resolution is deterministic: directories always get
//! the folder icon, exact file-name matches beat extension matches, and
//! anything else gets the default file icon. When two registry entries claim
//! the same name or extension, the first one in table order wins.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::config::ICON_MAPPINGS_JSON;

/// Icon id used for every directory entry.
pub const DEFAULT_FOLDER_ICON: &str = "_folder";

/// Icon id used for files with no registered name or extension.
pub const DEFAULT_FILE_ICON: &str = "_file";

/// One registry entry: the identifiers an icon id covers.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct IconMapping {
    pub language_ids: Vec<String>,
    pub file_extensions: Vec<String>,
    pub file_names: Vec<String>,
}

/// The loaded icon registry with lowercase lookup indexes.
pub struct IconRegistry {
    mappings: serde_json::Map<String, serde_json::Value>,
    by_file_name: HashMap<String, String>,
    by_extension: HashMap<String, String>,
}

impl IconRegistry {
    /// Process-wide registry, loaded on first access.
    pub fn global() -> &'static IconRegistry {
        static REGISTRY: OnceLock<IconRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| Self::from_json(ICON_MAPPINGS_JSON))
    }

    /// Build a registry from a JSON table. The embedded table is part of the
    /// binary, so a malformed table is a build defect, not a runtime input.
    fn from_json(json: &str) -> Self {
        let mappings: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).expect("icon mapping table must be a JSON object");

        let mut by_file_name = HashMap::new();
        let mut by_extension = HashMap::new();

        // Map iteration order is table order (preserve_order), so inserting
        // only vacant keys gives first-registered-wins precedence.
        for (icon_id, value) in &mappings {
            let Ok(mapping) = serde_json::from_value::<IconMapping>(value.clone()) else {
                continue;
            };
            for name in &mapping.file_names {
                by_file_name
                    .entry(name.to_lowercase())
                    .or_insert_with(|| icon_id.clone());
            }
            for ext in &mapping.file_extensions {
                by_extension
                    .entry(ext.to_lowercase())
                    .or_insert_with(|| icon_id.clone());
            }
        }

        Self {
            mappings,
            by_file_name,
            by_extension,
        }
    }

    /// Resolve the icon id for a directory entry.
    ///
    /// Priority: directory > exact file name > extension > default.
    pub fn resolve(&self, file_name: &str, is_directory: bool) -> &str {
        if is_directory {
            return DEFAULT_FOLDER_ICON;
        }

        let lower = file_name.to_lowercase();
        if let Some(icon_id) = self.by_file_name.get(&lower) {
            return icon_id;
        }

        if let Some(ext) = file_extension(&lower)
            && let Some(icon_id) = self.by_extension.get(ext)
        {
            return icon_id;
        }

        DEFAULT_FILE_ICON
    }

    /// Whether an icon id exists in the registry.
    pub fn icon_exists(&self, icon_id: &str) -> bool {
        self.mappings.contains_key(icon_id)
    }

    /// The registered mapping for an icon id, if any.
    pub fn mapping(&self, icon_id: &str) -> Option<IconMapping> {
        self.mappings
            .get(icon_id)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

/// Extension of a (lowercased) file name: the part after the last `.`,
/// unless that dot is the first character. Dotfiles have no extension.
fn file_extension(file_name: &str) -> Option<&str> {
    let last_dot = file_name.rfind('.')?;
    if last_dot == 0 {
        return None;
    }
    Some(&file_name[last_dot + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> IconRegistry {
        IconRegistry::from_json(ICON_MAPPINGS_JSON)
    }

    #[test]
    fn directories_always_get_the_folder_icon() {
        let reg = registry();
        assert_eq!(reg.resolve("src", true), DEFAULT_FOLDER_ICON);
        assert_eq!(reg.resolve("main.rs", true), DEFAULT_FOLDER_ICON);
        assert_eq!(reg.resolve(".git", true), DEFAULT_FOLDER_ICON);
    }

    #[test]
    fn file_name_match_beats_extension_match() {
        let reg = registry();
        // "cargo.toml" is registered by name under rust; ".toml" alone
        // would resolve to toml.
        assert_eq!(reg.resolve("Cargo.toml", false), "rust");
        assert_eq!(reg.resolve("other.toml", false), "toml");
        assert_eq!(reg.resolve("package-lock.json", false), "lock");
        assert_eq!(reg.resolve("data.json", false), "json");
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let reg = registry();
        assert_eq!(reg.resolve("photo.PNG", false), "image");
        assert_eq!(reg.resolve("Notes.MD", false), "markdown");
    }

    #[test]
    fn dotfiles_never_match_by_extension() {
        let reg = registry();
        // Registered dotfile name.
        assert_eq!(reg.resolve(".gitignore", false), "git");
        // Unregistered dotfile: no extension is extracted, so it falls
        // through to the default even though "unknownrc" is not an entry.
        assert_eq!(reg.resolve(".unknownrc", false), DEFAULT_FILE_ICON);
    }

    #[test]
    fn unregistered_names_get_the_default_file_icon() {
        let reg = registry();
        assert_eq!(reg.resolve("mystery.xyz", false), DEFAULT_FILE_ICON);
        assert_eq!(reg.resolve("no-extension", false), DEFAULT_FILE_ICON);
        assert_eq!(reg.resolve("", false), DEFAULT_FILE_ICON);
    }

    #[test]
    fn accessors_report_misses_without_failure() {
        let reg = registry();
        assert!(reg.icon_exists("rust"));
        assert!(!reg.icon_exists("_missing"));
        assert!(reg.mapping("_missing").is_none());

        let rust = reg.mapping("rust").unwrap();
        assert!(rust.file_extensions.contains(&"rs".to_string()));
        assert!(rust.file_names.contains(&"cargo.toml".to_string()));
    }

    #[test]
    fn first_registered_entry_wins_on_duplicates() {
        let table = r#"{
            "first": { "fileExtensions": ["dup"], "fileNames": ["same"] },
            "second": { "fileExtensions": ["dup"], "fileNames": ["same"] }
        }"#;
        let reg = IconRegistry::from_json(table);
        assert_eq!(reg.resolve("file.dup", false), "first");
        assert_eq!(reg.resolve("same", false), "first");
    }

    #[test]
    fn file_extension_rules() {
        assert_eq!(file_extension("archive.tar.gz"), Some("gz"));
        assert_eq!(file_extension(".gitignore"), None);
        assert_eq!(file_extension("readme"), None);
        assert_eq!(file_extension("trailing."), Some(""));
    }
}
