//! Icon manifest document
//!
//! In-memory model of the theme's `material-icons.json`. The document is kept
//! as a raw JSON object so every key the integration does not own survives a
//! read-modify-write cycle unchanged. Only four entries are ever touched:
//! the icon definition, two file-extension mappings, and one language-id
//! mapping.

use serde_json::{json, Map, Value};

use super::theme::{FILE_EXTENSIONS, ICON_KEY, LANGUAGE_IDS, MANIFEST_ICON_PATH};

const ICON_DEFINITIONS: &str = "iconDefinitions";
const FILE_EXTENSIONS_SECTION: &str = "fileExtensions";
const LANGUAGE_IDS_SECTION: &str = "languageIds";

/// Parsed icon theme manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct IconManifest {
    root: Map<String, Value>,
}

impl IconManifest {
    /// Parse manifest text. Fails on invalid JSON or a non-object top level;
    /// a failed parse must never be followed by a write.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let root: Map<String, Value> = serde_json::from_str(text)?;
        Ok(Self { root })
    }

    /// Empty manifest (tests and previews).
    pub fn empty() -> Self {
        Self { root: Map::new() }
    }

    /// Upsert the kemet entries into the three mappings, creating each
    /// mapping if absent. Idempotent; leaves unrelated keys alone.
    pub fn register(&mut self) {
        self.section_mut(ICON_DEFINITIONS).insert(
            ICON_KEY.to_string(),
            json!({ "iconPath": MANIFEST_ICON_PATH }),
        );

        let extensions = self.section_mut(FILE_EXTENSIONS_SECTION);
        for ext in FILE_EXTENSIONS {
            extensions.insert(ext.to_string(), Value::String(ICON_KEY.to_string()));
        }

        let languages = self.section_mut(LANGUAGE_IDS_SECTION);
        for id in LANGUAGE_IDS {
            languages.insert(id.to_string(), Value::String(ICON_KEY.to_string()));
        }
    }

    /// Delete the kemet entries from the three mappings. Absent keys and
    /// absent mappings are silently skipped; unrelated keys are untouched.
    pub fn unregister(&mut self) {
        if let Some(defs) = self.root.get_mut(ICON_DEFINITIONS).and_then(Value::as_object_mut) {
            defs.remove(ICON_KEY);
        }
        if let Some(exts) = self
            .root
            .get_mut(FILE_EXTENSIONS_SECTION)
            .and_then(Value::as_object_mut)
        {
            for ext in FILE_EXTENSIONS {
                exts.remove(ext);
            }
        }
        if let Some(ids) = self
            .root
            .get_mut(LANGUAGE_IDS_SECTION)
            .and_then(Value::as_object_mut)
        {
            for id in LANGUAGE_IDS {
                ids.remove(id);
            }
        }
    }

    /// Dotted paths of the expected entries that are not present.
    pub fn missing_entries(&self) -> Vec<String> {
        let mut missing = Vec::new();

        if !self.entry_present(ICON_DEFINITIONS, ICON_KEY) {
            missing.push(format!("{}.{}", ICON_DEFINITIONS, ICON_KEY));
        }
        for ext in FILE_EXTENSIONS {
            if !self.entry_present(FILE_EXTENSIONS_SECTION, ext) {
                missing.push(format!("{}.{}", FILE_EXTENSIONS_SECTION, ext));
            }
        }
        for id in LANGUAGE_IDS {
            if !self.entry_present(LANGUAGE_IDS_SECTION, id) {
                missing.push(format!("{}.{}", LANGUAGE_IDS_SECTION, id));
            }
        }

        missing
    }

    /// Whether all four kemet entries are present.
    pub fn is_registered(&self) -> bool {
        self.missing_entries().is_empty()
    }

    /// Serialize with stable 2-space pretty printing.
    pub fn to_pretty(&self) -> String {
        // Maps of this size cannot fail to serialize
        serde_json::to_string_pretty(&Value::Object(self.root.clone()))
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Raw top-level object (read-only, for tests and status checks).
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    fn entry_present(&self, section: &str, key: &str) -> bool {
        self.root
            .get(section)
            .and_then(Value::as_object)
            .map(|map| map.contains_key(key))
            .unwrap_or(false)
    }

    /// Mapping section as a mutable object, creating it when absent.
    ///
    /// A section that exists with a non-object value is replaced: the three
    /// sections are mappings by contract and registration needs them usable.
    fn section_mut(&mut self, name: &str) -> &mut Map<String, Value> {
        let entry = self
            .root
            .entry(name.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        entry.as_object_mut().unwrap()
    }
}
