//! Core resource-bundle model for resjs.
//!
//! A bundle is the declarative registry standing in for a compiled resources
//! module: an ordered list of named groups, each holding an ordered list of
//! keys with their per-culture strings. Declaration order of groups and keys
//! is preserved by the JSON array order and is significant — serialized output
//! must be reproducible across runs.

use std::{collections::BTreeMap, fmt::Display, io::Read, path::Path};

use serde::{Deserialize, Serialize};

use crate::{error::Error, traits::Parser};

/// A complete resource bundle (corresponds to one compiled resources module).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceBundle {
    /// Identity of the module the bundle was extracted from (e.g. "MyApp.Resources").
    pub module: String,

    /// Ordered list of all resource groups in this bundle.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub groups: Vec<ResourceGroup>,
}

impl ResourceBundle {
    /// Loads a bundle from disk.
    ///
    /// Failure to open or read the file is a [`Error::ModuleLoad`]; a file
    /// that opens but does not have the bundle shape is a
    /// [`Error::Discovery`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file =
            std::fs::File::open(path).map_err(|e| Error::module_load(path, e))?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder
            .read_to_string(&mut decoded)
            .map_err(|e| Error::module_load(path, e))?;

        Self::from_str(&decoded)
    }

    /// Finds a group by its exact name, if present.
    pub fn find_group(&self, name: &str) -> Option<&ResourceGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// All culture codes that appear anywhere in the bundle, deduplicated
    /// and sorted.
    pub fn culture_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .groups
            .iter()
            .flat_map(|g| g.entries.iter())
            .flat_map(|e| e.values.keys())
            .map(String::as_str)
            .collect();
        codes.sort_unstable();
        codes.dedup();
        codes
    }
}

impl Parser for ResourceBundle {
    /// Parse from any reader. Shape errors surface as discovery failures.
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::from)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, self).map_err(Error::from)
    }
}

/// A named group of localizable strings. The group name becomes the output
/// object's property name, case-folded on its first character.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceGroup {
    /// Group name as declared in the source module (e.g. "CommonTexts").
    pub name: String,

    /// Ordered list of entries, in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub entries: Vec<ResourceEntry>,
}

impl ResourceGroup {
    /// Finds an entry by its exact key, if present.
    pub fn find_entry(&self, key: &str) -> Option<&ResourceEntry> {
        self.entries.iter().find(|e| e.key == key)
    }
}

impl Display for ResourceGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} entries)", self.name, self.entries.len())
    }
}

/// A single localizable key with its per-culture strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceEntry {
    /// The key within its group.
    pub key: String,

    /// Map from culture code to localized string.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl ResourceEntry {
    /// Looks up the localized string for the exact culture code.
    ///
    /// Absence is a normal outcome, not an error: there is no parent-culture
    /// or default-culture fallback here. The serializer substitutes the
    /// not-found sentinel for absent values.
    pub fn resolve(&self, culture: &str) -> Option<&str> {
        self.values.get(culture).map(String::as_str)
    }

    /// Whether this entry carries any string values at all. Entries without
    /// string values (non-string resources in the source module) are not
    /// serializable.
    pub fn has_string_values(&self) -> bool {
        !self.values.is_empty()
    }
}

impl Display for ResourceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.key, self.values.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, values: &[(&str, &str)]) -> ResourceEntry {
        ResourceEntry {
            key: key.to_string(),
            values: values
                .iter()
                .map(|(c, v)| (c.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn sample_bundle() -> ResourceBundle {
        ResourceBundle {
            module: "MyApp.Resources".to_string(),
            groups: vec![
                ResourceGroup {
                    name: "Common".to_string(),
                    entries: vec![
                        entry("Ok", &[("en", "Yes"), ("pt", "Sim")]),
                        entry("Cancel", &[("en", "Cancel")]),
                    ],
                },
                ResourceGroup {
                    name: "MainMenu".to_string(),
                    entries: vec![entry("Title", &[("en", "Home")])],
                },
            ],
        }
    }

    #[test]
    fn test_resolve_exact_culture() {
        let bundle = sample_bundle();
        let ok = bundle.find_group("Common").unwrap().find_entry("Ok").unwrap();
        assert_eq!(ok.resolve("pt"), Some("Sim"));
        assert_eq!(ok.resolve("en"), Some("Yes"));
    }

    #[test]
    fn test_resolve_absent_is_none_not_error() {
        let bundle = sample_bundle();
        let cancel = bundle
            .find_group("Common")
            .unwrap()
            .find_entry("Cancel")
            .unwrap();
        assert_eq!(cancel.resolve("pt"), None);
    }

    #[test]
    fn test_resolve_no_parent_culture_fallback() {
        let e = entry("Greeting", &[("pt", "Olá")]);
        // "pt-BR" must not fall back to "pt"
        assert_eq!(e.resolve("pt-BR"), None);
    }

    #[test]
    fn test_find_group_is_case_sensitive() {
        let bundle = sample_bundle();
        assert!(bundle.find_group("Common").is_some());
        assert!(bundle.find_group("common").is_none());
    }

    #[test]
    fn test_culture_codes_sorted_and_deduplicated() {
        let bundle = sample_bundle();
        assert_eq!(bundle.culture_codes(), vec!["en", "pt"]);
    }

    #[test]
    fn test_has_string_values() {
        assert!(entry("Ok", &[("en", "Yes")]).has_string_values());
        assert!(!entry("Logo", &[]).has_string_values());
    }

    #[test]
    fn test_groups_preserve_declaration_order() {
        let json = r#"{
            "module": "M",
            "groups": [
                {"name": "Zebra", "entries": [{"key": "B", "values": {"en": "b"}},
                                              {"key": "A", "values": {"en": "a"}}]},
                {"name": "Alpha", "entries": []}
            ]
        }"#;
        let bundle = ResourceBundle::from_str(json).unwrap();
        let names: Vec<_> = bundle.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "Alpha"]);
        let keys: Vec<_> = bundle.groups[0]
            .entries
            .iter()
            .map(|e| e.key.as_str())
            .collect();
        assert_eq!(keys, vec!["B", "A"]);
    }

    #[test]
    fn test_json_round_trip() {
        let bundle = sample_bundle();
        let mut buffer = Vec::new();
        bundle.to_writer(&mut buffer).unwrap();
        let reparsed = ResourceBundle::from_bytes(&buffer).unwrap();
        assert_eq!(bundle, reparsed);
    }

    #[test]
    fn test_malformed_json_is_discovery_error() {
        let result = ResourceBundle::from_str("{ not a bundle ");
        assert!(matches!(result, Err(Error::Discovery(_))));
    }

    #[test]
    fn test_groups_field_defaults_to_empty() {
        let bundle = ResourceBundle::from_str(r#"{"module": "M"}"#).unwrap();
        assert_eq!(bundle.module, "M");
        assert!(bundle.groups.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_module_load_error() {
        let result = ResourceBundle::load("/nonexistent/Resources.bundle.json");
        assert!(matches!(result, Err(Error::ModuleLoad { .. })));
    }
}
