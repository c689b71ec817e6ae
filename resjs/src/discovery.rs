//! Group discovery and filtering.
//!
//! The ignore-list and reserved-key policies are explicit predicate values
//! rather than hard-coded comparisons, so the core stays testable independent
//! of any particular store.

use crate::bundle::{ResourceBundle, ResourceEntry, ResourceGroup};

/// Key names that designer-generated resource classes expose as accessors
/// rather than localizable strings.
pub const RESERVED_KEYS: [&str; 2] = ["ResourceManager", "Culture"];

/// Predicate deciding which groups take part in serialization.
///
/// A group is excluded when its name case-insensitively matches one of the
/// configured ignore names.
#[derive(Debug, Clone, Default)]
pub struct GroupFilter {
    ignore: Vec<String>,
}

impl GroupFilter {
    /// Builds a filter from a list of group names to ignore.
    pub fn ignoring<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GroupFilter {
            ignore: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the given group name is excluded.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.iter().any(|i| i.eq_ignore_ascii_case(name))
    }
}

/// Predicate deciding which keys within a group are serializable.
#[derive(Debug, Clone)]
pub struct KeyPolicy {
    reserved: Vec<String>,
}

impl KeyPolicy {
    /// Whether the given key is reserved (exact match, as in the source
    /// module's accessor names).
    pub fn is_reserved(&self, key: &str) -> bool {
        self.reserved.iter().any(|r| r == key)
    }

    /// Whether the entry should be serialized: not reserved, and carrying at
    /// least one string value.
    pub fn is_serializable(&self, entry: &ResourceEntry) -> bool {
        !self.is_reserved(&entry.key) && entry.has_string_values()
    }
}

impl Default for KeyPolicy {
    fn default() -> Self {
        KeyPolicy {
            reserved: RESERVED_KEYS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Enumerates the bundle's groups in declaration order, excluding ignored
/// ones. Performed exactly once per run; the result is reused across all
/// cultures.
pub fn discover<'a>(bundle: &'a ResourceBundle, filter: &GroupFilter) -> Vec<&'a ResourceGroup> {
    let groups: Vec<&ResourceGroup> = bundle
        .groups
        .iter()
        .filter(|g| !filter.is_ignored(&g.name))
        .collect();

    log::info!(
        "Resource groups found: {}",
        groups
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    groups
}

/// The serializable entries of a group, in declaration order.
pub fn serializable_entries<'a>(
    group: &'a ResourceGroup,
    policy: &'a KeyPolicy,
) -> impl Iterator<Item = &'a ResourceEntry> {
    group.entries.iter().filter(|e| policy.is_serializable(e))
}
