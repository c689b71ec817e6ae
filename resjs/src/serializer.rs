//! Per-culture serialization of discovered groups into JS object literals.

use std::collections::HashSet;
use std::io::Write;

use indoc::indoc;

use crate::{
    bundle::ResourceGroup,
    discovery::{KeyPolicy, serializable_entries},
    error::Error,
    normalize::{normalize_key, normalize_value},
};

/// Rendering options for one run, shared by every culture.
#[derive(Debug, Clone)]
pub struct SerializeOptions {
    /// Object the group literals are assigned onto (`<namespace>.<group> = ...`).
    pub namespace: String,

    /// Prefix emitted in place of a missing localized value. The key follows
    /// the prefix verbatim, so the default carries its own trailing space.
    pub not_found_markup: String,

    /// Entity-encode values after newline escaping.
    pub html_encode: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        SerializeOptions {
            namespace: "globalization".to_string(),
            not_found_markup: "[TEXT NOT FOUND] ".to_string(),
            html_encode: true,
        }
    }
}

/// Writes one culture's complete script: a generated-file header followed by
/// one object-literal assignment per discovered group, groups in discovery
/// order and keys in declaration order.
///
/// A key with no value for `culture` is rendered as
/// `<not_found_markup><key>` — never substituted from another culture. A key
/// already written within the same group block is skipped (first occurrence
/// wins).
pub fn write_culture<W: Write>(
    writer: &mut W,
    groups: &[&ResourceGroup],
    culture: &str,
    policy: &KeyPolicy,
    options: &SerializeOptions,
) -> Result<(), Error> {
    let mut content = String::new();

    let header = format!(
        indoc! {"
            // This file is automatically generated by resjs.
            // Do not edit it manually, as your changes will be overwritten.
            //: Culture: {}

        "},
        culture
    );
    content.push_str(&header);

    for group in groups {
        content.push_str(&render_group(group, culture, policy, options));
    }

    writer.write_all(content.as_bytes()).map_err(Error::Io)
}

fn render_group(
    group: &ResourceGroup,
    culture: &str,
    policy: &KeyPolicy,
    options: &SerializeOptions,
) -> String {
    let mut block = format!(
        "{}.{} = {{\n",
        options.namespace,
        normalize_key(&group.name)
    );

    let mut seen = HashSet::new();
    let mut lines = Vec::new();

    for entry in serializable_entries(group, policy) {
        if !seen.insert(entry.key.as_str()) {
            log::warn!(
                "Duplicate key '{}' in group '{}', keeping first occurrence",
                entry.key,
                group.name
            );
            continue;
        }

        log::debug!("Serializing key '{}'", entry.key);

        let resolved = match entry.resolve(culture) {
            Some(value) => value.to_string(),
            None => format!("{}{}", options.not_found_markup, entry.key),
        };

        lines.push(format!(
            "  '{}': '{}'",
            normalize_key(&entry.key),
            normalize_value(&resolved, options.html_encode)
        ));
    }

    block.push_str(&lines.join(",\n"));
    if !lines.is_empty() {
        block.push('\n');
    }
    block.push_str("};\n");
    block
}
