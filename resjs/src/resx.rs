//! Lookup of raw XML resource-definition files.
//!
//! An auxiliary, rarely-invoked helper: given the folder holding a module's
//! resource definitions, locate the document for a (group, culture) pair and
//! return its entries in document order. The default culture maps to
//! `<Group>.resx`, any other culture to `<Group>.<culture>.resx`; filename
//! matching is case-insensitive. This surface carries no core guarantees.

use std::{
    io::BufRead,
    path::{Path, PathBuf},
};

use lazy_static::lazy_static;
use quick_xml::{Reader, events::{BytesStart, Event}};
use regex::Regex;

use crate::{error::Error, traits::open_decoded};

lazy_static! {
    static ref RESX_FILE_REGEX: Regex = Regex::new(
        r"(?i)^(?P<group>.+?)(?:\.(?P<culture>[a-z]{2,3}(?:-[a-z0-9]+)*))?\.resx$"
    )
    .unwrap();
}

/// A parsed resource-definition document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResxDocument {
    /// Path the document was loaded from.
    pub path: PathBuf,
    /// Entries in document order.
    pub entries: Vec<ResxEntry>,
}

/// One `<data name="..."><value>...</value></data>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResxEntry {
    pub name: String,
    pub value: String,
}

impl ResxDocument {
    /// Finds an entry by name, if present.
    pub fn find(&self, name: &str) -> Option<&ResxEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

/// Locates and parses the resource-definition document for a group and
/// culture. Returns `Ok(None)` when no matching file exists; an unreadable
/// folder or malformed document is an error.
pub fn find_culture_document(
    folder: &Path,
    group_name: &str,
    culture: &str,
    default_culture: &str,
) -> Result<Option<ResxDocument>, Error> {
    let wants_culture = if culture.eq_ignore_ascii_case(default_culture) {
        None
    } else {
        Some(culture)
    };

    let mut names: Vec<String> = std::fs::read_dir(folder)
        .map_err(Error::Io)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    for name in names {
        let Some(captures) = RESX_FILE_REGEX.captures(&name) else {
            continue;
        };
        if !captures["group"].eq_ignore_ascii_case(group_name) {
            continue;
        }
        let file_culture = captures.name("culture").map(|m| m.as_str());
        let matches = match (wants_culture, file_culture) {
            (None, None) => true,
            (Some(wanted), Some(found)) => wanted.eq_ignore_ascii_case(found),
            _ => false,
        };
        if matches {
            let path = folder.join(&name);
            let entries = parse_document(open_decoded(&path)?)?;
            return Ok(Some(ResxDocument { path, entries }));
        }
    }

    Ok(None)
}

fn parse_document<R: BufRead>(reader: R) -> Result<Vec<ResxEntry>, Error> {
    let mut xml_reader = Reader::from_reader(reader);
    xml_reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut entries = Vec::new();

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"data" => {
                entries.push(parse_data_element(e, &mut xml_reader)?);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(Error::XmlParse(e)),
        }
        buf.clear();
    }
    Ok(entries)
}

fn parse_data_element<R: BufRead>(
    e: &BytesStart,
    xml_reader: &mut Reader<R>,
) -> Result<ResxEntry, Error> {
    let mut name = None;

    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|e| Error::InvalidDocument(e.to_string()))?;
        if attr.key.as_ref() == b"name" {
            name = Some(attr.unescape_value()?.to_string());
        }
    }
    let name =
        name.ok_or_else(|| Error::InvalidDocument("data tag missing 'name'".to_string()))?;

    let mut buf = Vec::new();
    let mut value = String::new();
    let mut in_value = false;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref el)) if el.name().as_ref() == b"value" => in_value = true,
            Ok(Event::Text(t)) if in_value => {
                value = t.unescape().map_err(Error::XmlParse)?.to_string();
            }
            Ok(Event::End(ref el)) if el.name().as_ref() == b"value" => in_value = false,
            Ok(Event::End(ref el)) if el.name().as_ref() == b"data" => break,
            Ok(Event::Eof) => {
                return Err(Error::InvalidDocument(
                    "unexpected EOF inside data element".to_string(),
                ));
            }
            Ok(_) => {}
            Err(e) => return Err(Error::XmlParse(e)),
        }
        buf.clear();
    }

    Ok(ResxEntry { name, value })
}
