//! Entries file handling.
//! An entries file describes a whole document's worth of entries so it can be
//! generated without the interactive form. JSON and YAML are both accepted.

use crate::entry::EntryInput;
use crate::error::{Error, Result};
use crate::registry::Registry;
use log::debug;
use serde::{de, Deserialize, Deserializer};
use std::path::Path;

/// One entry as written in an entries file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EntryRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(alias = "file_path")]
    pub file: String,
    #[serde(alias = "image_path")]
    pub image: String,
    pub synopsis: String,
}

/// Top level of an entries file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EntriesFile {
    pub character: String,
    #[serde(default)]
    pub relative_paths: bool,
    #[serde(default)]
    pub entries: Vec<EntryRecord>,
}

/// Accepts ids written either as strings or as bare numbers.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("expected a string or number id, found {other}"))),
    }
}

impl EntriesFile {
    /// Builds the form input for each record, in file order.
    pub fn inputs(&self, force_relative: bool) -> impl Iterator<Item = EntryInput> + '_ {
        let use_relative_paths = force_relative || self.relative_paths;
        self.entries.iter().map(move |record| EntryInput {
            id: record.id.clone(),
            character: self.character.clone(),
            title: record.title.clone(),
            file_path: record.file.clone(),
            image_path: record.image.clone(),
            synopsis: record.synopsis.clone(),
            use_relative_paths,
        })
    }

    /// Feeds every record into `registry` in file order.
    ///
    /// A repeated id updates the earlier entry in place.
    ///
    /// # Returns
    /// * The registry's entry count afterwards
    ///
    /// # Errors
    /// * The first error returned by [`Registry::add_or_update`]
    pub fn apply(&self, registry: &mut Registry, force_relative: bool) -> Result<usize> {
        let mut count = registry.count();
        for input in self.inputs(force_relative) {
            count = registry.add_or_update(&input)?;
        }
        Ok(count)
    }
}

/// Parses an entries document, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_entries(content: &str) -> Result<EntriesFile> {
    match serde_json::from_str(content) {
        Ok(entries) => Ok(entries),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid entries format: {}", e))),
    }
}

/// Loads and parses an entries file.
///
/// # Errors
/// * `Error::ConfigError` if the file does not exist or cannot be parsed
/// * `Error::IoError` if it cannot be read
pub fn load_entries_file<P: AsRef<Path>>(entries_path: P) -> Result<EntriesFile> {
    let entries_path = entries_path.as_ref();
    if !entries_path.is_file() {
        return Err(Error::ConfigError(format!(
            "Invalid entries file path: {}",
            entries_path.display()
        )));
    }

    debug!("Loading entries from {}", entries_path.display());
    let content = std::fs::read_to_string(entries_path).map_err(Error::IoError)?;
    parse_entries(&content)
}

/// Reads an entries document from stdin.
pub fn load_entries_from_stdin() -> Result<EntriesFile> {
    use std::io::Read;

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_entries(buffer.trim())
}
