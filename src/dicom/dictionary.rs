//! DICOM data dictionary
//!
//! Keyword and VR lookup for known tags. The table lives in
//! `dicom_tags.toml` and is parsed once on first use. Repeating-group entries
//! such as `60xx3000` are compiled to regular expressions.

use std::collections::HashMap;
use std::fs;

use lazy_static::lazy_static;
use regex::Regex;

use crate::dicom::errors::{DicomError, DicomResult};
use crate::dicom::tag::Tag;
use crate::dicom::vr::Vr;

lazy_static! {
    static ref DICTIONARY: Dictionary = {
        let content = include_str!("../../dicom_tags.toml");
        Dictionary::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse DICOM tag dictionary: {}", e);
            Dictionary::default()
        })
    };
}

/// Keyword and VR of one dictionary tag
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryEntry {
    pub keyword: String,
    pub vr: Vr,
}

/// Tag dictionary with exact and repeating-group entries
#[derive(Debug, Default)]
pub struct Dictionary {
    exact: HashMap<Tag, DictionaryEntry>,
    patterns: Vec<(Regex, DictionaryEntry)>,
}

impl Dictionary {
    /// Parse a dictionary from TOML content
    pub fn from_str(content: &str) -> DicomResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| DicomError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let table = toml_value
            .get("tags")
            .and_then(|v| v.as_table())
            .ok_or_else(|| DicomError::ConfigError("Missing [tags] table".to_string()))?;

        let mut dictionary = Dictionary::default();

        for (key, value) in table {
            let entry = Self::parse_entry(key, value)?;

            if key.contains('x') {
                let pattern = format!("^{}$", key.to_uppercase().replace("XX", "[0-9A-F]{2}"));
                let regex = Regex::new(&pattern)
                    .map_err(|e| DicomError::ConfigError(format!("Bad tag pattern {}: {}", key, e)))?;
                dictionary.patterns.push((regex, entry));
            } else {
                let tag: Tag = key
                    .parse()
                    .map_err(|e| DicomError::ConfigError(format!("{}", e)))?;
                dictionary.exact.insert(tag, entry);
            }
        }

        Ok(dictionary)
    }

    /// Load a dictionary from a TOML file
    pub fn from_file(path: &str) -> DicomResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    fn parse_entry(key: &str, value: &toml::Value) -> DicomResult<DictionaryEntry> {
        let fields = value.as_array().filter(|a| a.len() == 2);
        let (keyword, vr) = match fields.map(|a| (a[0].as_str(), a[1].as_str())) {
            Some((Some(keyword), Some(vr))) => (keyword, vr),
            _ => {
                return Err(DicomError::ConfigError(format!(
                    "Entry {} must be [keyword, vr]",
                    key
                )))
            }
        };

        Ok(DictionaryEntry {
            keyword: keyword.to_string(),
            vr: vr.parse().map_err(DicomError::ConfigError)?,
        })
    }

    /// Looks up a tag, trying exact entries before repeating groups
    pub fn lookup(&self, tag: Tag) -> Option<&DictionaryEntry> {
        if let Some(entry) = self.exact.get(&tag) {
            return Some(entry);
        }

        let key = tag.to_string();
        self.patterns
            .iter()
            .find(|(regex, _)| regex.is_match(&key))
            .map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.exact.len() + self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Looks up a tag in the built-in dictionary
pub fn lookup(tag: Tag) -> Option<&'static DictionaryEntry> {
    DICTIONARY.lookup(tag)
}

/// Human-readable keyword for a tag
pub fn keyword(tag: Tag) -> &'static str {
    match lookup(tag) {
        Some(entry) => entry.keyword.as_str(),
        None if tag.is_group_length() => "GroupLength",
        None if tag.is_private() => "PrivateTag",
        None => "Unknown",
    }
}

/// VR to assume for a tag read from an implicit VR dataset
pub fn implicit_vr(tag: Tag) -> Vr {
    if let Some(entry) = lookup(tag) {
        return entry.vr;
    }

    if tag.is_group_length() {
        Vr::UL
    } else {
        Vr::UN
    }
}
