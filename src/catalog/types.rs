//! Record types for the book catalog
//!
//! # Types
//!
//! - **`Book`**: A single immutable catalog record
//! - **`Directory`**: An insertion-ordered identifier → display name mapping,
//!   used for both authors and genres
//!
//! `Directory` deserializes from a JSON object and keeps the object's key
//! order, so selector options appear in the same order as the source file.
//! Duplicate keys are kept at this layer and rejected by catalog validation.

use chrono::{DateTime, Datelike, Utc};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier
    pub id: String,
    pub title: String,
    /// Identifier into the author mapping
    pub author: String,
    /// Cover image URI
    pub image: String,
    pub description: String,
    /// Identifiers into the genre mapping
    #[serde(default)]
    pub genres: Vec<String>,
    pub published: DateTime<Utc>,
}

impl Book {
    /// Year of first publication
    #[must_use]
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    /// Whether the book is tagged with the given genre identifier
    #[must_use]
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// Insertion-ordered mapping of identifiers to display names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<(String, String)>,
}

impl Directory {
    /// Create an empty directory
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry, keeping insertion order
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.entries.push((id.into(), name.into()));
    }

    /// Display name for an identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, name)| name.as_str())
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterate `(id, name)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }

    /// Identifiers in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// First identifier that occurs more than once, if any
    #[must_use]
    pub fn first_duplicate(&self) -> Option<&str> {
        self.entries.iter().enumerate().find_map(|(idx, (id, _))| {
            self.entries[..idx]
                .iter()
                .any(|(earlier, _)| earlier == id)
                .then_some(id.as_str())
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Directory {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut directory = Self::new();
        for (id, name) in iter {
            directory.insert(id, name);
        }
        directory
    }
}

impl Serialize for Directory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, name) in &self.entries {
            map.serialize_entry(id, name)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Directory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DirectoryVisitor;

        impl<'de> Visitor<'de> for DirectoryVisitor {
            type Value = Directory;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of identifiers to display names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Directory, A::Error> {
                let mut directory = Directory {
                    entries: Vec::with_capacity(map.size_hint().unwrap_or(0)),
                };
                while let Some((id, name)) = map.next_entry::<String, String>()? {
                    directory.insert(id, name);
                }
                Ok(directory)
            }
        }

        deserializer.deserialize_map(DirectoryVisitor)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
