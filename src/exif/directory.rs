//! Decoded metadata directories.
//!
//! A directory is the raw shape shared by every container decoder: numeric
//! tag identifiers mapped to values, with sub-directories (such as the GPS
//! block) nested as values of their pointer tag.

use std::collections::BTreeMap;

use super::gps::Rational;

/// A raw value held by a metadata directory entry.
///
/// Only the shapes the extraction pipeline consumes are represented;
/// anything else collapses to `Other` and is carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    /// NUL-terminated ASCII, already stripped and joined.
    Ascii(String),
    /// Unsigned integers (SHORT or LONG in the container).
    UInt(Vec<u32>),
    /// Unsigned rationals (numerator, denominator pairs).
    Rational(Vec<Rational>),
    /// Untyped byte payloads.
    Bytes(Vec<u8>),
    /// A nested sub-directory reached through a pointer tag.
    Directory(MetadataDirectory),
    /// A value type the pipeline has no use for.
    Other,
}

/// A decoded metadata directory: numeric tag ID to raw value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataDirectory {
    entries: BTreeMap<u16, TagValue>,
}

impl MetadataDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: u16, value: TagValue) {
        self.entries.insert(id, value);
    }

    pub fn get(&self, id: u16) -> Option<&TagValue> {
        self.entries.get(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate entries in tag-ID order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &TagValue)> {
        self.entries.iter().map(|(id, value)| (*id, value))
    }
}
