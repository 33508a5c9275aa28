//! Structured field records for moving failures across process boundaries.
//!
//! When a failure happens inside an out-of-process test runner, the reporting
//! side cannot hold the live value object. A [`FieldRecord`] is the carrier
//! that bridges the gap: an explicit, versioned list of named string fields
//! that a failure writes itself into on one side and is rebuilt from on the
//! other. There is no reflection and no implicit field discovery; every
//! failure kind names exactly the fields it stores.
//!
//! A stored field value is itself optional: writing `None` records that the
//! original value was absent, which is different from never writing the field
//! at all. Both states survive the trip.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while writing a failure into a record or rebuilding one
/// from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required argument was absent. Storing never begins on an absent
    /// sink, so no partial record can escape.
    #[error("argument `{0}` must not be null")]
    NullArgument(&'static str),

    /// A field the failure kind always writes was never written to this
    /// record.
    #[error("field `{0}` missing from record")]
    MissingField(String),

    /// The record was produced by a format version this crate does not read.
    #[error("unsupported record format version {0}")]
    UnsupportedVersion(u32),
}

/// An insertion-ordered list of named, optional string fields plus a format
/// version.
///
/// Lookups distinguish a field that was written as absent (`Some(None)`)
/// from a field that was never written (`None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    version: u32,
    fields: Vec<(String, Option<String>)>,
}

impl FieldRecord {
    /// The record format this crate writes and reads.
    pub const FORMAT_VERSION: u32 = 1;

    /// Creates an empty record at [`Self::FORMAT_VERSION`].
    pub fn new() -> Self {
        FieldRecord {
            version: Self::FORMAT_VERSION,
            fields: Vec::new(),
        }
    }

    /// The format version this record was written at.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Writes a named field. `None` records that the value was absent.
    ///
    /// Writing the same name twice keeps both entries; [`Self::get`] returns
    /// the first, matching write-once usage.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        self.fields.push((name.into(), value));
    }

    /// Looks a field up by name.
    ///
    /// Returns `None` when the field was never written, `Some(None)` when it
    /// was written as absent, and `Some(Some(value))` otherwise.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_deref())
    }

    /// Looks a field up by name, treating a never-written field as an error.
    pub(crate) fn require(&self, name: &str) -> Result<Option<&str>, RecordError> {
        self.get(name)
            .ok_or_else(|| RecordError::MissingField(name.to_owned()))
    }

    /// Rejects records from a format version this crate does not read.
    pub(crate) fn check_version(&self) -> Result<(), RecordError> {
        if self.version == Self::FORMAT_VERSION {
            Ok(())
        } else {
            Err(RecordError::UnsupportedVersion(self.version))
        }
    }

    /// Number of fields written so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field has been written yet.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in the order they were written.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }
}

impl Default for FieldRecord {
    fn default() -> Self {
        Self::new()
    }
}
