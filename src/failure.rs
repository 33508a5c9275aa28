//! The range-assertion failure record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::descriptor::FailureDescriptor;
use crate::record::{FieldRecord, RecordError};

/// Title carried by every range failure.
pub const RANGE_FAILURE_TITLE: &str = "Assert.InRange() Failure";

/// Failure record produced when a value is unexpectedly not in the given
/// inclusive range.
///
/// The record captures the failing value and both bounds as display strings
/// at construction and never looks at the original values again, so it stays
/// valid even if the compared values are mutated or dropped afterwards. It is
/// immutable once built and safe to share across threads.
///
/// ```rust
/// use assert_range::RangeFailure;
///
/// let failure = RangeFailure::out_of_range(5, 1, 4);
/// assert_eq!(failure.actual(), Some("5"));
/// assert_eq!(
///     failure.message(),
///     "Assert.InRange() Failure\nRange:  (1 - 4)\nActual: 5",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeFailure {
    #[serde(rename = "Actual")]
    actual: Option<String>,
    #[serde(rename = "Low")]
    low: Option<String>,
    #[serde(rename = "High")]
    high: Option<String>,
    #[serde(flatten)]
    descriptor: FailureDescriptor,
}

impl RangeFailure {
    const FIELD_ACTUAL: &'static str = "Actual";
    const FIELD_HIGH: &'static str = "High";
    const FIELD_LOW: &'static str = "Low";

    /// Placeholder rendered for an absent actual value. The bounds get no
    /// placeholder; an absent bound leaves its slot in the message empty.
    const ABSENT_ACTUAL: &'static str = "(null)";

    /// Captures a failure from the checked value and the range bounds.
    ///
    /// Each input is rendered to text independently via its [`Display`]
    /// implementation; `None` is captured as absence, not as the text
    /// `"null"`. Construction never fails.
    ///
    /// [`Display`]: std::fmt::Display
    pub fn new<A, L, H>(actual: Option<A>, low: Option<L>, high: Option<H>) -> Self
    where
        A: fmt::Display,
        L: fmt::Display,
        H: fmt::Display,
    {
        RangeFailure {
            actual: actual.map(|value| value.to_string()),
            low: low.map(|value| value.to_string()),
            high: high.map(|value| value.to_string()),
            descriptor: FailureDescriptor::new(RANGE_FAILURE_TITLE),
        }
    }

    /// Captures a failure where the value and both bounds are all present,
    /// which is the common case at an assertion site.
    pub fn out_of_range(
        actual: impl fmt::Display,
        low: impl fmt::Display,
        high: impl fmt::Display,
    ) -> Self {
        Self::new(Some(actual), Some(low), Some(high))
    }

    /// Rebuilds a failure from already captured display strings.
    pub fn from_parts(
        actual: Option<String>,
        low: Option<String>,
        high: Option<String>,
    ) -> Self {
        RangeFailure {
            actual,
            low,
            high,
            descriptor: FailureDescriptor::new(RANGE_FAILURE_TITLE),
        }
    }

    /// Attaches a user-supplied message from the assertion site. It replaces
    /// the title as the first line of the rendered diagnostic; the title
    /// itself is unchanged and still travels in the structured record.
    pub fn with_user_message(mut self, message: impl Into<String>) -> Self {
        self.descriptor = self.descriptor.with_user_message(message);
        self
    }

    /// The captured rendering of the checked value.
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    /// The captured rendering of the range's lower bound.
    pub fn low(&self) -> Option<&str> {
        self.low.as_deref()
    }

    /// The captured rendering of the range's upper bound.
    pub fn high(&self) -> Option<&str> {
        self.high.as_deref()
    }

    /// The fixed title of this failure kind.
    pub fn title(&self) -> &str {
        self.descriptor.title()
    }

    /// The descriptor shared with other failure kinds.
    pub fn descriptor(&self) -> &FailureDescriptor {
        &self.descriptor
    }

    /// The canonical three-line diagnostic message.
    ///
    /// Callers that want the standard rendering must use this (or the
    /// [`Display`] impl) rather than assembling their own text from the raw
    /// accessors.
    ///
    /// [`Display`]: std::fmt::Display
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Writes this failure's fields into `record`, then appends the
    /// descriptor's own fields.
    ///
    /// The sink is checked before anything is written: an absent sink fails
    /// with [`RecordError::NullArgument`] and no field escapes.
    pub fn store(&self, record: Option<&mut FieldRecord>) -> Result<(), RecordError> {
        let record = record.ok_or(RecordError::NullArgument("record"))?;

        record.insert(Self::FIELD_ACTUAL, self.actual.clone());
        record.insert(Self::FIELD_HIGH, self.high.clone());
        record.insert(Self::FIELD_LOW, self.low.clone());
        self.descriptor.store(record);

        Ok(())
    }

    /// Rebuilds a failure from a record previously written by
    /// [`Self::store`].
    ///
    /// The descriptor is restored first, then the three named fields are
    /// read back. Absence round-trips exactly: a field stored as absent
    /// comes back as `None`.
    pub fn restore(record: &FieldRecord) -> Result<Self, RecordError> {
        record.check_version()?;
        let descriptor = FailureDescriptor::restore(record)?;

        Ok(RangeFailure {
            actual: record.require(Self::FIELD_ACTUAL)?.map(str::to_owned),
            low: record.require(Self::FIELD_LOW)?.map(str::to_owned),
            high: record.require(Self::FIELD_HIGH)?.map(str::to_owned),
            descriptor,
        })
    }
}

impl fmt::Display for RangeFailure {
    /// Renders the canonical diagnostic:
    ///
    /// ```text
    /// Assert.InRange() Failure
    /// Range:  (1 - 10)
    /// Actual: 5
    /// ```
    ///
    /// An absent actual value renders as `(null)`. Absent bounds render as
    /// empty slots with no placeholder; the asymmetry is part of the
    /// message contract and kept deliberately.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nRange:  ({} - {})\nActual: {}",
            self.descriptor.headline(),
            self.low.as_deref().unwrap_or(""),
            self.high.as_deref().unwrap_or(""),
            self.actual.as_deref().unwrap_or(Self::ABSENT_ACTUAL),
        )
    }
}
