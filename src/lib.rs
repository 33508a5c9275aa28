//! # assert-range: Structured Range-Assertion Failures
//!
//! `assert-range` provides the failure record behind an "is this value inside
//! an inclusive range" test assertion. When the assertion entry point decides
//! a value lies outside `[low, high]`, it builds a [`RangeFailure`] carrying
//! the value and both bounds as captured display strings. The record renders
//! a precise diagnostic message and survives serialization, so a failure
//! raised in an out-of-process test runner can be rebuilt on the reporting
//! side with nothing lost.
//!
//! This crate deliberately does *not* decide whether a value is in range;
//! that is the assertion's job. It owns what happens after the decision: the
//! data model of the failure, its message, and its round-trip contract.
//!
//! # Quick Start
//!
//! ```rust
//! use assert_range::RangeFailure;
//!
//! let failure = RangeFailure::out_of_range(5, 1, 4);
//!
//! assert_eq!(
//!     failure.message(),
//!     "Assert.InRange() Failure\n\
//!      Range:  (1 - 4)\n\
//!      Actual: 5",
//! );
//! ```
//!
//! # Capturing Values
//!
//! Inputs are rendered to text once, at construction, via their `Display`
//! implementations. The record owns the resulting strings and never looks at
//! the original values again, so it cannot be invalidated by later mutation:
//!
//! ```rust
//! use assert_range::RangeFailure;
//!
//! let mut checked = String::from("zzz");
//! let failure = RangeFailure::out_of_range(&checked, "aaa", "mmm");
//! checked.clear();
//!
//! assert_eq!(failure.actual(), Some("zzz"));
//! ```
//!
//! Any input may be absent. Absence is captured as absence, not as the text
//! `"null"`, and is distinguishable from every real rendering:
//!
//! ```rust
//! use assert_range::RangeFailure;
//!
//! let failure = RangeFailure::new(None::<i32>, Some(1), Some(10));
//! assert_eq!(failure.actual(), None);
//!
//! // Only the rendered message substitutes a placeholder for the
//! // missing actual value.
//! assert!(failure.message().ends_with("Actual: (null)"));
//! ```
//!
//! # Crossing a Boundary
//!
//! Failures travel two ways. They are plain serde types, so any serde format
//! can carry them with the named fields `Actual`, `Low`, `High` plus the
//! descriptor's `Title`. And they can be written into an explicit
//! [`FieldRecord`] (an ordered, versioned list of named optional string
//! fields) and rebuilt from it:
//!
//! ```rust
//! use assert_range::{FieldRecord, RangeFailure};
//!
//! let failure = RangeFailure::out_of_range(5, 1, 4);
//!
//! let mut record = FieldRecord::new();
//! failure.store(Some(&mut record))?;
//!
//! let rebuilt = RangeFailure::restore(&record)?;
//! assert_eq!(rebuilt, failure);
//! # Ok::<(), assert_range::RecordError>(())
//! ```
//!
//! Storing into an absent sink is the one precondition this crate enforces:
//! it fails with [`RecordError::NullArgument`] before writing anything.

#![warn(missing_docs)]

mod descriptor;
mod failure;
mod record;

pub use descriptor::FailureDescriptor;
pub use failure::{RANGE_FAILURE_TITLE, RangeFailure};
pub use record::{FieldRecord, RecordError};
