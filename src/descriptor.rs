//! Generic failure descriptor shared by every assertion-failure kind.
//!
//! Each failure record is built around a [`FailureDescriptor`]: a short fixed
//! title identifying the failure category, plus an optional user-supplied
//! message that a test author may attach at the assertion site. Concrete
//! failure records hold a descriptor by value rather than inheriting from a
//! common failure type, and prefix their own detail lines onto its text.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::{FieldRecord, RecordError};

/// Title and optional user message shared by all failure kinds.
///
/// The title is fixed when the descriptor is created and never changes; the
/// user message, when present, replaces the title as the headline of the
/// rendered diagnostic (the title still travels in the structured record so
/// reporters can classify the failure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDescriptor {
    #[serde(rename = "Title")]
    title: Cow<'static, str>,
    #[serde(rename = "UserMessage", default, skip_serializing_if = "Option::is_none")]
    user_message: Option<String>,
}

impl FailureDescriptor {
    pub(crate) const FIELD_TITLE: &'static str = "Title";
    pub(crate) const FIELD_USER_MESSAGE: &'static str = "UserMessage";

    /// Creates a descriptor with the given fixed title and no user message.
    pub fn new(title: impl Into<Cow<'static, str>>) -> Self {
        FailureDescriptor {
            title: title.into(),
            user_message: None,
        }
    }

    /// Attaches a user-supplied message, consuming and returning the descriptor.
    pub fn with_user_message(mut self, message: impl Into<String>) -> Self {
        self.user_message = Some(message.into());
        self
    }

    /// The fixed title of the failure category.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The user-supplied message, if one was attached.
    pub fn user_message(&self) -> Option<&str> {
        self.user_message.as_deref()
    }

    /// The headline for rendered diagnostics: the user message when present,
    /// the title otherwise.
    pub fn headline(&self) -> &str {
        self.user_message.as_deref().unwrap_or(&self.title)
    }

    /// Appends this descriptor's fields to a record a failure kind has
    /// already begun populating.
    ///
    /// `UserMessage` is only written when present, so restoring from a record
    /// without it yields `None` rather than an error.
    pub(crate) fn store(&self, record: &mut FieldRecord) {
        record.insert(Self::FIELD_TITLE, Some(self.title.clone().into_owned()));
        if let Some(message) = &self.user_message {
            record.insert(Self::FIELD_USER_MESSAGE, Some(message.clone()));
        }
    }

    /// Rebuilds a descriptor from a record, before the failure kind reads its
    /// own fields. A record with no `Title` entry is malformed.
    pub(crate) fn restore(record: &FieldRecord) -> Result<Self, RecordError> {
        let title = record
            .require(Self::FIELD_TITLE)?
            .map(str::to_owned)
            .unwrap_or_default();
        let user_message = record
            .get(Self::FIELD_USER_MESSAGE)
            .flatten()
            .map(str::to_owned);
        Ok(FailureDescriptor {
            title: Cow::Owned(title),
            user_message,
        })
    }
}

impl fmt::Display for FailureDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.headline())
    }
}
