//! Note domain model.
//!
//! # Responsibility
//! - Define the single persisted record of the widget.
//! - Apply title/category defaults and reject empty content at construction.
//!
//! # Invariants
//! - `content` is non-empty after trimming, on every construction path
//!   including deserialization.
//! - `id` and `created_at` never change after construction.
//! - Wire field names are `id`, `title`, `category`, `content`, `createdAt`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque note identifier.
///
/// Kept as a plain string because the fallback id strategy does not produce
/// UUIDs and persisted data may carry ids from older sessions.
pub type NoteId = String;

/// Title used when the user leaves the title blank.
pub const DEFAULT_TITLE: &str = "Untitled";
/// Category used when the user leaves the category blank.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Validation failures for note construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// `content` is empty after trimming.
    EmptyContent,
    /// `id` is empty after trimming.
    EmptyId,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "note content must not be empty"),
            Self::EmptyId => write!(f, "note id must not be empty"),
        }
    }
}

impl Error for NoteValidationError {}

/// A single user-authored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NoteWire")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub category: String,
    /// Raw text, newlines preserved. Never escaped before storage.
    pub content: String,
    /// ISO-8601 creation timestamp, serialized as `createdAt`.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Unvalidated wire shape used as the deserialization source for [`Note`].
#[derive(Deserialize)]
struct NoteWire {
    id: String,
    title: String,
    category: String,
    content: String,
    #[serde(rename = "createdAt")]
    created_at: String,
}

impl TryFrom<NoteWire> for Note {
    type Error = NoteValidationError;

    fn try_from(wire: NoteWire) -> Result<Self, Self::Error> {
        let note = Self {
            id: wire.id,
            title: wire.title,
            category: wire.category,
            content: wire.content,
            created_at: wire.created_at,
        };
        note.validate()?;
        Ok(note)
    }
}

impl Note {
    /// Builds a note from raw form input.
    ///
    /// All three inputs are trimmed; blank title and category fall back to
    /// [`DEFAULT_TITLE`] and [`DEFAULT_CATEGORY`].
    ///
    /// # Errors
    /// - `EmptyContent` when `content` is blank after trimming.
    /// - `EmptyId` when `id` is blank.
    pub fn from_input(
        id: impl Into<NoteId>,
        title: &str,
        category: &str,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Self, NoteValidationError> {
        let title = title.trim();
        let category = category.trim();
        let note = Self {
            id: id.into(),
            title: if title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title.to_string()
            },
            category: if category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category.to_string()
            },
            content: content.trim().to_string(),
            created_at: format_timestamp(created_at),
        };
        note.validate()?;
        Ok(note)
    }

    /// Checks the record-level invariants.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.id.trim().is_empty() {
            return Err(NoteValidationError::EmptyId);
        }
        if self.content.trim().is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }
        Ok(())
    }

    /// Parses `created_at`; `None` when the stored text is not a valid
    /// RFC 3339 timestamp.
    pub fn created_at_parsed(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Formats a timestamp as ISO-8601 UTC with millisecond precision,
/// e.g. `2026-10-18T09:28:00.123Z`.
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses an RFC 3339 timestamp into UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}
