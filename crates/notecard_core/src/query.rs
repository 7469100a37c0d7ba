//! Visible-set computation for the note list.
//!
//! # Responsibility
//! - Apply category and search filters to the note collection.
//! - Order the result newest-first by creation time.
//! - Derive the category option set for the filter dropdown.
//!
//! # Invariants
//! - Category filtering is exact and case-sensitive.
//! - Search matching is case-insensitive over `title content category`.
//! - Tie order for equal timestamps is unspecified.

use crate::model::note::Note;
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Current filter inputs of the list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteQuery {
    /// Exact category to keep; empty keeps every category.
    pub category: String,
    /// Raw search box text; trimmed and case-folded before matching.
    pub search: String,
}

impl NoteQuery {
    pub fn new(category: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            search: search.into(),
        }
    }

    /// Runs this query against `notes`.
    pub fn apply(&self, notes: &[Note]) -> Vec<Note> {
        visible(notes, &self.category, &self.search)
    }
}

/// Returns the notes matching `category_filter` and `search_text`, most
/// recent first.
///
/// Returns an empty list when nothing matches.
pub fn visible(notes: &[Note], category_filter: &str, search_text: &str) -> Vec<Note> {
    let needle = search_text.trim().to_lowercase();

    let mut matched: Vec<Note> = notes
        .iter()
        .filter(|note| category_filter.is_empty() || note.category == category_filter)
        .filter(|note| needle.is_empty() || search_haystack(note).contains(&needle))
        .cloned()
        .collect();

    // `None` (unparsable) orders below every parsed timestamp.
    matched.sort_unstable_by_key(|note| Reverse(note.created_at_parsed()));
    matched
}

/// Distinct non-empty categories across `notes`, lexicographically sorted.
pub fn distinct_categories(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .map(|note| note.category.as_str())
        .filter(|category| !category.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn search_haystack(note: &Note) -> String {
    format!("{} {} {}", note.title, note.content, note.category).to_lowercase()
}
