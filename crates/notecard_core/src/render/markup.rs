//! HTML fragments for the filter dropdown, note cards and page shell.
//!
//! All user text passes through [`escape_html`] here and nowhere earlier.

use super::ElementId;
use crate::html::escape_html;
use crate::model::note::{parse_timestamp, Note};
use chrono::Local;

/// Label of the leading "no filter" option.
pub const ALL_CATEGORIES_LABEL: &str = "All categories";
/// Markup shown in the list when no note is visible.
pub const EMPTY_LIST_PLACEHOLDER: &str = r#"<p class="meta">No notes yet.</p>"#;

const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a stored timestamp in the local time zone.
///
/// Returns `Invalid Date` when the stored text cannot be parsed.
pub fn format_local_time(created_at: &str) -> String {
    match parse_timestamp(created_at) {
        Some(parsed) => parsed
            .with_timezone(&Local)
            .format(LOCAL_TIME_FORMAT)
            .to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Renders the `<option>` list: "all" first, then `categories` in order.
///
/// `selected` is marked with the `selected` attribute; an empty value
/// selects the "all" option.
pub fn category_options(categories: &[String], selected: &str) -> String {
    let mut html = option("", ALL_CATEGORIES_LABEL, selected.is_empty());
    for category in categories {
        html.push_str(&option(category, category, category == selected));
    }
    html
}

fn option(value: &str, label: &str, is_selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        escape_html(value),
        if is_selected { " selected" } else { "" },
        escape_html(label)
    )
}

/// Renders one note card with a delete control bound to the note id.
pub fn note_card(note: &Note) -> String {
    format!(
        r#"
    <div class="note">
      <div><strong>{title}</strong></div>
      <div class="meta">{category} • {time}</div>
      <div style="margin-top:8px; white-space:pre-wrap;">{content}</div>
      <div class="actions">
        <button type="button" data-action="delete" data-note-id="{id}">Delete</button>
      </div>
    </div>
  "#,
        title = escape_html(&note.title),
        category = escape_html(&note.category),
        time = escape_html(&format_local_time(&note.created_at)),
        content = escape_html(&note.content),
        id = escape_html(&note.id),
    )
}

/// Renders the list container body for `notes`.
pub fn note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return EMPTY_LIST_PLACEHOLDER.to_string();
    }
    notes.iter().map(note_card).collect()
}

/// Values placed into the page shell.
pub struct PageFields<'a> {
    pub title: &'a str,
    pub category: &'a str,
    pub content: &'a str,
    pub search: &'a str,
    pub filter_html: &'a str,
    pub list_html: &'a str,
}

/// Renders a standalone document hosting every fixed element id.
pub fn page(fields: &PageFields<'_>) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Notes</title>
</head>
<body>
  <section class="editor">
    <input id="{title_id}" placeholder="Title" value="{title}">
    <input id="{category_id}" placeholder="Category" value="{category}">
    <textarea id="{content_id}" placeholder="Write a note (Ctrl+Enter to add)">{content}</textarea>
    <button id="{add_id}" type="button">Add</button>
  </section>
  <section class="browse">
    <input id="{search_id}" placeholder="Search" value="{search}">
    <select id="{filter_id}">{filter_html}</select>
  </section>
  <div id="{list_id}">{list_html}</div>
</body>
</html>
"#,
        title_id = ElementId::Title.as_str(),
        category_id = ElementId::Category.as_str(),
        content_id = ElementId::Content.as_str(),
        add_id = ElementId::AddBtn.as_str(),
        search_id = ElementId::Search.as_str(),
        filter_id = ElementId::Filter.as_str(),
        list_id = ElementId::List.as_str(),
        title = escape_html(fields.title),
        category = escape_html(fields.category),
        content = escape_html(fields.content),
        search = escape_html(fields.search),
        filter_html = fields.filter_html,
        list_html = fields.list_html,
    )
}

#[cfg(test)]
mod tests {
    use super::{category_options, format_local_time, note_card, note_list, EMPTY_LIST_PLACEHOLDER};
    use crate::model::note::Note;

    fn sample(content: &str) -> Note {
        Note {
            id: "id-'1'".to_string(),
            title: "<script>".to_string(),
            category: "A&B".to_string(),
            content: content.to_string(),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn card_escapes_every_user_field() {
        let card = note_card(&sample("x \"quoted\"\nsecond line"));
        assert!(card.contains("&lt;script&gt;"));
        assert!(card.contains("A&amp;B"));
        assert!(card.contains("x &quot;quoted&quot;\nsecond line"));
        assert!(card.contains(r#"data-note-id="id-&#039;1&#039;""#));
        assert!(!card.contains("<script>"));
    }

    #[test]
    fn empty_list_uses_placeholder() {
        assert_eq!(note_list(&[]), EMPTY_LIST_PLACEHOLDER);
        assert_eq!(note_list(&[sample("a"), sample("b")]).matches("class=\"note\"").count(), 2);
    }

    #[test]
    fn options_mark_selected_and_escape_values() {
        let html = category_options(&["<x>".to_string(), "b".to_string()], "b");
        assert!(html.starts_with(r#"<option value="">All categories</option>"#));
        assert!(html.contains(r#"<option value="&lt;x&gt;">&lt;x&gt;</option>"#));
        assert!(html.contains(r#"<option value="b" selected>b</option>"#));

        let all = category_options(&["b".to_string()], "");
        assert!(all.starts_with(r#"<option value="" selected>All categories</option>"#));
    }

    #[test]
    fn local_time_reports_invalid_dates() {
        assert_eq!(format_local_time("nope"), "Invalid Date");
        let formatted = format_local_time("2026-01-01T00:00:00.000Z");
        assert_eq!(formatted.len(), "2026-01-01 00:00:00".len());
    }
}
