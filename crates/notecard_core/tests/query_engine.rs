use notecard_core::{visible, Note, NoteQuery};

fn note(id: &str, category: &str, content: &str, created_at: &str) -> Note {
    Note {
        id: id.to_string(),
        title: "Untitled".to_string(),
        category: category.to_string(),
        content: content.to_string(),
        created_at: created_at.to_string(),
    }
}

fn fixture() -> Vec<Note> {
    vec![
        note("n1", "A", "foo", "2026-03-01T08:00:00.000Z"),
        note("n2", "B", "foobar", "2026-03-02T08:00:00.000Z"),
        note("n3", "A", "baz", "2026-03-03T08:00:00.000Z"),
    ]
}

fn ids(notes: &[Note]) -> Vec<&str> {
    notes.iter().map(|note| note.id.as_str()).collect()
}

#[test]
fn category_and_search_filters_compose() {
    let notes = fixture();

    assert_eq!(ids(&visible(&notes, "A", "foo")), vec!["n1"]);
    assert_eq!(ids(&visible(&notes, "", "foo")), vec!["n2", "n1"]);
    assert_eq!(ids(&visible(&notes, "B", "")), vec!["n2"]);
}

#[test]
fn no_filters_returns_everything_newest_first() {
    let notes = fixture();
    assert_eq!(ids(&visible(&notes, "", "")), vec!["n3", "n2", "n1"]);
}

#[test]
fn no_match_yields_empty_list() {
    let notes = fixture();
    assert!(visible(&notes, "C", "").is_empty());
    assert!(visible(&notes, "A", "qux").is_empty());
}

#[test]
fn search_is_case_insensitive_over_title_content_and_category() {
    let mut notes = fixture();
    notes[0].title = "Groceries".to_string();

    assert_eq!(ids(&NoteQuery::new("", "GROCER").apply(&notes)), vec!["n1"]);
    assert_eq!(ids(&NoteQuery::new("", "FooBar").apply(&notes)), vec!["n2"]);
    assert_eq!(ids(&NoteQuery::new("", "b").apply(&notes)), vec!["n3", "n2"]);
}

#[test]
fn timestamps_with_offsets_are_compared_as_instants() {
    let notes = vec![
        note("utc", "A", "x", "2026-03-01T10:00:00.000Z"),
        note("offset", "A", "x", "2026-03-01T11:30:00.000+02:00"),
    ];
    assert_eq!(ids(&visible(&notes, "", "")), vec!["utc", "offset"]);
}
