mod common;

use common::ProbeKvStore;
use notecard_core::render::EMPTY_LIST_PLACEHOLDER;
use notecard_core::{
    ElementId, MemoryKvStore, NoteStorage, NoteStore, NotesWidget, UiEvent,
};

fn widget() -> NotesWidget<MemoryKvStore> {
    NotesWidget::new(NoteStore::open(NoteStorage::new(MemoryKvStore::new())))
}

fn type_into(widget: &mut NotesWidget<impl notecard_core::KvStore>, field: ElementId, value: &str) {
    widget.handle(UiEvent::FieldInput {
        field,
        value: value.to_string(),
    });
}

fn add(widget: &mut NotesWidget<impl notecard_core::KvStore>, title: &str, category: &str, content: &str) {
    type_into(widget, ElementId::Title, title);
    type_into(widget, ElementId::Category, category);
    type_into(widget, ElementId::Content, content);
    assert!(widget.handle(UiEvent::AddClicked));
}

#[test]
fn initial_render_shows_placeholder_and_all_option() {
    let widget = widget();
    assert_eq!(widget.view().list_html, EMPTY_LIST_PLACEHOLDER);
    assert_eq!(
        widget.view().filter_html,
        r#"<option value="" selected>All categories</option>"#
    );
}

#[test]
fn add_clears_form_focuses_content_and_renders_card() {
    let mut widget = widget();
    add(&mut widget, "Shopping", "Home", "milk\neggs");

    for field in [ElementId::Title, ElementId::Category, ElementId::Content] {
        assert_eq!(widget.value(field), Some(""));
    }
    assert_eq!(widget.focused(), Some(ElementId::Content));
    assert_eq!(widget.view().visible_ids.len(), 1);
    assert!(widget.view().list_html.contains("<strong>Shopping</strong>"));
    assert!(widget.view().list_html.contains("milk\neggs"));
    assert!(widget.view().filter_html.contains(r#"<option value="Home">Home</option>"#));
}

#[test]
fn rejected_add_keeps_fields_and_view() {
    let mut widget = NotesWidget::new(NoteStore::open(NoteStorage::new(ProbeKvStore::default())));
    type_into(&mut widget, ElementId::Title, "draft title");
    type_into(&mut widget, ElementId::Content, "   ");
    let before = widget.view().clone();

    assert!(!widget.handle(UiEvent::AddClicked));
    assert_eq!(widget.value(ElementId::Title), Some("draft title"));
    assert_eq!(widget.value(ElementId::Content), Some("   "));
    assert_eq!(widget.view(), &before);
    assert_eq!(widget.store().storage().store().writes, 0);
}

#[test]
fn ctrl_or_meta_enter_submits_and_plain_enter_does_not() {
    let mut widget = widget();
    type_into(&mut widget, ElementId::Content, "via shortcut");

    let plain = UiEvent::ContentKeyDown {
        key: "Enter".to_string(),
        ctrl: false,
        meta: false,
    };
    assert!(!widget.handle(plain));
    assert!(widget.store().is_empty());

    assert!(widget.handle(UiEvent::ContentKeyDown {
        key: "Enter".to_string(),
        ctrl: true,
        meta: false,
    }));
    assert_eq!(widget.store().len(), 1);

    type_into(&mut widget, ElementId::Content, "via cmd");
    assert!(widget.handle(UiEvent::ContentKeyDown {
        key: "Enter".to_string(),
        ctrl: false,
        meta: true,
    }));
    assert_eq!(widget.store().len(), 2);
}

#[test]
fn search_and_filter_rerender_immediately() {
    let mut widget = widget();
    add(&mut widget, "", "A", "foo");
    add(&mut widget, "", "B", "foobar");
    add(&mut widget, "", "A", "baz");

    assert!(widget.handle(UiEvent::SearchInput("f".to_string())));
    assert_eq!(widget.view().visible_ids.len(), 2);

    assert!(widget.handle(UiEvent::FilterChanged("A".to_string())));
    assert_eq!(widget.view().visible_ids.len(), 1);
    assert_eq!(widget.view().selected_category, "A");
    assert!(widget.view().filter_html.contains(r#"<option value="A" selected>A</option>"#));

    assert!(widget.handle(UiEvent::SearchInput(String::new())));
    assert_eq!(widget.view().visible_ids.len(), 2);
}

#[test]
fn deleting_last_note_of_selected_category_resets_filter_to_all() {
    let mut widget = widget();
    add(&mut widget, "", "Work", "report");
    add(&mut widget, "", "Home", "laundry");

    widget.handle(UiEvent::FilterChanged("Work".to_string()));
    let work_id = widget.view().visible_ids[0].clone();

    assert!(widget.handle(UiEvent::DeleteClicked(work_id)));
    assert_eq!(widget.view().selected_category, "");
    assert_eq!(widget.value(ElementId::Filter), Some(""));
    assert!(!widget.view().filter_html.contains("Work"));
    assert_eq!(widget.view().visible_ids.len(), 1);
}

#[test]
fn selection_survives_when_category_still_present() {
    let mut widget = widget();
    add(&mut widget, "", "Work", "one");
    add(&mut widget, "", "Work", "two");

    widget.handle(UiEvent::FilterChanged("Work".to_string()));
    let first = widget.view().visible_ids[0].clone();
    widget.handle(UiEvent::DeleteClicked(first));

    assert_eq!(widget.view().selected_category, "Work");
    assert_eq!(widget.view().visible_ids.len(), 1);
}

#[test]
fn delete_of_unknown_id_still_rerenders() {
    let mut widget = widget();
    add(&mut widget, "", "", "only");
    assert!(widget.handle(UiEvent::DeleteClicked("missing".to_string())));
    assert_eq!(widget.store().len(), 1);
}

#[test]
fn user_text_is_escaped_in_cards_and_page() {
    let mut widget = widget();
    add(&mut widget, "<img src=x>", "\"quoted\"", "a & b");
    type_into(&mut widget, ElementId::Title, "it's");

    let list = &widget.view().list_html;
    assert!(list.contains("&lt;img src=x&gt;"));
    assert!(list.contains("&quot;quoted&quot;"));
    assert!(list.contains("a &amp; b"));
    assert!(!list.contains("<img"));

    let page = widget.page_html();
    for element in ElementId::ALL {
        assert!(page.contains(&format!(r#"id="{}""#, element.as_str())));
    }
    assert!(page.contains(r#"value="it&#039;s""#));
}

#[test]
fn field_input_ignores_non_form_elements() {
    let mut widget = widget();
    type_into(&mut widget, ElementId::List, "ignored");
    assert_eq!(widget.value(ElementId::List), None);
    assert_eq!(widget.focused(), None);
}
