//! Event-driven view layer for the notes widget.
//!
//! # Responsibility
//! - Hold the UI field state addressed by fixed element ids.
//! - Turn UI events into note store calls and re-render afterwards.
//! - Rebuild the category dropdown and the note list as HTML fragments.
//!
//! # Invariants
//! - The widget never mutates notes directly; it goes through `NoteStore`.
//! - Category options are derived from all notes, not the filtered view.
//! - A selected category that no longer exists resets the filter to "all".
//! - A rejected add leaves the form untouched and does not re-render.

use crate::model::note::NoteId;
use crate::query::NoteQuery;
use crate::storage::KvStore;
use crate::store::{NoteStore, NoteStoreError};
use log::{debug, error};

pub mod markup;

pub use markup::{
    category_options, format_local_time, note_card, note_list, ALL_CATEGORIES_LABEL,
    EMPTY_LIST_PLACEHOLDER,
};

/// Fixed element identifiers of the widget surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Title,
    Category,
    Content,
    AddBtn,
    Search,
    Filter,
    List,
}

impl ElementId {
    pub const ALL: [ElementId; 7] = [
        Self::Title,
        Self::Category,
        Self::Content,
        Self::AddBtn,
        Self::Search,
        Self::Filter,
        Self::List,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Category => "category",
            Self::Content => "content",
            Self::AddBtn => "addBtn",
            Self::Search => "search",
            Self::Filter => "filter",
            Self::List => "list",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|element| element.as_str() == id)
    }
}

/// User interaction delivered to [`NotesWidget::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Typing into `title`, `category` or `content`.
    FieldInput { field: ElementId, value: String },
    /// Click on `addBtn`.
    AddClicked,
    /// Key press while `content` has focus.
    ContentKeyDown { key: String, ctrl: bool, meta: bool },
    /// Edit of the `search` box.
    SearchInput(String),
    /// Selection change of the `filter` dropdown.
    FilterChanged(String),
    /// Click on a card's delete control.
    DeleteClicked(NoteId),
}

/// Last rendered state of the `filter` and `list` elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedView {
    pub filter_html: String,
    pub list_html: String,
    /// Category selected after the option rebuild; empty means "all".
    pub selected_category: String,
    /// Ids of the visible notes in display order.
    pub visible_ids: Vec<NoteId>,
}

/// The notes widget: form state plus a note store.
pub struct NotesWidget<S: KvStore> {
    store: NoteStore<S>,
    title: String,
    category: String,
    content: String,
    search: String,
    filter: String,
    focus: Option<ElementId>,
    view: RenderedView,
}

impl<S: KvStore> NotesWidget<S> {
    /// Wraps a loaded store and performs the initial render.
    pub fn new(store: NoteStore<S>) -> Self {
        let mut widget = Self {
            store,
            title: String::new(),
            category: String::new(),
            content: String::new(),
            search: String::new(),
            filter: String::new(),
            focus: None,
            view: RenderedView::default(),
        };
        widget.render();
        widget
    }

    /// Dispatches one UI event.
    ///
    /// Returns `true` when the view was re-rendered.
    pub fn handle(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::FieldInput { field, value } => {
                self.set_field(field, value);
                false
            }
            UiEvent::AddClicked => self.add_note(),
            UiEvent::ContentKeyDown { key, ctrl, meta } => {
                if is_submit_shortcut(&key, ctrl, meta) {
                    self.add_note()
                } else {
                    false
                }
            }
            UiEvent::SearchInput(value) => {
                self.search = value;
                self.render();
                true
            }
            UiEvent::FilterChanged(value) => {
                self.filter = value;
                self.render();
                true
            }
            UiEvent::DeleteClicked(id) => {
                self.delete_note(&id);
                true
            }
        }
    }

    /// Rebuilds the category options, then the note list.
    pub fn render(&mut self) -> &RenderedView {
        let categories = self.store.categories();
        if !categories.contains(&self.filter) {
            self.filter.clear();
        }
        let filter_html = category_options(&categories, &self.filter);

        let query = NoteQuery::new(self.filter.as_str(), self.search.as_str());
        let visible = query.apply(self.store.all());
        let list_html = note_list(&visible);

        debug!(
            "event=render module=render status=ok visible={} total={} categories={}",
            visible.len(),
            self.store.len(),
            categories.len()
        );

        self.view = RenderedView {
            filter_html,
            list_html,
            selected_category: self.filter.clone(),
            visible_ids: visible.into_iter().map(|note| note.id).collect(),
        };
        &self.view
    }

    pub fn view(&self) -> &RenderedView {
        &self.view
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    pub fn into_store(self) -> NoteStore<S> {
        self.store
    }

    /// Current value of an input element; `None` for non-input ids.
    pub fn value(&self, element: ElementId) -> Option<&str> {
        match element {
            ElementId::Title => Some(self.title.as_str()),
            ElementId::Category => Some(self.category.as_str()),
            ElementId::Content => Some(self.content.as_str()),
            ElementId::Search => Some(self.search.as_str()),
            ElementId::Filter => Some(self.filter.as_str()),
            ElementId::AddBtn | ElementId::List => None,
        }
    }

    /// Element that currently holds input focus.
    pub fn focused(&self) -> Option<ElementId> {
        self.focus
    }

    /// Renders the full page with current field values and fragments.
    pub fn page_html(&self) -> String {
        markup::page(&markup::PageFields {
            title: &self.title,
            category: &self.category,
            content: &self.content,
            search: &self.search,
            filter_html: &self.view.filter_html,
            list_html: &self.view.list_html,
        })
    }

    fn set_field(&mut self, field: ElementId, value: String) {
        match field {
            ElementId::Title => self.title = value,
            ElementId::Category => self.category = value,
            ElementId::Content => self.content = value,
            other => {
                debug!(
                    "event=field_input module=render status=ignored element={}",
                    other.as_str()
                );
                return;
            }
        }
        self.focus = Some(field);
    }

    fn add_note(&mut self) -> bool {
        match self.store.add(&self.title, &self.category, &self.content) {
            Ok(_) => {
                self.title.clear();
                self.category.clear();
                self.content.clear();
                self.focus = Some(ElementId::Content);
                self.render();
                true
            }
            Err(NoteStoreError::EmptyContent) => false,
            Err(err) => {
                error!("event=add_action module=render status=error error={err}");
                false
            }
        }
    }

    fn delete_note(&mut self, id: &str) {
        if let Err(err) = self.store.remove(id) {
            error!("event=delete_action module=render status=error id={id} error={err}");
        }
        self.render();
    }
}

/// Ctrl+Enter or Cmd(Meta)+Enter.
fn is_submit_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    key == "Enter" && (ctrl || meta)
}
