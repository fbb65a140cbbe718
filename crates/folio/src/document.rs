//! Document (PDF) state store.
//!
//! Tracks the open file, its pages, the edit stack and the current selection.
//! The shell only needs this store as the innermost provider boundary; the
//! page editing UI reads and mutates it through a [`PdfStore`] handle.

use serde::{Deserialize, Serialize};

use crate::store::{Reducer, Store};

/// One page of the open document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Zero-based page index.
    pub index: usize,
    /// Rotation in degrees (0, 90, 180, 270).
    pub rotation: u16,
}

/// A rectangle in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A pending edit on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Edit {
    Text { page: usize, at: Rect, content: String },
    Highlight { page: usize, area: Rect },
    Rotate { page: usize },
    Delete { page: usize },
}

impl Edit {
    /// The page this edit applies to.
    pub fn page(&self) -> usize {
        match self {
            Edit::Text { page, .. }
            | Edit::Highlight { page, .. }
            | Edit::Rotate { page }
            | Edit::Delete { page } => *page,
        }
    }
}

/// The current selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub page: usize,
    pub area: Rect,
}

/// Editing state of the open document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PdfState {
    pub file_name: Option<String>,
    pub pages: Vec<PageInfo>,
    pub edits: Vec<Edit>,
    pub selection: Option<Selection>,
}

impl PdfState {
    /// Returns true if a document is open.
    pub fn is_open(&self) -> bool {
        self.file_name.is_some()
    }

    /// Number of pages in the open document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn has_page(&self, page: usize) -> bool {
        page < self.pages.len()
    }
}

/// Changes to [`PdfState`].
#[derive(Debug, Clone, PartialEq)]
pub enum PdfAction {
    Load { file_name: String, page_count: usize },
    AddEdit(Edit),
    Undo,
    Select(Selection),
    ClearSelection,
    Close,
}

impl Reducer for PdfState {
    type Action = PdfAction;

    fn reduce(&mut self, action: PdfAction) -> bool {
        match action {
            PdfAction::Load {
                file_name,
                page_count,
            } => {
                *self = PdfState {
                    file_name: Some(file_name),
                    pages: (0..page_count)
                        .map(|index| PageInfo { index, rotation: 0 })
                        .collect(),
                    edits: Vec::new(),
                    selection: None,
                };
                true
            }
            PdfAction::AddEdit(edit) => {
                if !self.has_page(edit.page()) {
                    tracing::debug!(page = edit.page(), "ignoring edit for missing page");
                    return false;
                }
                self.edits.push(edit);
                true
            }
            PdfAction::Undo => self.edits.pop().is_some(),
            PdfAction::Select(selection) => {
                if !self.has_page(selection.page) || self.selection == Some(selection) {
                    return false;
                }
                self.selection = Some(selection);
                true
            }
            PdfAction::ClearSelection => self.selection.take().is_some(),
            PdfAction::Close => {
                if !self.is_open() {
                    return false;
                }
                *self = PdfState::default();
                true
            }
        }
    }
}

/// Shared handle to the document state.
pub type PdfStore = Store<PdfState>;

/// Owns the document store, innermost in the provider tree.
#[derive(Debug)]
pub struct PdfProvider {
    store: PdfStore,
}

impl PdfProvider {
    /// Creates the provider with no document open.
    pub fn new() -> Self {
        Self {
            store: Store::new(PdfState::default()),
        }
    }

    /// A handle to the document store.
    pub fn use_pdf(&self) -> PdfStore {
        self.store.clone()
    }

    /// Borrowing access to the document store.
    pub fn store(&self) -> &PdfStore {
        &self.store
    }
}

impl Default for PdfProvider {
    fn default() -> Self {
        Self::new()
    }
}
