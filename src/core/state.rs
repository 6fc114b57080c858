//! # Application State
//!
//! Core view state for the filmstrip. This module contains domain logic only -
//! no TUI-specific types. Presentation state (hover, spinner) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn TemplateProvider>  // where the collection comes from
//! ├── templates: TemplateCollection        // empty until loaded
//! ├── window_offset: usize                 // start of the visible window
//! ├── selected: Option<usize>              // index into templates
//! └── load_state: LoadState                // one-shot load bookkeeping
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Everything the UI shows is derived from these fields by the methods below.

use std::sync::Arc;

use crate::catalog::{TemplateCollection, TemplateProvider, TemplateRecord};

/// Number of thumbnails shown at once.
pub const PAGE_SIZE: usize = 4;

/// Progress of the one-shot collection load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Not mounted yet.
    #[default]
    Idle,
    /// Load issued, result not applied yet.
    Pending,
    Loaded,
    /// Load failed; the collection stays empty for the rest of the session.
    Failed,
}

pub struct App {
    pub provider: Arc<dyn TemplateProvider>,
    pub templates: TemplateCollection,
    pub window_offset: usize,
    pub selected: Option<usize>,
    pub load_state: LoadState,
}

impl App {
    pub fn new(provider: Arc<dyn TemplateProvider>) -> Self {
        Self {
            provider,
            templates: Vec::new(),
            window_offset: 0,
            selected: None,
            load_state: LoadState::Idle,
        }
    }

    /// The up-to-four records currently on screen.
    pub fn visible_window(&self) -> &[TemplateRecord] {
        let start = self.window_offset.min(self.templates.len());
        let end = (start + PAGE_SIZE).min(self.templates.len());
        &self.templates[start..end]
    }

    /// The selected record, if any. `None` means the placeholder is shown.
    pub fn detail(&self) -> Option<&TemplateRecord> {
        self.selected.and_then(|index| self.templates.get(index))
    }

    /// Whether a thumbnail should be marked active.
    pub fn is_active(&self, record: &TemplateRecord) -> bool {
        self.detail().is_some_and(|selected| selected.id == record.id)
    }

    pub fn can_go_next(&self) -> bool {
        self.window_offset + PAGE_SIZE < self.templates.len()
    }

    pub fn can_go_previous(&self) -> bool {
        self.window_offset > 0
    }

    /// 1-based page number and page count, for the status line.
    pub fn page(&self) -> (usize, usize) {
        let pages = self.templates.len().div_ceil(PAGE_SIZE).max(1);
        let current = (self.window_offset / PAGE_SIZE + 1).min(pages);
        (current, pages)
    }
}
