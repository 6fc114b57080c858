//! # TitleBar Component
//!
//! Top line of the screen: the view heading plus a short status.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Filmstrip View | 10 templates · page 2/3"`
//! 2. **Default**: `"Filmstrip View"`
//!
//! The status never carries load errors; those go to the log only.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub const TITLE: &str = "Filmstrip View";

/// Top status bar component.
///
/// # Props
///
/// - `status_message`: Transient status (e.g., "Loading templates ⠋", "10 templates · page 1/3")
pub struct TitleBar {
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(self.status_message.clone()));
        }

        frame.render_widget(Line::from(spans).centered(), area);
    }
}
