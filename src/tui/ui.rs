use crate::core::state::{App, LoadState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::filmstrip::STRIP_HEIGHT;
use crate::tui::components::{DetailPanel, Filmstrip, StripHit, StripLayout, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const KEY_HINTS: &str = "←/→ page · 1-4 select · click a thumbnail · q quit";

/// Top-level screen regions.
pub struct ScreenLayout {
    pub title: Rect,
    pub detail: Rect,
    pub strip: Rect,
    pub footer: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min};
    let [title, detail, strip, footer] =
        Layout::vertical([Length(1), Min(0), Length(STRIP_HEIGHT), Length(1)]).areas(area);
    ScreenLayout {
        title,
        detail,
        strip,
        footer,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    let layout = screen_layout(frame.area());

    TitleBar::new(status_message(app, tui.spinner_frame)).render(frame, layout.title);

    let detail_area = layout.detail.inner(ratatui::layout::Margin::new(2, 1));
    DetailPanel::new(app.detail()).render(frame, detail_area);

    Filmstrip {
        window: app.visible_window(),
        active_id: app.detail().map(|record| record.id.as_str()),
        hovered_slot: tui.hovered_slot,
        can_go_previous: app.can_go_previous(),
        can_go_next: app.can_go_next(),
    }
    .render(frame, layout.strip);

    frame.render_widget(
        Paragraph::new(KEY_HINTS)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        layout.footer,
    );
}

/// Status line text. Load failures read the same as an empty collection.
pub fn status_message(app: &App, spinner_frame: usize) -> String {
    match app.load_state {
        LoadState::Idle | LoadState::Pending => {
            format!("Loading templates {}", SPINNER[spinner_frame % SPINNER.len()])
        }
        LoadState::Loaded | LoadState::Failed if app.templates.is_empty() => {
            "No templates".to_string()
        }
        _ => {
            let (page, pages) = app.page();
            let noun = if app.templates.len() == 1 { "template" } else { "templates" };
            format!("{} {} · page {}/{}", app.templates.len(), noun, page, pages)
        }
    }
}

/// Resolve a terminal cell to the strip element drawn there.
pub fn hit_test_strip(column: u16, row: u16, frame_area: Rect) -> Option<StripHit> {
    StripLayout::new(screen_layout(frame_area).strip).hit_test(column, row)
}
