//! # Filmstrip Component
//!
//! The thumbnail strip with its two navigation controls.
//!
//! ```text
//! ╭──────────────────────────────────────────────────────────╮
//! │    ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐    │
//! │ ◀  │t4-m.jpg  │ │t5-m.jpg  │ │t6-m.jpg  │ │t7-m.jpg  │  ▶ │
//! │    │   t4     │ │   t5     │ │   t6     │ │   t7     │    │
//! │    └──────────┘ └──────────┘ └──────────┘ └──────────┘    │
//! ╰──────────────────────────────────────────────────────────╯
//! ```
//!
//! [`StripLayout`] is shared with mouse hit-testing so a click lands on
//! exactly what was drawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::catalog::TemplateRecord;
use crate::core::state::PAGE_SIZE;
use crate::tui::component::Component;

/// Rows the strip needs, borders included.
pub const STRIP_HEIGHT: u16 = 7;
const CONTROL_WIDTH: u16 = 5;

const ACTIVE_COLOR: Color = Color::Red;
const HOVER_COLOR: Color = Color::Gray;

/// What a point inside the strip lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripHit {
    Previous,
    Next,
    Thumbnail(usize),
}

/// Areas of the strip's controls and slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripLayout {
    pub previous: Rect,
    pub slots: [Rect; PAGE_SIZE],
    pub next: Rect,
}

impl StripLayout {
    pub fn new(area: Rect) -> Self {
        let inner = Block::bordered().inner(area);
        let [previous, middle, next] = Layout::horizontal([
            Constraint::Length(CONTROL_WIDTH),
            Constraint::Fill(1),
            Constraint::Length(CONTROL_WIDTH),
        ])
        .areas(inner);
        let slots = Layout::horizontal([Constraint::Fill(1); PAGE_SIZE])
            .spacing(1)
            .areas(middle);
        Self {
            previous,
            slots,
            next,
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<StripHit> {
        let position = Position::new(column, row);
        if self.previous.contains(position) {
            return Some(StripHit::Previous);
        }
        if self.next.contains(position) {
            return Some(StripHit::Next);
        }
        self.slots
            .iter()
            .position(|slot| slot.contains(position))
            .map(StripHit::Thumbnail)
    }
}

/// Props for one frame of the strip.
pub struct Filmstrip<'a> {
    pub window: &'a [TemplateRecord],
    pub active_id: Option<&'a str>,
    pub hovered_slot: Option<usize>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl Component for Filmstrip<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = StripLayout::new(area);
        frame.render_widget(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
            area,
        );

        render_control(frame, layout.previous, "◀", self.can_go_previous);
        render_control(frame, layout.next, "▶", self.can_go_next);

        for (slot, (record, slot_area)) in self.window.iter().zip(layout.slots).enumerate() {
            let active = self.active_id == Some(record.id.as_str());
            let hovered = self.hovered_slot == Some(slot);
            render_thumbnail(frame, slot_area, slot, record, active, hovered);
        }
    }
}

fn render_control(frame: &mut Frame, area: Rect, symbol: &str, enabled: bool) {
    let style = if enabled {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };
    let [middle] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled(symbol, style)).alignment(Alignment::Center),
        middle,
    );
}

fn render_thumbnail(
    frame: &mut Frame,
    area: Rect,
    slot: usize,
    record: &TemplateRecord,
    active: bool,
    hovered: bool,
) {
    let (border_style, badge_style) = if active {
        (
            Style::default().fg(ACTIVE_COLOR).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White).bg(ACTIVE_COLOR),
        )
    } else if hovered {
        (
            Style::default().fg(HOVER_COLOR),
            Style::default().fg(Color::Black).bg(HOVER_COLOR),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Black).bg(Color::DarkGray),
        )
    };

    let block = Block::bordered()
        .border_type(if active { BorderType::Thick } else { BorderType::Plain })
        .border_style(border_style)
        .title(format!(" {} ", slot + 1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let lines = vec![
        Line::from(truncate_to_width(&record.thumbnail, width)),
        Line::from(Span::styled(
            truncate_to_width(&record.description, width),
            Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
        )),
        Line::from(Span::styled(
            format!(" {} ", truncate_to_width(&record.id, width.saturating_sub(2))),
            badge_style,
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Cut `text` to at most `width` columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_templates;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn strip_area() -> Rect {
        Rect::new(0, 0, 80, STRIP_HEIGHT)
    }

    #[test]
    fn test_layout_controls_flank_slots() {
        let layout = StripLayout::new(strip_area());
        assert_eq!(layout.previous.x, 1);
        assert_eq!(layout.next.right(), 79);
        assert!(layout.slots[0].x >= layout.previous.right());
        assert!(layout.slots[PAGE_SIZE - 1].right() <= layout.next.x);
        for pair in layout.slots.windows(2) {
            assert!(pair[0].right() < pair[1].x);
        }
    }

    #[test]
    fn test_hit_test() {
        let layout = StripLayout::new(strip_area());
        assert_eq!(layout.hit_test(2, 3), Some(StripHit::Previous));
        assert_eq!(layout.hit_test(77, 3), Some(StripHit::Next));

        let third = layout.slots[2];
        assert_eq!(
            layout.hit_test(third.x + 1, third.y + 1),
            Some(StripHit::Thumbnail(2))
        );
        // Outer border belongs to nothing
        assert_eq!(layout.hit_test(40, 0), None);
        assert_eq!(layout.hit_test(40, 20), None);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a-long-file-name.jpg", 8), "a-long-…");
        assert_eq!(truncate_to_width("anything", 0), "");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn test_renders_window_and_controls() {
        let templates = sample_templates(10);
        let backend = TestBackend::new(80, STRIP_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                Filmstrip {
                    window: &templates[4..8],
                    active_id: Some("t5"),
                    hovered_slot: None,
                    can_go_previous: true,
                    can_go_next: true,
                }
                .render(f, f.area())
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        for id in ["t4", "t5", "t6", "t7"] {
            assert!(text.contains(id), "missing {id}");
        }
        assert!(!text.contains("t8"));
        assert!(text.contains('◀'));
        assert!(text.contains('▶'));

        // Active slot gets the red border
        let layout = StripLayout::new(Rect::new(0, 0, 80, STRIP_HEIGHT));
        let active = layout.slots[1];
        assert_eq!(buffer[(active.x, active.y)].fg, ACTIVE_COLOR);
        let inactive = layout.slots[0];
        assert_ne!(buffer[(inactive.x, inactive.y)].fg, ACTIVE_COLOR);
    }

    #[test]
    fn test_disabled_control_is_dimmed() {
        let templates = sample_templates(2);
        let backend = TestBackend::new(80, STRIP_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                Filmstrip {
                    window: &templates,
                    active_id: None,
                    hovered_slot: Some(0),
                    can_go_previous: false,
                    can_go_next: false,
                }
                .render(f, f.area())
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let layout = StripLayout::new(Rect::new(0, 0, 80, STRIP_HEIGHT));
        let previous = layout.previous;
        let arrow = (previous.y..previous.bottom())
            .flat_map(|y| (previous.x..previous.right()).map(move |x| (x, y)))
            .map(|pos| &buffer[pos])
            .find(|cell| cell.symbol() == "◀")
            .unwrap();
        assert!(arrow.modifier.contains(Modifier::DIM));

        let hovered = layout.slots[0];
        assert_eq!(buffer[(hovered.x, hovered.y)].fg, HOVER_COLOR);
    }
}
