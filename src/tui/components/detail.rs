//! # Detail Panel Component
//!
//! Shows the selected template, or a prompt to pick one.
//!
//! ```text
//! ┌ Large image ─────────────────┐ TITLE  Business Site
//! │                              │ ──────────────────────
//! │  /imagesList/large/7111.jpg  │ DESCRIPTION  Old car
//! │  Old car                     │ ──────────────────────
//! │                              │ COST  $20
//! └──────────────────────────────┘ ...
//! ```
//!
//! Images are not decoded; the panel shows the asset path and its alt text.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::catalog::TemplateRecord;
use crate::tui::component::Component;

pub const PLACEHOLDER: &str = "Select a template";

pub struct DetailPanel<'a> {
    pub record: Option<&'a TemplateRecord>,
}

impl<'a> DetailPanel<'a> {
    pub fn new(record: Option<&'a TemplateRecord>) -> Self {
        Self { record }
    }
}

impl Component for DetailPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.record {
            Some(record) => render_record(frame, area, record),
            None => render_placeholder(frame, area),
        }
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect) {
    let [middle] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let prompt = Paragraph::new(Span::styled(
        PLACEHOLDER,
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(prompt, middle);
}

fn render_record(frame: &mut Frame, area: Rect, record: &TemplateRecord) {
    let [image_area, fields_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .spacing(2)
            .areas(area);

    // Large image stand-in: asset path plus alt text
    let image_block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(" Large image ");
    let image_inner = image_block.inner(image_area);
    frame.render_widget(image_block, image_area);

    let [image_text_area] = Layout::vertical([Constraint::Length(2)])
        .flex(Flex::Center)
        .areas(image_inner);
    let image_text = Paragraph::new(vec![
        Line::from(Span::styled(
            record.image_path(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            record.description.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(image_text, image_text_area);

    let fields = [
        ("Title", record.title.clone()),
        ("Description", record.description.clone()),
        ("Cost", record.display_cost()),
        ("ID #", record.id.clone()),
        ("Thumbnail File", record.thumbnail.clone()),
        ("Large Image File", record.image.clone()),
    ];

    let label_style = Style::default().fg(Color::White).bg(Color::DarkGray);
    let rule = "─".repeat(fields_area.width as usize);
    let mut lines = vec![Line::from(Span::styled(rule.clone(), Style::default().fg(Color::Gray)))];
    for (label, value) in fields {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", label.to_uppercase()), label_style),
            Span::raw(" "),
            Span::raw(value),
        ]));
        lines.push(Line::from(Span::styled(rule.clone(), Style::default().fg(Color::Gray))));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), fields_area);
}
