// Panel View Component
// Bordered content region for whichever panel is currently shown

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::{RectHandle, RectRegistry};
use crate::utilities::hex_color;

pub struct PanelView<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub border_color: Color,
}

impl<'a> PanelView<'a> {
    pub fn new(title: &'a str, body: &'a str) -> Self {
        Self {
            title,
            body,
            border_color: Color::White,
        }
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(self.border_color),
            ))
    }

    /// Render the panel and register its area under `name`
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        registry: &mut RectRegistry,
        name: &str,
    ) -> RectHandle {
        let lines: Vec<Line> = self.body.lines().map(Line::from).collect();
        let paragraph = Paragraph::new(lines)
            .block(self.block())
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
        registry.register(Some(name), area)
    }
}

/// Render the empty state shown when no panel is visible
pub fn render_empty_panel(f: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(hex_color(0x333333)));
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(hex_color(0x777777)),
    )))
    .block(block);
    f.render_widget(paragraph, area);
}
