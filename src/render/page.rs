// Page rendering
// Title, button bar, visible panel and a status line

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_components::{
    hex_color, render_empty_panel, ButtonBar, ButtonBarStyle, PanelView, RectRegistry,
};

use crate::constants::{HWND_BUTTON_PREFIX, HWND_PANEL_BOX};
use crate::core::App;

/// Render the whole page and refresh the button hit areas in `rects`
pub fn render_page(f: &mut Frame, area: Rect, app: &App, rects: &mut RectRegistry) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    // Hit areas from the previous frame may no longer match the layout
    rects.unregister_prefixed(HWND_BUTTON_PREFIX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Buttons
            Constraint::Min(0),    // Panel
            Constraint::Length(1), // Status
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", app.page.title),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    f.render_widget(title, chunks[0]);

    let active_color = app
        .page
        .button_bar
        .color
        .as_deref()
        .unwrap_or(&app.config.ui.active_color);
    let bar = ButtonBar::new(
        app.button_items(),
        ButtonBarStyle::from_str(&app.page.button_bar.style),
    )
    .with_color(active_color)
    .with_inactive_color(&app.config.ui.inactive_color);
    bar.render(f, chunks[1], rects, HWND_BUTTON_PREFIX);

    match app.visible_panel() {
        Some(panel) => {
            PanelView::new(&panel.label, &panel.body)
                .with_border_color(tui_components::parse_color(active_color))
                .render(f, chunks[2], rects, HWND_PANEL_BOX);
        }
        None => render_empty_panel(f, chunks[2], " No panel is visible"),
    }

    let status = match &app.last_error {
        Some(e) => Span::styled(format!(" {}", e), Style::default().fg(Color::Red)),
        None => Span::styled(
            " click a tab · q quit".to_string(),
            Style::default().fg(hex_color(0x666666)),
        ),
    };
    f.render_widget(Paragraph::new(Line::from(status)), chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AppConfig, PageConfig};
    use ratatui::{backend::TestBackend, Terminal};

    const PAGE: &str = r#"
title: Forge
panels:
  - id: Overview
    body: "overview body"
  - id: Logs
    body: "logs body"
buttons:
  - label: Overview
    target: Overview
    default_open: true
  - label: Logs
    target: Logs
"#;

    fn screen(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_render_then_click() {
        let mut app = App::new(AppConfig::default(), PageConfig::from_yaml(PAGE).unwrap()).unwrap();
        let mut rects = RectRegistry::new();
        let mut terminal = Terminal::new(TestBackend::new(50, 10)).unwrap();

        terminal
            .draw(|f| render_page(f, f.area(), &app, &mut rects))
            .unwrap();
        let lines = screen(&terminal);
        assert!(lines[0].contains("Forge"));
        assert!(lines[1].starts_with("── [ Overview ]─[ Logs ]"));
        assert!(lines.iter().any(|l| l.contains("overview body")));

        // "── [ Overview ]─" is 16 cells wide, so "[ Logs ]" starts at column 16
        assert_eq!(app.handle_click(&rects, 17, 1), Some(Ok(())));

        terminal
            .draw(|f| render_page(f, f.area(), &app, &mut rects))
            .unwrap();
        let lines = screen(&terminal);
        assert!(lines.iter().any(|l| l.contains("logs body")));
        assert!(!lines.iter().any(|l| l.contains("overview body")));
    }

    #[test]
    fn test_click_lands_on_wide_label() {
        let yaml = r#"
panels:
  - id: A
    body: "alpha"
  - id: B
    body: "beta"
buttons:
  - label: 概要概要
    target: A
    default_open: true
  - label: Logs
    target: B
"#;
        let mut app = App::new(AppConfig::default(), PageConfig::from_yaml(yaml).unwrap()).unwrap();
        let mut rects = RectRegistry::new();
        let mut terminal = Terminal::new(TestBackend::new(50, 10)).unwrap();

        terminal
            .draw(|f| render_page(f, f.area(), &app, &mut rects))
            .unwrap();

        // "── " then "[ 概要概要 ]" over cells 3..15, "─", "[ Logs ]" over 16..24
        assert_eq!(app.handle_click(&rects, 22, 1), Some(Ok(())));
        assert_eq!(app.switcher.visible_panel_id(&app.document), Some("B"));

        assert_eq!(app.handle_click(&rects, 13, 1), Some(Ok(())));
        assert_eq!(app.switcher.visible_panel_id(&app.document), Some("A"));
        let active: Vec<bool> = app.button_items().iter().map(|i| i.active).collect();
        assert_eq!(active, vec![true, false]);

        assert!(app.handle_click(&rects, 15, 1).is_none());
    }

    #[test]
    fn test_render_empty_state() {
        let page = PageConfig::from_yaml("title: Blank\npanels:\n  - id: A\n").unwrap();
        let app = App::new(AppConfig::default(), page).unwrap();
        let mut rects = RectRegistry::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();

        terminal
            .draw(|f| render_page(f, f.area(), &app, &mut rects))
            .unwrap();

        assert!(screen(&terminal).iter().any(|l| l.contains("No panel is visible")));
        assert!(rects.hit_test_prefixed(5, 1, HWND_BUTTON_PREFIX).is_none());
    }
}
