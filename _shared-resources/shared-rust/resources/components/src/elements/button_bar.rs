// Button Bar Component
// A single-row strip of clickable buttons, one of which may be highlighted as active

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::{RectHandle, RectRegistry};
use crate::utilities::{hex_color, parse_color};

const LEADING: &str = "── ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonBarStyle {
    /// Every button in brackets: ── [ ONE ]─[ TWO ]
    #[default]
    Boxed,
    /// Plain labels with bars between them: ──  ONE │ TWO
    Text,
}

impl ButtonBarStyle {
    pub fn from_str(style: &str) -> Self {
        match style.to_lowercase().as_str() {
            "text" => ButtonBarStyle::Text,
            _ => ButtonBarStyle::Boxed,
        }
    }

    fn decorate(&self, label: &str) -> String {
        match self {
            ButtonBarStyle::Boxed => format!("[ {} ]", label),
            ButtonBarStyle::Text => format!(" {} ", label),
        }
    }

    fn separator(&self) -> &'static str {
        match self {
            ButtonBarStyle::Boxed => "─",
            ButtonBarStyle::Text => "│",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonBarItem {
    /// Stable key used to name the button's hit area in the registry
    pub key: String,
    pub label: String,
    pub active: bool,
}

impl ButtonBarItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>, active: bool) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            active,
        }
    }
}

/// Bounding box for a button (for click detection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonBounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl From<ButtonBounds> for Rect {
    fn from(b: ButtonBounds) -> Self {
        Rect { x: b.x, y: b.y, width: b.width, height: b.height }
    }
}

/// Terminal cells `text` occupies; wide glyphs take two
fn cell_width(text: &str) -> u16 {
    Span::raw(text).width().min(u16::MAX as usize) as u16
}

enum Segment {
    Separator(&'static str),
    Button(usize, String),
}

pub struct ButtonBar {
    pub items: Vec<ButtonBarItem>,
    pub style: ButtonBarStyle,
    pub color: Color,
    pub inactive_color: Color,
}

impl ButtonBar {
    pub fn new(items: Vec<ButtonBarItem>, style: ButtonBarStyle) -> Self {
        Self {
            items,
            style,
            color: Color::Cyan,
            inactive_color: hex_color(0x777777),
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = parse_color(color);
        self
    }

    pub fn with_inactive_color(mut self, color: &str) -> Self {
        self.inactive_color = parse_color(color);
        self
    }

    fn segments(&self) -> Vec<Segment> {
        let mut segments = vec![Segment::Separator(LEADING)];
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                segments.push(Segment::Separator(self.style.separator()));
            }
            segments.push(Segment::Button(idx, self.style.decorate(&item.label)));
        }
        segments
    }

    /// Bounds of each button drawn into `area`, indexed like `items`
    /// Buttons that do not fit entirely are dropped from the end
    pub fn calculate_bounds(&self, area: Rect) -> Vec<Option<ButtonBounds>> {
        let mut bounds = vec![None; self.items.len()];
        if area.width == 0 || area.height == 0 {
            return bounds;
        }

        let right_edge = area.x as u32 + area.width as u32;
        let mut x = area.x as u32;
        for segment in self.segments() {
            let (text, idx) = match &segment {
                Segment::Separator(text) => (*text, None),
                Segment::Button(idx, text) => (text.as_str(), Some(*idx)),
            };
            let width = cell_width(text) as u32;
            if x + width > right_edge {
                break;
            }
            if let Some(idx) = idx {
                bounds[idx] = Some(ButtonBounds {
                    x: x as u16,
                    y: area.y,
                    width: width as u16,
                    height: 1,
                });
            }
            x += width;
        }
        bounds
    }

    pub fn build_line(&self, max_width: u16) -> Line<'static> {
        let frame_style = Style::default().fg(hex_color(0x444444));
        let mut spans = Vec::new();
        let mut used = 0u16;

        for segment in self.segments() {
            let (text, style) = match segment {
                Segment::Separator(text) => (text.to_string(), frame_style),
                Segment::Button(idx, text) => {
                    let style = if self.items[idx].active {
                        Style::default().fg(self.color).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(self.inactive_color)
                    };
                    (text, style)
                }
            };
            let width = cell_width(&text);
            if used.saturating_add(width) > max_width {
                break;
            }
            used += width;
            spans.push(Span::styled(text, style));
        }

        Line::from(spans)
    }

    /// Render the bar into the first row of `area` and register every visible
    /// button under `{prefix}{key}`
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        registry: &mut RectRegistry,
        prefix: &str,
    ) -> Vec<(String, RectHandle)> {
        let row = Rect { height: area.height.min(1), ..area };
        if row.width == 0 || row.height == 0 {
            return Vec::new();
        }

        f.render_widget(Paragraph::new(self.build_line(row.width)), row);

        self.calculate_bounds(row)
            .into_iter()
            .zip(self.items.iter())
            .filter_map(|(bounds, item)| {
                bounds.map(|b| {
                    let name = format!("{}{}", prefix, item.key);
                    let handle = registry.register(Some(&name), b.into());
                    (item.key.clone(), handle)
                })
            })
            .collect()
    }
}
