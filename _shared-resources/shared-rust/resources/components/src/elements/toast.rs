// Toast notification component
// Short-lived one-line messages stacked in the bottom-left corner
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Clear, Paragraph},
    Frame,
};
use std::time::{Duration, SystemTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Error,
    Info,
}

impl ToastType {
    fn icon_and_color(&self) -> (&'static str, Color) {
        match self {
            ToastType::Error => ("✗", Color::Red),
            ToastType::Info => ("ℹ", Color::Cyan),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    pub shown_at: SystemTime,
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            message,
            toast_type,
            shown_at: SystemTime::now(),
        }
    }

    pub fn error(message: String) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn info(message: String) -> Self {
        Self::new(message, ToastType::Info)
    }

    /// Whether the toast has been on screen longer than `ttl`
    pub fn is_expired(&self, ttl: Duration, now: SystemTime) -> bool {
        now.duration_since(self.shown_at)
            .map(|elapsed| elapsed >= ttl)
            .unwrap_or(false)
    }
}

/// Drop every toast older than `ttl`
pub fn prune_toasts(toasts: &mut Vec<Toast>, ttl: Duration) {
    let now = SystemTime::now();
    toasts.retain(|t| !t.is_expired(ttl, now));
}

/// Render toasts in bottom-left corner, newest at the bottom, inset by 1
pub fn render_toasts(f: &mut Frame, area: Rect, toasts: &[Toast]) {
    use crate::utilities::hex_color;

    let max_width = area.width.saturating_sub(2) as usize;
    let mut y_offset = 0u16;

    for toast in toasts.iter().rev() {
        if y_offset + 2 > area.height {
            break;
        }
        let (icon, fg) = toast.toast_type.icon_and_color();
        let text: String = format!(" {} {} ", icon, toast.message)
            .chars()
            .take(max_width)
            .collect();
        let width = text.chars().count() as u16;

        let toast_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(2 + y_offset),
            width,
            height: 1,
        };

        f.render_widget(Clear, toast_area);
        f.render_widget(
            Paragraph::new(text).style(
                Style::default()
                    .fg(fg)
                    .bg(hex_color(0x0A0A0A))
                    .add_modifier(Modifier::BOLD),
            ),
            toast_area,
        );

        y_offset += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::error("Panel not found".to_string());
        let later = toast.shown_at + Duration::from_secs(5);

        assert!(!toast.is_expired(Duration::from_secs(3), toast.shown_at));
        assert!(toast.is_expired(Duration::from_secs(3), later));
    }

    #[test]
    fn test_prune_keeps_fresh_toasts() {
        let mut toasts = vec![Toast::info("fresh".to_string())];
        let mut stale = Toast::info("stale".to_string());
        stale.shown_at = SystemTime::now() - Duration::from_secs(60);
        toasts.insert(0, stale);

        prune_toasts(&mut toasts, Duration::from_secs(3));

        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "fresh");
    }
}
