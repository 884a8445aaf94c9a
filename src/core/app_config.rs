// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use std::path::PathBuf;
use std::time::Duration;

use crate::switcher::{Markers, MissingPanelPolicy};

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Application-level configuration for tab-switcher
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// How panels and buttons are recognised and switched
    pub switcher: SwitcherSettings,

    /// UI and display settings
    pub ui: UiSettings,

    /// Log output settings
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct SwitcherSettings {
    pub markers: Markers,
    pub missing_panel: MissingPanelPolicy,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Enable mouse capture (clicks are the only way to switch tabs)
    pub mouse_enabled: bool,

    /// Color of the active button
    pub active_color: String,

    /// Color of every other button
    pub inactive_color: String,

    /// How long error and info toasts stay on screen
    pub toast_duration: Duration,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Filter used when RUST_LOG is not set
    pub filter: String,

    /// File the log is written to; the terminal belongs to the UI
    pub file: PathBuf,
}

impl Default for SwitcherSettings {
    fn default() -> Self {
        Self {
            markers: Markers {
                panel: compiled::PANEL_MARKER.to_string(),
                button: compiled::BUTTON_MARKER.to_string(),
                active: compiled::ACTIVE_MARKER.to_string(),
            },
            missing_panel: MissingPanelPolicy::from_str(compiled::MISSING_PANEL),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mouse_enabled: compiled::MOUSE_ENABLED,
            active_color: compiled::ACTIVE_COLOR.to_string(),
            inactive_color: compiled::INACTIVE_COLOR.to_string(),
            toast_duration: Duration::from_secs(compiled::TOAST_SECONDS),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: compiled::LOG_FILTER.to_string(),
            file: PathBuf::from(compiled::LOG_FILE),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            switcher: SwitcherSettings::default(),
            ui: UiSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}
