// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Fall back to hardcoded defaults if config.yaml doesn't exist
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const PANEL_MARKER: &str = "{panel_marker}";
pub const BUTTON_MARKER: &str = "{button_marker}";
pub const ACTIVE_MARKER: &str = "{active_marker}";
pub const MISSING_PANEL: &str = "{missing_panel}";

pub const MOUSE_ENABLED: bool = {mouse_enabled};
pub const ACTIVE_COLOR: &str = "{active_color}";
pub const INACTIVE_COLOR: &str = "{inactive_color}";
pub const TOAST_SECONDS: u64 = {toast_seconds};

pub const LOG_FILTER: &str = "{log_filter}";
pub const LOG_FILE: &str = "{log_file}";
"#,
        panel_marker = config.panel_marker,
        button_marker = config.button_marker,
        active_marker = config.active_marker,
        missing_panel = config.missing_panel,
        mouse_enabled = config.mouse_enabled,
        active_color = config.active_color,
        inactive_color = config.inactive_color,
        toast_seconds = config.toast_seconds,
        log_filter = config.log_filter,
        log_file = config.log_file,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    panel_marker: String,
    button_marker: String,
    active_marker: String,
    missing_panel: String,
    mouse_enabled: bool,
    active_color: String,
    inactive_color: String,
    toast_seconds: u64,
    log_filter: String,
    log_file: String,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            panel_marker: "tabcontent".to_string(),
            button_marker: "tablinks".to_string(),
            active_marker: "active".to_string(),
            missing_panel: "reject".to_string(),
            mouse_enabled: true,
            active_color: "cyan".to_string(),
            inactive_color: "#777777".to_string(),
            toast_seconds: 3,
            log_filter: "info".to_string(),
            log_file: "tab-switcher.log".to_string(),
        }
    }
}

#[derive(PartialEq)]
enum Section {
    None,
    Switcher,
    Ui,
    Logging,
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut section = Section::None;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Top-level keys start a new section
        if !line.starts_with(' ') && !line.starts_with('\t') {
            section = match trimmed.trim_end_matches(':') {
                "switcher" => Section::Switcher,
                "ui" => Section::Ui,
                "logging" => Section::Logging,
                _ => Section::None,
            };
            continue;
        }

        let Some((key, value)) = parse_kv(trimmed) else {
            continue;
        };

        match section {
            Section::Switcher => match key {
                "panel_marker" => config.panel_marker = value.to_string(),
                "button_marker" => config.button_marker = value.to_string(),
                "active_marker" => config.active_marker = value.to_string(),
                "missing_panel" => config.missing_panel = value.to_string(),
                _ => {}
            },
            Section::Ui => match key {
                "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                "active_color" => config.active_color = value.to_string(),
                "inactive_color" => config.inactive_color = value.to_string(),
                "toast_seconds" => config.toast_seconds = value.parse().unwrap_or(3),
                _ => {}
            },
            Section::Logging => match key {
                "filter" => config.log_filter = value.to_string(),
                "file" => config.log_file = value.to_string(),
                _ => {}
            },
            Section::None => {}
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    // Strip trailing comments and quotes
    let value = value.split(" #").next().unwrap_or("").trim();
    let value = value.trim_matches('"').trim_matches('\'');
    Some((key.trim(), value))
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "yes" | "on" | "1")
}
