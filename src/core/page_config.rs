// Page Configuration
// Page markup: which panels exist and which button opens which panel

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tui_components::try_parse_color;

use crate::dom::{Document, ElementHandle, Visibility};
use crate::switcher::{Markers, TabRegistry};

/// A whole page of tabs
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Title shown above the button bar
    #[serde(default = "default_title")]
    pub title: String,

    /// How the button bar is drawn
    #[serde(default)]
    pub button_bar: ButtonBarSettings,

    /// Content panels, in display order
    #[serde(default)]
    pub panels: Vec<PanelConfig>,

    /// Buttons, in display order
    #[serde(default)]
    pub buttons: Vec<ButtonConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ButtonBarSettings {
    /// "boxed" or "text"
    #[serde(default = "default_bar_style")]
    pub style: String,

    /// Overrides the compiled active color
    pub color: Option<String>,
}

/// A content panel
#[derive(Debug, Clone, Deserialize)]
pub struct PanelConfig {
    /// Unique identifier buttons target
    pub id: String,

    /// Heading; defaults to the id
    pub title: Option<String>,

    #[serde(default)]
    pub body: String,

    /// Extra classes besides the panel marker
    #[serde(default)]
    pub classes: Vec<String>,
}

/// A button that opens one panel
#[derive(Debug, Clone, Deserialize)]
pub struct ButtonConfig {
    /// Optional element id
    pub id: Option<String>,

    pub label: String,

    /// Id of the panel this button opens
    pub target: String,

    /// Extra classes besides the button marker
    #[serde(default)]
    pub classes: Vec<String>,

    /// Click this button when the page opens
    #[serde(default)]
    pub default_open: bool,
}

/// A mounted page: the registry plus the button handles in display order
#[derive(Debug, Clone)]
pub struct MountedPage {
    pub registry: TabRegistry,
    pub buttons: Vec<ElementHandle>,
}

fn default_title() -> String {
    "Tabs".to_string()
}

fn default_bar_style() -> String {
    "boxed".to_string()
}

impl Default for ButtonBarSettings {
    fn default() -> Self {
        Self {
            style: default_bar_style(),
            color: None,
        }
    }
}

impl PageConfig {
    /// Load page markup from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page file: {}", path.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Invalid page file: {}", path.display()))
    }

    /// Parse and validate page markup
    pub fn from_yaml(content: &str) -> Result<Self> {
        let page: PageConfig =
            serde_yaml::from_str(content).context("Failed to parse page YAML")?;
        page.validate()?;
        Ok(page)
    }

    /// Check the markup for problems that would break the one-visible-panel rule
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for panel in &self.panels {
            if panel.id.trim().is_empty() {
                bail!("Panel with empty id");
            }
            if !ids.insert(panel.id.as_str()) {
                bail!("Duplicate panel id '{}'", panel.id);
            }
        }

        for button in &self.buttons {
            if let Some(id) = &button.id {
                if !ids.insert(id.as_str()) {
                    bail!("Button id '{}' clashes with another element", id);
                }
            }
        }

        let defaults = self.buttons.iter().filter(|b| b.default_open).count();
        if defaults > 1 {
            bail!("{} buttons are marked default_open; at most one is allowed", defaults);
        }

        match self.button_bar.style.to_lowercase().as_str() {
            "boxed" | "text" => {}
            other => bail!("Unknown button bar style '{}'", other),
        }

        if let Some(color) = &self.button_bar.color {
            try_parse_color(color).context("Invalid button bar color")?;
        }

        Ok(())
    }

    /// Create the page's elements in `document` and register them
    ///
    /// Panels start hidden. A button whose target is not a panel on this page
    /// fails here, before the page is ever shown.
    pub fn mount(&self, document: &mut Document, markers: &Markers) -> Result<MountedPage> {
        let mut registry = TabRegistry::new();
        let mut buttons = Vec::with_capacity(self.buttons.len());

        for panel in &self.panels {
            let classes = class_attr(&markers.panel, &panel.classes);
            let handle = document.create_element(Some(&panel.id), &classes)?;
            if let Some(element) = document.element_mut(handle) {
                element.label = panel.title.clone().unwrap_or_else(|| panel.id.clone());
                element.body = panel.body.clone();
            }
            document.set_visibility(handle, Visibility::Hidden);
            registry.register_panel(&panel.id, handle)?;
        }

        for button in &self.buttons {
            let classes = class_attr(&markers.button, &button.classes);
            let handle = document.create_element(button.id.as_deref(), &classes)?;
            if let Some(element) = document.element_mut(handle) {
                element.label = button.label.clone();
            }
            registry
                .register_button(handle, &button.target)
                .with_context(|| format!("Button '{}' targets an unknown panel", button.label))?;
            if button.default_open {
                registry.set_default_button(handle)?;
            }
            buttons.push(handle);
        }

        tracing::info!(
            title = %self.title,
            panels = self.panels.len(),
            buttons = buttons.len(),
            "Mounted page"
        );

        Ok(MountedPage { registry, buttons })
    }
}

fn class_attr(marker: &str, extra: &[String]) -> String {
    std::iter::once(marker)
        .chain(extra.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
