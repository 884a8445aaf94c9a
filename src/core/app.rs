// Application State
// Owns the mounted page and routes clicks to the tab switcher

use anyhow::Result;
use std::path::{Path, PathBuf};
use tui_components::{ButtonBarItem, RectRegistry};

use super::{AppConfig, PageConfig};
use crate::constants::{DEFAULT_PAGE_FILE, HWND_BUTTON_PREFIX, PAGE_ENV_VAR};
use crate::dom::{Document, Element, ElementHandle};
use crate::error::TabError;
use crate::switcher::{ActivationEvent, TabSwitcher};

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration (built-in defaults)
    pub config: AppConfig,

    /// Page markup the document was built from
    pub page: PageConfig,

    /// Element tree of the page
    pub document: Document,

    /// Switcher bound to the page's registry
    pub switcher: TabSwitcher,

    /// Buttons in display order
    pub buttons: Vec<ElementHandle>,

    /// Error from the most recent click, if it failed
    pub last_error: Option<TabError>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Mount `page` into a fresh document and open its default tab
    pub fn new(config: AppConfig, page: PageConfig) -> Result<Self> {
        let mut document = Document::new();
        let mounted = page.mount(&mut document, &config.switcher.markers)?;

        let switcher = TabSwitcher::new(mounted.registry)
            .with_markers(config.switcher.markers.clone())
            .with_policy(config.switcher.missing_panel);

        switcher.open_default(&mut document)?;

        Ok(Self {
            config,
            page,
            document,
            switcher,
            buttons: mounted.buttons,
            last_error: None,
            should_quit: false,
        })
    }

    /// Load the page file at `path` and mount it
    pub fn from_page_file(config: AppConfig, path: &Path) -> Result<Self> {
        let page = PageConfig::load(path)?;
        Self::new(config, page)
    }

    /// Pick the page file: explicit argument, then the environment, then the bundled page
    pub fn resolve_page_path(arg: Option<String>) -> PathBuf {
        if let Some(path) = arg {
            return PathBuf::from(path);
        }

        if let Ok(path) = std::env::var(PAGE_ENV_VAR) {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }

        let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        default_path.push("src");
        default_path.push(DEFAULT_PAGE_FILE);
        default_path
    }

    /// Key a button's hit area is registered under
    pub fn button_key(handle: ElementHandle) -> String {
        handle.id().to_string()
    }

    fn button_for_key(&self, key: &str) -> Option<ElementHandle> {
        self.buttons
            .iter()
            .copied()
            .find(|&b| Self::button_key(b) == key)
    }

    /// Button items for the button bar, with the active flag read from the document
    pub fn button_items(&self) -> Vec<ButtonBarItem> {
        let active = &self.switcher.markers().active;
        self.buttons
            .iter()
            .filter_map(|&b| self.document.element(b))
            .map(|e| ButtonBarItem::new(Self::button_key(e.handle), e.label.clone(), e.has_class(active)))
            .collect()
    }

    /// The single visible panel, if exactly one is shown
    pub fn visible_panel(&self) -> Option<&Element> {
        match self.switcher.visible_panels(&self.document).as_slice() {
            [only] => self.document.element(*only),
            _ => None,
        }
    }

    /// Map a terminal cell to the button drawn there in the last frame
    pub fn button_at(&self, rects: &RectRegistry, column: u16, row: u16) -> Option<ElementHandle> {
        let hit = rects.hit_test_prefixed(column, row, HWND_BUTTON_PREFIX)?;
        let name = rects.get_name(hit)?;
        let key = name.strip_prefix(HWND_BUTTON_PREFIX)?;
        self.button_for_key(key)
    }

    /// Dispatch a click on `button`
    pub fn click_button(&mut self, button: ElementHandle) -> std::result::Result<(), TabError> {
        let event = ActivationEvent::new(button);
        let result = self.switcher.activate_button(&mut self.document, &event);

        match &result {
            Ok(()) => {
                tracing::debug!(
                    panel = self.switcher.visible_panel_id(&self.document).unwrap_or("none"),
                    "Tab switched"
                );
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Tab activation failed");
                self.last_error = Some(e.clone());
            }
        }

        result
    }

    /// Handle a click at a terminal cell
    /// Returns `None` when the click missed every button
    pub fn handle_click(
        &mut self,
        rects: &RectRegistry,
        column: u16,
        row: u16,
    ) -> Option<std::result::Result<(), TabError>> {
        let button = self.button_at(rects, column, row)?;
        Some(self.click_button(button))
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
