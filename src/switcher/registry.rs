// Tab Registry
// Explicit mapping of panel ids to panel elements and of buttons to the panel they open

use std::collections::HashMap;

use super::Markers;
use crate::dom::{Document, ElementHandle};
use crate::error::TabError;
use crate::Result;

#[derive(Debug, Clone)]
struct PanelEntry {
    id: String,
    handle: ElementHandle,
}

/// Registry of the panels and buttons one switcher is responsible for
#[derive(Debug, Clone, Default)]
pub struct TabRegistry {
    /// Panels in registration order
    panels: Vec<PanelEntry>,
    /// Panel id -> index into `panels`
    panel_index: HashMap<String, usize>,
    /// Buttons in registration order
    buttons: Vec<ElementHandle>,
    /// Button -> id of the panel it opens
    bindings: HashMap<ElementHandle, String>,
    /// Button clicked when the page first opens
    default_button: Option<ElementHandle>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry by scanning `document` for the panel and button markers
    ///
    /// Panels without an id cannot be targeted and are skipped. Buttons found
    /// this way carry no binding; use `register_button` to attach one.
    pub fn scan(document: &Document, markers: &Markers) -> Self {
        let mut registry = Self::new();

        for handle in document.get_elements_by_class_name(&markers.panel) {
            let id = document.element(handle).and_then(|e| e.id.clone());
            match id {
                Some(id) => {
                    if let Err(e) = registry.register_panel(&id, handle) {
                        tracing::warn!(error = %e, "Skipping panel during scan");
                    }
                }
                None => {
                    tracing::warn!(element = %handle, marker = %markers.panel, "Skipping panel without an id");
                }
            }
        }

        for handle in document.get_elements_by_class_name(&markers.button) {
            registry.add_button(handle);
        }

        tracing::debug!(
            panels = registry.panels.len(),
            buttons = registry.buttons.len(),
            "Scanned document for tabs"
        );

        registry
    }

    /// Register a panel under `id`
    pub fn register_panel(&mut self, id: &str, handle: ElementHandle) -> Result<()> {
        if self.panel_index.contains_key(id) {
            return Err(TabError::DuplicatePanel(id.to_string()));
        }
        self.panel_index.insert(id.to_string(), self.panels.len());
        self.panels.push(PanelEntry {
            id: id.to_string(),
            handle,
        });
        Ok(())
    }

    /// Register a button that opens `panel_id`
    /// Fails if no such panel has been registered yet
    pub fn register_button(&mut self, handle: ElementHandle, panel_id: &str) -> Result<()> {
        if !self.panel_index.contains_key(panel_id) {
            return Err(TabError::PanelNotFound(panel_id.to_string()));
        }
        self.add_button(handle);
        self.bindings.insert(handle, panel_id.to_string());
        Ok(())
    }

    /// Track a button for active-marker clearing without binding it to a panel
    pub fn add_button(&mut self, handle: ElementHandle) {
        if !self.buttons.contains(&handle) {
            self.buttons.push(handle);
        }
    }

    /// Mark a bound button as the one opened on page load
    pub fn set_default_button(&mut self, handle: ElementHandle) -> Result<()> {
        if !self.bindings.contains_key(&handle) {
            return Err(TabError::UnregisteredButton(handle));
        }
        self.default_button = Some(handle);
        Ok(())
    }

    pub fn default_button(&self) -> Option<ElementHandle> {
        self.default_button
    }

    pub fn panel(&self, id: &str) -> Option<ElementHandle> {
        self.panel_index.get(id).map(|&idx| self.panels[idx].handle)
    }

    pub fn panel_for_button(&self, handle: ElementHandle) -> Option<&str> {
        self.bindings.get(&handle).map(String::as_str)
    }

    /// Id of the panel registered with `handle`
    pub fn panel_id(&self, handle: ElementHandle) -> Option<&str> {
        self.panels
            .iter()
            .find(|p| p.handle == handle)
            .map(|p| p.id.as_str())
    }

    pub fn is_button(&self, handle: ElementHandle) -> bool {
        self.buttons.contains(&handle)
    }

    pub fn panels(&self) -> impl Iterator<Item = (&str, ElementHandle)> {
        self.panels.iter().map(|p| (p.id.as_str(), p.handle))
    }

    pub fn buttons(&self) -> &[ElementHandle] {
        &self.buttons
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> (Document, Vec<ElementHandle>, Vec<ElementHandle>) {
        let mut doc = Document::new();
        let panels = ["A", "B", "C"]
            .iter()
            .map(|id| doc.create_element(Some(*id), "tabcontent").unwrap())
            .collect();
        let buttons = (0..3)
            .map(|_| doc.create_element(None, "tablinks").unwrap())
            .collect();
        (doc, panels, buttons)
    }

    #[test]
    fn test_scan_finds_panels_and_buttons() {
        let (doc, panels, buttons) = page();
        let registry = TabRegistry::scan(&doc, &Markers::default());

        assert_eq!(registry.panel("B"), Some(panels[1]));
        assert_eq!(registry.panels().count(), 3);
        assert_eq!(registry.buttons(), buttons.as_slice());
        assert_eq!(registry.panel_for_button(buttons[0]), None);
    }

    #[test]
    fn test_scan_skips_panels_without_id() {
        let mut doc = Document::new();
        doc.create_element(None, "tabcontent").unwrap();
        let a = doc.create_element(Some("A"), "tabcontent").unwrap();

        let registry = TabRegistry::scan(&doc, &Markers::default());
        assert_eq!(registry.panels().collect::<Vec<_>>(), vec![("A", a)]);
    }

    #[test]
    fn test_register_button_requires_known_panel() {
        let (_doc, panels, buttons) = page();
        let mut registry = TabRegistry::new();
        registry.register_panel("A", panels[0]).unwrap();

        assert!(registry.register_button(buttons[0], "A").is_ok());
        let err = registry.register_button(buttons[1], "nonexistent").unwrap_err();
        assert_eq!(err, TabError::PanelNotFound("nonexistent".to_string()));
        assert!(!registry.is_button(buttons[1]));
        assert_eq!(registry.panel_for_button(buttons[0]), Some("A"));
    }

    #[test]
    fn test_duplicate_panel_rejected() {
        let (_doc, panels, _) = page();
        let mut registry = TabRegistry::new();
        registry.register_panel("A", panels[0]).unwrap();

        let err = registry.register_panel("A", panels[1]).unwrap_err();
        assert_eq!(err, TabError::DuplicatePanel("A".to_string()));
    }

    #[test]
    fn test_default_button_must_be_bound() {
        let (_doc, panels, buttons) = page();
        let mut registry = TabRegistry::new();
        registry.register_panel("A", panels[0]).unwrap();
        registry.add_button(buttons[1]);

        assert_eq!(
            registry.set_default_button(buttons[1]),
            Err(TabError::UnregisteredButton(buttons[1]))
        );
        registry.register_button(buttons[0], "A").unwrap();
        registry.set_default_button(buttons[0]).unwrap();
        assert_eq!(registry.default_button(), Some(buttons[0]));
    }
}
