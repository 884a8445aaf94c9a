// Tab Switcher
// Shows one panel, hides the rest, and moves the active marker to the clicked button

use super::{ActivationEvent, Markers, MissingPanelPolicy, TabRegistry};
use crate::dom::{Document, ElementHandle, Visibility};
use crate::error::TabError;
use crate::Result;

/// Enforces the one-visible-panel / one-active-button rule over a registry
///
/// The switcher does not own the document. Every operation borrows it
/// mutably for the duration of the call and runs to completion.
#[derive(Debug, Clone)]
pub struct TabSwitcher {
    registry: TabRegistry,
    markers: Markers,
    policy: MissingPanelPolicy,
}

impl TabSwitcher {
    pub fn new(registry: TabRegistry) -> Self {
        Self {
            registry,
            markers: Markers::default(),
            policy: MissingPanelPolicy::default(),
        }
    }

    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    pub fn with_policy(mut self, policy: MissingPanelPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn policy(&self) -> MissingPanelPolicy {
        self.policy
    }

    /// Show `target_panel_id` and mark the event's source button active
    ///
    /// Every registered panel is hidden and every registered button loses the
    /// active marker before the target is shown. With
    /// `MissingPanelPolicy::Reject` an unknown target returns
    /// `PanelNotFound` before anything is touched; with `Legacy` the call
    /// still succeeds and leaves no panel visible.
    pub fn activate_tab(
        &self,
        document: &mut Document,
        event: &ActivationEvent,
        target_panel_id: &str,
    ) -> Result<()> {
        let source = event.current_target();
        tracing::info!(target_panel = %target_panel_id, source = %source, "activate_tab called");

        if !document.contains(source) {
            return Err(TabError::StaleHandle(source));
        }

        let target = self.resolve_panel(document, target_panel_id);
        if target.is_none() && self.policy == MissingPanelPolicy::Reject {
            return Err(TabError::PanelNotFound(target_panel_id.to_string()));
        }

        let (panels, buttons) = self.sweep(document);
        for panel in panels {
            document.set_visibility(panel, Visibility::Hidden);
        }
        for button in buttons {
            document.remove_class(button, &self.markers.active);
        }

        match target {
            Some(panel) => {
                document.set_visibility(panel, Visibility::Visible);
            }
            None => {
                tracing::warn!(
                    target_panel = %target_panel_id,
                    "No panel with this id; all panels are now hidden"
                );
            }
        }

        document.add_class(source, &self.markers.active);
        if !self.registry.is_button(source) {
            tracing::debug!(source = %source, "Event source is not a registered tab button");
        }

        Ok(())
    }

    /// Activate the panel the event's source button is bound to
    pub fn activate_button(&self, document: &mut Document, event: &ActivationEvent) -> Result<()> {
        let source = event.current_target();
        let target = self
            .registry
            .panel_for_button(source)
            .ok_or(TabError::UnregisteredButton(source))?
            .to_string();
        self.activate_tab(document, event, &target)
    }

    /// Click the page's default button, if it has one
    /// Returns whether a default button was found
    pub fn open_default(&self, document: &mut Document) -> Result<bool> {
        match self.registry.default_button() {
            Some(button) => {
                self.activate_button(document, &ActivationEvent::new(button))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Registered panels that are currently visible
    pub fn visible_panels(&self, document: &Document) -> Vec<ElementHandle> {
        self.registry
            .panels()
            .map(|(_, handle)| handle)
            .filter(|&h| document.element(h).map(|e| e.is_visible()).unwrap_or(false))
            .collect()
    }

    /// Id of the visible panel when exactly one is shown
    pub fn visible_panel_id(&self, document: &Document) -> Option<&str> {
        match self.visible_panels(document).as_slice() {
            [only] => self.registry.panel_id(*only),
            _ => None,
        }
    }

    /// Registered buttons currently carrying the active marker
    pub fn active_buttons(&self, document: &Document) -> Vec<ElementHandle> {
        self.registry
            .buttons()
            .iter()
            .copied()
            .filter(|&b| {
                document
                    .element(b)
                    .map(|e| e.has_class(&self.markers.active))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Panels to hide and buttons to clear on every activation
    /// Legacy mode also sweeps unregistered elements carrying the markers
    fn sweep(&self, document: &Document) -> (Vec<ElementHandle>, Vec<ElementHandle>) {
        let mut panels: Vec<ElementHandle> = self.registry.panels().map(|(_, h)| h).collect();
        let mut buttons = self.registry.buttons().to_vec();

        if self.policy == MissingPanelPolicy::Legacy {
            for handle in document.get_elements_by_class_name(&self.markers.panel) {
                if !panels.contains(&handle) {
                    panels.push(handle);
                }
            }
            for handle in document.get_elements_by_class_name(&self.markers.button) {
                if !buttons.contains(&handle) {
                    buttons.push(handle);
                }
            }
        }

        (panels, buttons)
    }

    fn resolve_panel(&self, document: &Document, id: &str) -> Option<ElementHandle> {
        let registered = self.registry.panel(id).filter(|&h| document.contains(h));
        match (registered, self.policy) {
            (Some(handle), _) => Some(handle),
            // Old pages could target any element by id, registered or not
            (None, MissingPanelPolicy::Legacy) => document.get_element_by_id(id),
            (None, MissingPanelPolicy::Reject) => None,
        }
    }
}
