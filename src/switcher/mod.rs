// Tab switching
// Keeps exactly one panel visible and exactly one button marked active

pub mod event;
pub mod registry;
pub mod tab_switcher;

pub use event::ActivationEvent;
pub use registry::TabRegistry;
pub use tab_switcher::TabSwitcher;

/// Class tokens that tag panels, buttons and the active button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Shared class of every tab content panel
    pub panel: String,
    /// Shared class of every tab button
    pub button: String,
    /// Class carried by the button of the visible panel
    pub active: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            panel: "tabcontent".to_string(),
            button: "tablinks".to_string(),
            active: "active".to_string(),
        }
    }
}

/// What to do when asked to show a panel id nobody registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPanelPolicy {
    /// Report `PanelNotFound` and leave the document untouched
    #[default]
    Reject,
    /// Hide everything, mark the button active and carry on
    /// Matches pages written against the old behavior, where a typo in a
    /// button's target blanked the content area without any error
    Legacy,
}

impl MissingPanelPolicy {
    pub fn from_str(policy: &str) -> Self {
        match policy.to_lowercase().as_str() {
            "legacy" | "silent" => MissingPanelPolicy::Legacy,
            _ => MissingPanelPolicy::Reject,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MissingPanelPolicy::Reject => "reject",
            MissingPanelPolicy::Legacy => "legacy",
        }
    }
}
