// Tab Switcher Library
// Mutually exclusive tab panels: one panel shown, one button active

// Core infrastructure - application state, config and events
pub mod core;

// Document model - the element tree panels and buttons live in
pub mod dom;

// Tab switching - registry and switcher
pub mod switcher;

// Rendering of a mounted page
pub mod render;

// Error types
pub mod error;

// Log setup
pub mod logging;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use crate::core::{App, AppConfig, PageConfig};
pub use dom::{ClassList, Document, ElementHandle, Visibility};
pub use error::TabError;
pub use switcher::{ActivationEvent, Markers, MissingPanelPolicy, TabRegistry, TabSwitcher};

pub type Result<T> = std::result::Result<T, TabError>;
