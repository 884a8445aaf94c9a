// Activation events
// What a click hands to the switcher

use crate::dom::ElementHandle;

/// An interaction that asks for a tab to be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationEvent {
    current_target: ElementHandle,
}

impl ActivationEvent {
    /// Event dispatched by the element behind `current_target`
    pub fn new(current_target: ElementHandle) -> Self {
        Self { current_target }
    }

    /// The button element that dispatched the event
    pub fn current_target(&self) -> ElementHandle {
        self.current_target
    }
}

impl From<ElementHandle> for ActivationEvent {
    fn from(handle: ElementHandle) -> Self {
        Self::new(handle)
    }
}
