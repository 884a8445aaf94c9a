// Tab switching error types

use thiserror::Error;

use crate::dom::ElementHandle;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Panel not found: {0}")]
    PanelNotFound(String),

    #[error("Element {0} is not part of the document")]
    StaleHandle(ElementHandle),

    #[error("Element {0} is not a registered tab button")]
    UnregisteredButton(ElementHandle),

    #[error("Panel '{0}' is already registered")]
    DuplicatePanel(String),

    #[error("Element id '{0}' is already in use")]
    DuplicateElementId(String),
}
