// Document model
// The element tree that panels and buttons live in

pub mod document;
pub mod element;

pub use document::Document;
pub use element::{ClassList, Element, ElementHandle, Visibility};
