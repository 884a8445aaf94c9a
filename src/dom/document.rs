// Document
// In-memory element tree standing in for the host page

use std::collections::{BTreeMap, HashMap};

use super::element::{ClassList, Element, ElementHandle, Visibility};
use crate::error::TabError;
use crate::Result;

/// The host element tree
///
/// Elements are kept in creation order, which is the order class-name
/// queries return them in.
#[derive(Debug, Clone)]
pub struct Document {
    elements: BTreeMap<u64, Element>,
    id_index: HashMap<String, ElementHandle>,
    next_id: u64,
}

impl Document {
    pub fn new() -> Self {
        Self {
            elements: BTreeMap::new(),
            id_index: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create an element and return its handle
    /// Identifiers must be unique across the document
    pub fn create_element(&mut self, id: Option<&str>, class_attr: &str) -> Result<ElementHandle> {
        if let Some(id) = id {
            if self.id_index.contains_key(id) {
                return Err(TabError::DuplicateElementId(id.to_string()));
            }
        }

        let handle = ElementHandle(self.next_id);
        self.next_id += 1;

        let element = Element {
            handle,
            id: id.map(str::to_string),
            class_list: ClassList::parse(class_attr),
            visibility: Visibility::default(),
            label: String::new(),
            body: String::new(),
        };

        if let Some(id) = id {
            self.id_index.insert(id.to_string(), handle);
        }
        self.elements.insert(handle.0, element);

        Ok(handle)
    }

    /// Remove an element; its handle is never reissued
    pub fn remove_element(&mut self, handle: ElementHandle) -> Option<Element> {
        let element = self.elements.remove(&handle.0)?;
        if let Some(id) = &element.id {
            self.id_index.remove(id);
        }
        Some(element)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.id_index.get(id).copied()
    }

    /// All elements carrying `class_name`, in document order
    pub fn get_elements_by_class_name(&self, class_name: &str) -> Vec<ElementHandle> {
        self.elements
            .values()
            .filter(|e| e.has_class(class_name))
            .map(|e| e.handle)
            .collect()
    }

    pub fn element(&self, handle: ElementHandle) -> Option<&Element> {
        self.elements.get(&handle.0)
    }

    pub fn element_mut(&mut self, handle: ElementHandle) -> Option<&mut Element> {
        self.elements.get_mut(&handle.0)
    }

    pub fn contains(&self, handle: ElementHandle) -> bool {
        self.elements.contains_key(&handle.0)
    }

    pub fn set_visibility(&mut self, handle: ElementHandle, visibility: Visibility) -> bool {
        match self.elements.get_mut(&handle.0) {
            Some(element) => {
                element.visibility = visibility;
                true
            }
            None => false,
        }
    }

    pub fn add_class(&mut self, handle: ElementHandle, token: &str) -> bool {
        self.elements
            .get_mut(&handle.0)
            .map(|e| e.class_list.add(token))
            .unwrap_or(false)
    }

    pub fn remove_class(&mut self, handle: ElementHandle, token: &str) -> bool {
        self.elements
            .get_mut(&handle.0)
            .map(|e| e.class_list.remove(token))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id_and_class() {
        let mut doc = Document::new();
        let a = doc.create_element(Some("A"), "tabcontent").unwrap();
        let button = doc.create_element(None, "tablinks").unwrap();
        let b = doc.create_element(Some("B"), "tabcontent wide").unwrap();

        assert_eq!(doc.get_element_by_id("A"), Some(a));
        assert_eq!(doc.get_element_by_id("C"), None);
        assert_eq!(doc.get_elements_by_class_name("tabcontent"), vec![a, b]);
        assert_eq!(doc.get_elements_by_class_name("tablinks"), vec![button]);
        assert!(doc.get_elements_by_class_name("missing").is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut doc = Document::new();
        doc.create_element(Some("A"), "tabcontent").unwrap();

        let err = doc.create_element(Some("A"), "tabcontent").unwrap_err();
        assert!(matches!(err, TabError::DuplicateElementId(id) if id == "A"));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_removed_handle_is_dead() {
        let mut doc = Document::new();
        let a = doc.create_element(Some("A"), "tabcontent").unwrap();

        let removed = doc.remove_element(a).unwrap();
        assert_eq!(removed.id.as_deref(), Some("A"));
        assert!(!doc.contains(a));
        assert!(!doc.set_visibility(a, Visibility::Hidden));
        assert_eq!(doc.get_element_by_id("A"), None);

        let again = doc.create_element(Some("A"), "tabcontent").unwrap();
        assert_ne!(a, again);
    }

    #[test]
    fn test_class_mutation() {
        let mut doc = Document::new();
        let button = doc.create_element(None, "tablinks").unwrap();

        assert!(doc.add_class(button, "active"));
        assert!(!doc.add_class(button, "active"));
        assert_eq!(doc.element(button).unwrap().class_list.to_attr(), "tablinks active");
        assert!(doc.remove_class(button, "active"));
        assert_eq!(doc.element(button).unwrap().class_list.to_attr(), "tablinks");
    }
}
