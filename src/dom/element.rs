// Document Elements
// Handles, visibility and class lists for the elements a page is built from

use std::fmt;

/// Opaque handle to an element in a `Document`
/// Handles are never reused within one document, so a removed element's handle stays dead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementHandle(pub(crate) u64);

impl ElementHandle {
    /// Get the internal ID of this handle
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether an element is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// Ordered set of class tokens
///
/// Tokens are compared whole, so removing `active` never touches `inactive`
/// or `active-tab`. Insertion order of the remaining tokens is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace separated class attribute
    pub fn parse(attr: &str) -> Self {
        let mut list = Self::new();
        for token in attr.split_whitespace() {
            list.add(token);
        }
        list
    }

    /// Add a token; returns false if it was already present
    pub fn add(&mut self, token: &str) -> bool {
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Remove a token; returns false if it was absent
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Render back to attribute form
    pub fn to_attr(&self) -> String {
        self.tokens.join(" ")
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for token in iter {
            list.add(token);
        }
        list
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_attr())
    }
}

/// A node in the document
#[derive(Debug, Clone)]
pub struct Element {
    pub handle: ElementHandle,
    /// Unique identifier, if the markup gave one
    pub id: Option<String>,
    pub class_list: ClassList,
    pub visibility: Visibility,
    /// Text shown for the element (button label, panel title)
    pub label: String,
    /// Panel content
    pub body: String,
}

impl Element {
    pub fn has_class(&self, token: &str) -> bool {
        self.class_list.contains(token)
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collapses_whitespace_and_duplicates() {
        let list = ClassList::parse("  tablinks  highlight tablinks\tactive ");
        assert_eq!(list.to_attr(), "tablinks highlight active");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut list = ClassList::parse("tablinks");
        assert!(list.add("active"));
        assert!(!list.add("active"));
        assert_eq!(list.to_attr(), "tablinks active");
    }

    #[test]
    fn test_remove_matches_whole_tokens_only() {
        let mut list = ClassList::parse("tablinks inactive active-tab active highlight");
        assert!(list.remove("active"));
        assert_eq!(list.to_attr(), "tablinks inactive active-tab highlight");
        assert!(!list.remove("active"));
    }

    #[test]
    fn test_from_iter() {
        let list: ClassList = ["tabcontent", "wide", ""].into_iter().collect();
        assert_eq!(list.to_attr(), "tabcontent wide");
    }

    #[test]
    fn test_visibility_default() {
        assert_eq!(Visibility::default(), Visibility::Visible);
        assert!(!Visibility::Hidden.is_visible());
    }
}
