//! In-memory page state.

use std::collections::{BTreeSet, HashMap};

use crate::page::{Element, Page};

#[derive(Debug, Clone, Default)]
struct ElementState {
    text: String,
    classes: BTreeSet<String>,
    children: Vec<String>,
}

/// A [`Page`] kept in memory and serialized on demand.
#[derive(Debug, Clone, Default)]
pub struct PageModel {
    elements: HashMap<Element, ElementState>,
}

impl PageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text content; empty if never set.
    pub fn text(&self, element: Element) -> &str {
        self.elements.get(&element).map(|e| e.text.as_str()).unwrap_or("")
    }

    /// Appended HTML fragments, oldest first.
    pub fn children(&self, element: Element) -> &[String] {
        self.elements
            .get(&element)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    /// Space-separated class list, sorted.
    pub fn class_attr(&self, element: Element) -> String {
        self.elements
            .get(&element)
            .map(|e| e.classes.iter().map(String::as_str).collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    }

    fn entry(&mut self, element: Element) -> &mut ElementState {
        self.elements.entry(element).or_default()
    }
}

impl Page for PageModel {
    fn set_text(&mut self, element: Element, text: &str) {
        self.entry(element).text = text.to_string();
    }

    fn add_class(&mut self, element: Element, class: &str) {
        self.entry(element).classes.insert(class.to_string());
    }

    fn remove_class(&mut self, element: Element, class: &str) {
        if let Some(state) = self.elements.get_mut(&element) {
            state.classes.remove(class);
        }
    }

    fn has_class(&self, element: Element, class: &str) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|e| e.classes.contains(class))
    }

    fn append_html(&mut self, element: Element, html: String) {
        self.entry(element).children.push(html);
    }

    fn clear(&mut self, element: Element) {
        if let Some(state) = self.elements.get_mut(&element) {
            state.children.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_elements_are_empty() {
        let page = PageModel::new();
        assert_eq!(page.text(Element::AmenitiesHeading), "");
        assert!(page.children(Element::Places).is_empty());
        assert!(!page.has_class(Element::ApiStatus, "available"));
    }

    #[test]
    fn test_classes() {
        let mut page = PageModel::new();
        page.add_class(Element::ApiStatus, "available");
        page.add_class(Element::ApiStatus, "available");
        page.add_class(Element::ApiStatus, "large");
        assert_eq!(page.class_attr(Element::ApiStatus), "available large");

        page.remove_class(Element::ApiStatus, "available");
        assert!(!page.has_class(Element::ApiStatus, "available"));
        page.remove_class(Element::Places, "missing");
    }

    #[test]
    fn test_append_and_clear() {
        let mut page = PageModel::new();
        page.append_html(Element::Places, "<article>1</article>".into());
        page.append_html(Element::Places, "<article>2</article>".into());
        assert_eq!(page.children(Element::Places).len(), 2);
        assert_eq!(page.children(Element::Places)[1], "<article>2</article>");

        page.clear(Element::Places);
        assert!(page.children(Element::Places).is_empty());
    }
}
