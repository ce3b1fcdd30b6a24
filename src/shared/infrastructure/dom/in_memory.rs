// In memory implementation of the Document port.
//
// Purpose
// - Run the bootstrap and the favicon presenter without a browser.
//
// Responsibilities
// - Keep elements by id with an optional icon href.
// - Count href writes so tests can tell a no-op from a rewrite to the same value.

use crate::shared::infrastructure::dom::Document;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryNode {
    pub id: String,
}

#[derive(Debug, Default)]
pub struct InMemoryDocument {
    elements: RefCell<HashMap<String, Option<String>>>,
    href_writes: Cell<usize>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(self, id: impl Into<String>) -> Self {
        self.elements.borrow_mut().insert(id.into(), None);
        self
    }

    pub fn with_icon(self, id: impl Into<String>, href: impl Into<String>) -> Self {
        self.elements.borrow_mut().insert(id.into(), Some(href.into()));
        self
    }

    pub fn href_writes(&self) -> usize {
        self.href_writes.get()
    }
}

impl Document for InMemoryDocument {
    type Node = InMemoryNode;

    fn element_by_id(&self, id: &str) -> Option<InMemoryNode> {
        self.elements.borrow().contains_key(id).then(|| InMemoryNode { id: id.to_string() })
    }

    fn icon_href(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).map(|href| href.clone().unwrap_or_default())
    }

    fn set_icon_href(&self, id: &str, href: &str) {
        if let Some(slot) = self.elements.borrow_mut().get_mut(id) {
            *slot = Some(href.to_string());
            self.href_writes.set(self.href_writes.get() + 1);
        }
    }
}

#[cfg(test)]
mod in_memory_document_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_find_registered_elements() {
        let document = InMemoryDocument::new().with_element("root");
        assert_eq!(document.element_by_id("root"), Some(InMemoryNode { id: "root".to_string() }));
        assert_eq!(document.element_by_id("missing"), None);
    }

    #[rstest]
    fn it_should_read_and_write_the_icon_href() {
        let document = InMemoryDocument::new().with_icon("favicon", "/favicon-stop.ico");
        assert_eq!(document.icon_href("favicon").as_deref(), Some("/favicon-stop.ico"));
        document.set_icon_href("favicon", "/favicon-run.ico");
        assert_eq!(document.icon_href("favicon").as_deref(), Some("/favicon-run.ico"));
        assert_eq!(document.href_writes(), 1);
    }

    #[rstest]
    fn it_should_ignore_writes_to_missing_elements() {
        let document = InMemoryDocument::new();
        document.set_icon_href("favicon", "/favicon-run.ico");
        assert_eq!(document.icon_href("favicon"), None);
        assert_eq!(document.href_writes(), 0);
    }

    #[rstest]
    fn it_should_report_an_empty_href_for_elements_without_one() {
        let document = InMemoryDocument::new().with_element("favicon");
        assert_eq!(document.icon_href("favicon").as_deref(), Some(""));
    }
}
