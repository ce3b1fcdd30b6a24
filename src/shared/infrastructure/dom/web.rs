// Browser implementation of the Document port on top of web_sys.

use crate::shared::infrastructure::dom::Document;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlLinkElement};

pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Document of the current window, if there is one.
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    fn link(&self, id: &str) -> Option<HtmlLinkElement> {
        self.document.get_element_by_id(id)?.dyn_into::<HtmlLinkElement>().ok()
    }
}

impl Document for WebDocument {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn icon_href(&self, id: &str) -> Option<String> {
        self.link(id).map(|link| link.href())
    }

    fn set_icon_href(&self, id: &str, href: &str) {
        if let Some(link) = self.link(id) {
            link.set_href(href);
        }
    }
}
