use crate::shared::infrastructure::dom::in_memory::InMemoryDocument;
use crate::shared::infrastructure::dom::{FAVICON_ELEMENT_ID, ROOT_ELEMENT_ID};
use std::rc::Rc;

pub const RUNNING_ICON: &str = "https://track.example.com/favicon-run.ico";
pub const STOPPED_ICON: &str = "https://track.example.com/favicon-stop.ico";

/// Page with a mount point and a favicon showing `href`.
pub fn document_with_icon(href: &str) -> Rc<InMemoryDocument> {
    Rc::new(InMemoryDocument::new().with_element(ROOT_ELEMENT_ID).with_icon(FAVICON_ELEMENT_ID, href))
}
