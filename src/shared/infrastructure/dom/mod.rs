// Document port.
//
// Purpose
// - Give the bootstrap the two things it touches in the page: the mount node
//   and the favicon href.
//
// Boundaries
// - Everything else in the page belongs to the application component.

pub mod in_memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub const ROOT_ELEMENT_ID: &str = "root";
pub const FAVICON_ELEMENT_ID: &str = "favicon";

pub trait Document {
    /// Node handed to the application component as its mount point.
    type Node;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Icon reference of the element `id`, `None` when the element is missing.
    fn icon_href(&self, id: &str) -> Option<String>;

    /// Replaces the icon reference of `id`. A missing element is ignored.
    fn set_icon_href(&self, id: &str, href: &str);
}
