pub mod in_memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub trait Location {
    /// Hostname of the page, read fresh on every call.
    fn hostname(&self) -> String;
}
