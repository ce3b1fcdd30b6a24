// Offline cache registration port. Fire-and-forget: callers pass nothing and
// get nothing back; capability checks and failures stay inside the adapter.

pub mod in_memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub trait OfflineCache {
    fn register(&self);
}
