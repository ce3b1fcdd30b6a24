// Ports onto the external application component.
//
// Purpose
// - Describe what the bootstrap needs from the component without knowing how it
//   is implemented: an init entry point and an optional favicon channel.
//
// Boundaries
// - The component owns timer state, sync and rendering. Adapters bind it.
//
// Testing guidance
// - The in-memory adapter records init calls and lets tests emit signals.

use crate::modules::bootstrap::core::favicon::FaviconSignal;
use crate::modules::bootstrap::core::flags::Flags;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComponentError {
    #[error("application component unavailable: {0}")]
    Unavailable(String),

    #[error("application component failed to initialize: {0}")]
    Init(String),
}

pub type FaviconCallback = Box<dyn FnMut(FaviconSignal)>;

/// One-way, single-subscriber stream of favicon signals.
pub trait FaviconChannel {
    fn subscribe(&self, callback: FaviconCallback);
}

/// Handle returned by a successful init.
pub trait AppHandle {
    fn favicon(&self) -> Option<&dyn FaviconChannel>;
}

/// The application component, mounted on a node of type `N`.
pub trait Application<N> {
    type Handle: AppHandle;

    fn init(&self, node: N, flags: &Flags) -> Result<Self::Handle, ComponentError>;
}
