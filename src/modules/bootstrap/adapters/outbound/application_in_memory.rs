// In memory application component.
//
// Purpose
// - Stand in for the real component in tests and local runs.
//
// Responsibilities
// - Record every init call with its node and flags.
// - Hand out a favicon channel that tests drive with `emit`.
// - Drop signals emitted while nobody is subscribed, like the real channel.

use crate::modules::bootstrap::core::favicon::FaviconSignal;
use crate::modules::bootstrap::core::flags::Flags;
use crate::modules::bootstrap::core::ports::{AppHandle, Application, ComponentError, FaviconCallback, FaviconChannel};
use crate::shared::infrastructure::dom::in_memory::InMemoryNode;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
pub struct InMemoryFaviconChannel {
    subscriber: RefCell<Option<FaviconCallback>>,
    dropped: Cell<usize>,
}

impl InMemoryFaviconChannel {
    pub fn has_subscriber(&self) -> bool {
        self.subscriber.borrow().is_some()
    }

    /// Signals emitted before anyone subscribed.
    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    pub fn emit(&self, signal: FaviconSignal) {
        // Taken out for the call so a subscriber may emit again.
        let taken = self.subscriber.borrow_mut().take();
        match taken {
            Some(mut callback) => {
                callback(signal);
                let mut slot = self.subscriber.borrow_mut();
                if slot.is_none() {
                    *slot = Some(callback);
                }
            }
            None => self.dropped.set(self.dropped.get() + 1),
        }
    }
}

impl FaviconChannel for InMemoryFaviconChannel {
    fn subscribe(&self, callback: FaviconCallback) {
        *self.subscriber.borrow_mut() = Some(callback);
    }
}

pub struct InMemoryHandle {
    channel: Rc<InMemoryFaviconChannel>,
    exposes_favicon: bool,
}

impl InMemoryHandle {
    pub fn channel(&self) -> &InMemoryFaviconChannel {
        &self.channel
    }
}

impl AppHandle for InMemoryHandle {
    fn favicon(&self) -> Option<&dyn FaviconChannel> {
        self.exposes_favicon.then_some(self.channel.as_ref() as &dyn FaviconChannel)
    }
}

#[derive(Debug, Clone)]
enum Mode {
    WithFavicon,
    WithoutFavicon,
    Failing(String),
}

#[derive(Clone)]
pub struct InMemoryApplication {
    mode: Mode,
    inits: Rc<RefCell<Vec<(InMemoryNode, Flags)>>>,
}

impl Default for InMemoryApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryApplication {
    pub fn new() -> Self {
        Self { mode: Mode::WithFavicon, inits: Rc::default() }
    }

    pub fn without_favicon() -> Self {
        Self { mode: Mode::WithoutFavicon, ..Self::new() }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self { mode: Mode::Failing(reason.into()), ..Self::new() }
    }

    pub fn inits(&self) -> Vec<(InMemoryNode, Flags)> {
        self.inits.borrow().clone()
    }
}

impl Application<InMemoryNode> for InMemoryApplication {
    type Handle = InMemoryHandle;

    fn init(&self, node: InMemoryNode, flags: &Flags) -> Result<InMemoryHandle, ComponentError> {
        if let Mode::Failing(reason) = &self.mode {
            return Err(ComponentError::Init(reason.clone()));
        }
        self.inits.borrow_mut().push((node, flags.clone()));
        Ok(InMemoryHandle { channel: Rc::default(), exposes_favicon: matches!(self.mode, Mode::WithFavicon) })
    }
}
