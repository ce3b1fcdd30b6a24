// Favicon presenter.
//
// Responsibilities
// - Read the favicon href, compute the next one, write it back only when it
//   changes.
// - Treat unknown signals and already-correct icons as no-ops.

use crate::modules::bootstrap::core::favicon::{FaviconOutcome, FaviconSignal, IconState, next_icon_href};
use crate::modules::bootstrap::core::ports::FaviconCallback;
use crate::shared::infrastructure::dom::{Document, FAVICON_ELEMENT_ID};
use std::rc::Rc;

pub struct FaviconPresenter<D: Document> {
    document: Rc<D>,
}

impl<D: Document + 'static> FaviconPresenter<D> {
    pub fn new(document: Rc<D>) -> Self {
        Self { document }
    }

    pub fn present(&self, signal: &FaviconSignal) -> FaviconOutcome {
        if let FaviconSignal::Other(value) = signal {
            tracing::debug!(signal = %value, "ignoring favicon signal");
            return FaviconOutcome::Ignored;
        }
        let Some(current) = self.document.icon_href(FAVICON_ELEMENT_ID) else {
            tracing::warn!(id = FAVICON_ELEMENT_ID, "favicon element missing");
            return FaviconOutcome::ElementMissing;
        };
        match next_icon_href(&current, signal) {
            Some(next) => {
                self.document.set_icon_href(FAVICON_ELEMENT_ID, &next);
                tracing::debug!(?signal, from = %current, to = %next, "favicon updated");
                FaviconOutcome::Updated { from: current, to: next }
            }
            None => {
                tracing::debug!(?signal, state = ?IconState::from_href(&current), "favicon unchanged");
                FaviconOutcome::Unchanged
            }
        }
    }

    /// Callback for a favicon channel subscription.
    pub fn into_callback(self) -> FaviconCallback {
        Box::new(move |signal| {
            self.present(&signal);
        })
    }
}
