// Application bootstrapper.
//
// Responsibilities
// - Locate the mount node; its absence is fatal.
// - Initialize the application component with the flags.
// - Subscribe the favicon presenter in the same turn, before anything else can
//   run, so no signal emitted after init is missed.

use crate::modules::bootstrap::core::flags::Flags;
use crate::modules::bootstrap::core::ports::{AppHandle, Application, ComponentError};
use crate::modules::bootstrap::use_cases::present_favicon::handler::FaviconPresenter;
use crate::shared::infrastructure::dom::{Document, ROOT_ELEMENT_ID};
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("mount element #{0} not found")]
    MountNotFound(&'static str),

    #[error(transparent)]
    Component(#[from] ComponentError),
}

pub struct MountApplicationHandler<D, A>
where
    D: Document + 'static,
    A: Application<D::Node>,
{
    document: Rc<D>,
    application: A,
}

impl<D, A> MountApplicationHandler<D, A>
where
    D: Document + 'static,
    A: Application<D::Node>,
{
    pub fn new(document: Rc<D>, application: A) -> Self {
        Self { document, application }
    }

    pub fn handle(&self, flags: Flags) -> Result<A::Handle, BootstrapError> {
        let node = self
            .document
            .element_by_id(ROOT_ELEMENT_ID)
            .ok_or(BootstrapError::MountNotFound(ROOT_ELEMENT_ID))?;

        let handle = self.application.init(node, &flags)?;
        tracing::info!(api_endpoint = flags.api_endpoint(), "application mounted");

        match handle.favicon() {
            Some(channel) => {
                channel.subscribe(FaviconPresenter::new(self.document.clone()).into_callback());
                tracing::debug!("favicon presenter subscribed");
            }
            None => tracing::debug!("application exposes no favicon channel"),
        }
        Ok(handle)
    }
}
