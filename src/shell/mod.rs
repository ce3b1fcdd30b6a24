// Composition root for the bootstrap.
//
// Responsibilities
// - Read the hostname and build the flags, once.
// - Mount the application component and wire the favicon channel.
// - Register the offline cache last, only after a successful mount.
//
// The wasm start hook in `web` calls `start` with the browser adapters; tests
// call it with the in-memory ones.

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::modules::bootstrap::core::ports::Application;
use crate::modules::bootstrap::use_cases::build_flags::handler::BuildFlagsHandler;
use crate::modules::bootstrap::use_cases::mount_application::handler::{BootstrapError, MountApplicationHandler};
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::config::ConfigSource;
use crate::shared::infrastructure::dom::Document;
use crate::shared::infrastructure::location::Location;
use crate::shared::infrastructure::offline_cache::OfflineCache;
use std::rc::Rc;

/// Ambient inputs read during start-up.
pub struct StartupEnvironment<'a> {
    pub location: &'a dyn Location,
    pub config: &'a dyn ConfigSource,
    pub clock: &'a dyn Clock,
}

pub fn start<D, A>(
    environment: &StartupEnvironment<'_>,
    document: Rc<D>,
    application: A,
    offline_cache: &dyn OfflineCache,
) -> Result<A::Handle, BootstrapError>
where
    D: Document + 'static,
    A: Application<D::Node>,
{
    let hostname = environment.location.hostname();
    let flags = BuildFlagsHandler::new(environment.config, environment.clock).handle(&hostname);

    let handle = MountApplicationHandler::new(document, application).handle(flags)?;

    offline_cache.register();
    tracing::info!(%hostname, "bootstrap complete");
    Ok(handle)
}
