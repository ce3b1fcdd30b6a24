// End to end start-up against the in-memory adapters: hostname to flags to
// mount to favicon updates, then offline cache registration.

use crate::modules::bootstrap::adapters::outbound::application_in_memory::InMemoryApplication;
use crate::modules::bootstrap::core::endpoint::{PRODUCTION_API_ENDPOINT, PROXIED_API_ENDPOINT};
use crate::modules::bootstrap::core::favicon::FaviconSignal;
use crate::modules::bootstrap::use_cases::mount_application::handler::BootstrapError;
use crate::shared::infrastructure::clock::in_memory::FixedClock;
use crate::shared::infrastructure::config::in_memory::InMemoryConfig;
use crate::shared::infrastructure::dom::in_memory::InMemoryDocument;
use crate::shared::infrastructure::dom::{Document, FAVICON_ELEMENT_ID};
use crate::shared::infrastructure::location::in_memory::StaticLocation;
use crate::shared::infrastructure::offline_cache::in_memory::RecordingOfflineCache;
use crate::shell::{StartupEnvironment, start};
use crate::tests::fixtures::config::{NOW, full_config};
use crate::tests::fixtures::dom::{RUNNING_ICON, STOPPED_ICON, document_with_icon};
use rstest::rstest;
use std::rc::Rc;

#[rstest]
fn it_should_boot_on_localhost_and_stop_the_favicon(full_config: InMemoryConfig) {
    let location = StaticLocation::new("localhost");
    let clock = FixedClock::at(NOW);
    let environment = StartupEnvironment { location: &location, config: &full_config, clock: &clock };
    let document = document_with_icon(RUNNING_ICON);
    let application = InMemoryApplication::new();
    let offline_cache = RecordingOfflineCache::new();

    let handle = start(&environment, document.clone(), application.clone(), &offline_cache).expect("start-up failed");

    let inits = application.inits();
    assert_eq!(inits.len(), 1);
    assert_eq!(inits[0].1.api_endpoint(), PRODUCTION_API_ENDPOINT);
    assert_eq!(inits[0].1.time(), NOW);
    assert_eq!(offline_cache.registrations(), 1);

    handle.channel().emit(FaviconSignal::Stopped);
    assert_eq!(document.icon_href(FAVICON_ELEMENT_ID).as_deref(), Some(STOPPED_ICON));

    handle.channel().emit(FaviconSignal::Running);
    handle.channel().emit(FaviconSignal::Running);
    assert_eq!(document.icon_href(FAVICON_ELEMENT_ID).as_deref(), Some(RUNNING_ICON));
    assert_eq!(document.href_writes(), 2);
    assert_eq!(handle.channel().dropped(), 0);
}

#[rstest]
fn it_should_boot_behind_the_proxy_on_other_hosts(full_config: InMemoryConfig) {
    let location = StaticLocation::new("track.example.com");
    let clock = FixedClock::at(NOW);
    let environment = StartupEnvironment { location: &location, config: &full_config, clock: &clock };
    let application = InMemoryApplication::new();

    start(&environment, document_with_icon(STOPPED_ICON), application.clone(), &RecordingOfflineCache::new())
        .expect("start-up failed");

    assert_eq!(application.inits()[0].1.api_endpoint(), PROXIED_API_ENDPOINT);
}

#[rstest]
fn it_should_stop_before_the_offline_cache_when_the_root_is_missing(full_config: InMemoryConfig) {
    let location = StaticLocation::new("localhost");
    let clock = FixedClock::at(NOW);
    let environment = StartupEnvironment { location: &location, config: &full_config, clock: &clock };
    let document = Rc::new(InMemoryDocument::new().with_icon(FAVICON_ELEMENT_ID, STOPPED_ICON));
    let offline_cache = RecordingOfflineCache::new();

    let result = start(&environment, document, InMemoryApplication::new(), &offline_cache);

    assert!(matches!(result, Err(BootstrapError::MountNotFound(_))));
    assert_eq!(offline_cache.registrations(), 0);
}

#[rstest]
fn it_should_register_the_offline_cache_without_a_favicon_channel() {
    let location = StaticLocation::new("127.0.0.1");
    let config = InMemoryConfig::new();
    let clock = FixedClock::at(NOW);
    let environment = StartupEnvironment { location: &location, config: &config, clock: &clock };
    let document = document_with_icon(STOPPED_ICON);
    let offline_cache = RecordingOfflineCache::new();

    let handle = start(&environment, document.clone(), InMemoryApplication::without_favicon(), &offline_cache)
        .expect("start-up failed");

    handle.channel().emit(FaviconSignal::Running);
    assert_eq!(document.icon_href(FAVICON_ELEMENT_ID).as_deref(), Some(STOPPED_ICON));
    assert_eq!(offline_cache.registrations(), 1);
}
