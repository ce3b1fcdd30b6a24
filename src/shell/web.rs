// Browser entry point, run once when the wasm module is instantiated.

use crate::modules::bootstrap::adapters::outbound::application_elm::ElmApplication;
use crate::shared::infrastructure::clock::SystemClock;
use crate::shared::infrastructure::config::build_time::BuildTimeConfig;
use crate::shared::infrastructure::dom::web::WebDocument;
use crate::shared::infrastructure::location::web::WindowLocation;
use crate::shared::infrastructure::offline_cache::web::ServiceWorkerCache;
use crate::shell::{StartupEnvironment, start};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    let document = WebDocument::current().ok_or_else(|| JsValue::from_str("no document to mount into"))?;
    let environment = StartupEnvironment { location: &WindowLocation, config: &BuildTimeConfig, clock: &SystemClock };

    start(&environment, Rc::new(document), ElmApplication, &ServiceWorkerCache::default())
        .map(|_handle| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
