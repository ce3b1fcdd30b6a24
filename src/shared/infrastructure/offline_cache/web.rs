// Service worker registration through navigator.serviceWorker.

use crate::shared::infrastructure::offline_cache::OfflineCache;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

pub const SERVICE_WORKER_URL: &str = "/service-worker.js";

#[derive(Debug, Clone)]
pub struct ServiceWorkerCache {
    script_url: String,
}

impl Default for ServiceWorkerCache {
    fn default() -> Self {
        Self { script_url: SERVICE_WORKER_URL.to_string() }
    }
}

impl OfflineCache for ServiceWorkerCache {
    fn register(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator = window.navigator();
        let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
        if !supported {
            tracing::info!("service workers unsupported, skipping offline cache");
            return;
        }
        let promise = navigator.service_worker().register(&self.script_url);
        let script_url = self.script_url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => tracing::info!(%script_url, "offline cache registered"),
                Err(e) => tracing::warn!(%script_url, error = ?e, "offline cache registration failed"),
            }
        });
    }
}
