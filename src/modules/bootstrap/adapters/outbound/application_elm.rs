// Binding to the compiled Elm program loaded on the page.
//
// Contract
// - `Elm.Main.init({ node, flags })` returns the app.
// - `app.ports.favicon.subscribe(fn)` delivers string messages.
// - Flags cross as a plain JS object; the workspace id sentinel becomes NaN.

use crate::modules::bootstrap::core::favicon::FaviconSignal;
use crate::modules::bootstrap::core::flags::Flags;
use crate::modules::bootstrap::core::ports::{AppHandle, Application, ComponentError, FaviconCallback, FaviconChannel};
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key)).ok().filter(|value| !value.is_undefined() && !value.is_null())
}

fn describe(error: &JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{error:?}"))
}

fn flags_to_js(flags: &Flags) -> Result<JsValue, ComponentError> {
    let json = serde_json::to_string(flags).map_err(|e| ComponentError::Init(e.to_string()))?;
    let value = js_sys::JSON::parse(&json).map_err(|e| ComponentError::Init(describe(&e)))?;
    if flags.api_workspace_id().is_none() {
        Reflect::set(&value, &JsValue::from_str("apiWorkspaceId"), &JsValue::from_f64(f64::NAN))
            .map_err(|e| ComponentError::Init(describe(&e)))?;
    }
    Ok(value)
}

/// The program exported as `Elm.Main` on the global object.
#[derive(Debug, Default, Clone, Copy)]
pub struct ElmApplication;

impl Application<Element> for ElmApplication {
    type Handle = ElmHandle;

    fn init(&self, node: Element, flags: &Flags) -> Result<ElmHandle, ComponentError> {
        let global: JsValue = js_sys::global().into();
        let main = get(&global, "Elm")
            .and_then(|elm| get(&elm, "Main"))
            .ok_or_else(|| ComponentError::Unavailable("Elm.Main is not loaded".to_string()))?;
        let init = get(&main, "init")
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| ComponentError::Unavailable("Elm.Main.init is not a function".to_string()))?;

        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("node"), &node).map_err(|e| ComponentError::Init(describe(&e)))?;
        Reflect::set(&options, &JsValue::from_str("flags"), &flags_to_js(flags)?)
            .map_err(|e| ComponentError::Init(describe(&e)))?;

        let app = init.call1(&main, &options).map_err(|e| ComponentError::Init(describe(&e)))?;
        let favicon = get(&app, "ports").and_then(|ports| get(&ports, "favicon")).map(|port| ElmPort { port });
        Ok(ElmHandle { app, favicon })
    }
}

pub struct ElmHandle {
    pub app: JsValue,
    favicon: Option<ElmPort>,
}

impl AppHandle for ElmHandle {
    fn favicon(&self) -> Option<&dyn FaviconChannel> {
        self.favicon.as_ref().map(|port| port as &dyn FaviconChannel)
    }
}

struct ElmPort {
    port: JsValue,
}

impl FaviconChannel for ElmPort {
    fn subscribe(&self, mut callback: FaviconCallback) {
        let Some(subscribe) = get(&self.port, "subscribe").and_then(|f| f.dyn_into::<Function>().ok()) else {
            tracing::warn!("favicon port has no subscribe function");
            return;
        };
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |message: JsValue| {
            let signal = match message.as_string() {
                Some(text) => FaviconSignal::from(text),
                None => FaviconSignal::Other(describe(&message)),
            };
            callback(signal);
        });
        if let Err(e) = subscribe.call1(&self.port, closure.as_ref().unchecked_ref()) {
            tracing::warn!(error = %describe(&e), "favicon port subscription failed");
            return;
        }
        // Lives as long as the page.
        closure.forget();
    }
}
