//! Browser-backed collaborators: storage, media queries, clipboard, timers.
//!
//! TRADE-OFFS
//! ==========
//! Every failure here is logged and absorbed. A page with storage disabled
//! or an insecure-context clipboard still gets full visual feedback.

use std::time::Duration;

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement, Storage, Window};

use crate::error::ClipboardError;
use crate::page::{Clipboard, Timer};
use crate::theme::{ColorSchemeSignal, PreferenceStore};

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
pub const PREFERS_REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Evaluate a media query once; unsupported queries count as not matching.
#[must_use]
pub fn media_matches(window: &Window, query: &str) -> bool {
    window.match_media(query).unwrap_or_default().is_some_and(|mq| mq.matches())
}

/// System dark-mode signal, read when asked.
pub struct SystemColorScheme(pub Window);

impl ColorSchemeSignal for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        media_matches(&self.0, PREFERS_DARK_QUERY)
    }
}

/// `localStorage`; `None` when storage is blocked.
pub struct LocalStorageStore(Option<Storage>);

impl LocalStorageStore {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        Self(window.local_storage().unwrap_or_default())
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref().and_then(|s| s.get_item(key).unwrap_or_default())
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = &self.0 else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("storage: writing {key:?} failed: {err:?}");
        }
    }
}

pub struct BrowserClipboard;

#[async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        // `navigator.clipboard` is undefined outside secure contexts.
        let raw = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
            .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))?;
        if raw.is_undefined() || raw.is_null() {
            return Err(ClipboardError::Unavailable);
        }
        let clipboard: web_sys::Clipboard = raw.unchecked_into();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))?;
        Ok(())
    }

    fn fallback_copy(&self, text: &str) -> Result<(), ClipboardError> {
        let fail = |err: JsValue| ClipboardError::FallbackFailed(format!("{err:?}"));
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ClipboardError::FallbackFailed("no document".into()))?;
        let body = document.body().ok_or_else(|| ClipboardError::FallbackFailed("no body".into()))?;

        let textarea: HtmlTextAreaElement = document.create_element("textarea").map_err(fail)?.unchecked_into();
        textarea.set_value(text);
        let style = textarea.style();
        style.set_property("position", "fixed").map_err(fail)?;
        style.set_property("opacity", "0").map_err(fail)?;
        body.append_child(&textarea).map_err(fail)?;
        textarea.select();

        let copied = document.unchecked_ref::<HtmlDocument>().exec_command("copy");
        textarea.remove();
        match copied {
            Ok(true) => Ok(()),
            Ok(false) => Err(ClipboardError::FallbackFailed("copy command refused".into())),
            Err(err) => Err(fail(err)),
        }
    }
}

/// Timer on the browser event loop.
pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}
