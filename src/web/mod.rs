//! Browser host: scans the page, builds the [`Page`], and wires DOM events.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `hydrate` feature. Everything above this module is
//! platform independent; this is the only code that touches `web-sys`.
//! Listeners live for the lifetime of the page, so their closures are
//! intentionally leaked with `Closure::forget`.

pub mod browser;
pub mod dom;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState, Element, Event, EventTarget, TransitionEvent, Window};

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::error::ConfigError;
use crate::page::{FrameRequest, Page, activate_deep_link, copy_link};
use crate::surface::{BlockKey, ButtonKey};

use browser::{BrowserClipboard, BrowserTimer, LocalStorageStore, PREFERS_REDUCED_MOTION_QUERY, SystemColorScheme};
use dom::DomSurface;

type SharedPage = Rc<RefCell<Page<DomSurface>>>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = read_config(&document);
    let level = config.as_ref().map_or(log::Level::Info, PageConfig::level);
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("logger already installed: {err}");
    }
    let config = config.unwrap_or_else(|err| {
        log::warn!("config: {err}; using defaults");
        PageConfig::default()
    });

    if document.ready_state() == DocumentReadyState::Loading {
        let target: EventTarget = window.clone().into();
        let boot = Closure::once(move |_: Event| mount(&window, &document, &config));
        listen_once(&target, "DOMContentLoaded", boot);
    } else {
        mount(&window, &document, &config);
    }
}

fn read_config(document: &Document) -> Result<PageConfig, ConfigError> {
    match document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) {
        Some(raw) => PageConfig::from_json(&raw),
        None => Ok(PageConfig::default()),
    }
}

fn listen_once(target: &EventTarget, event: &str, callback: Closure<dyn FnMut(Event)>) {
    if let Err(err) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        log::warn!("events: listening for {event} failed: {err:?}");
    }
    callback.forget();
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        log::warn!("events: listening for {event} failed: {err:?}");
    }
    callback.forget();
}

/// Build the page from the parsed DOM and wire every listener.
fn mount(window: &Window, document: &Document, config: &PageConfig) {
    let scanned = dom::scan(document, &config.selectors);
    let reduced_motion = browser::media_matches(window, PREFERS_REDUCED_MOTION_QUERY);

    let mut page = Page::new(
        config,
        scanned.layout,
        Box::new(LocalStorageStore::new(window)),
        &SystemColorScheme(window.clone()),
        reduced_motion,
        scanned.surface,
    );
    page.start();
    let page: SharedPage = Rc::new(RefCell::new(page));

    wire_theme_toggle(document, &config.selectors.theme_toggle, &page);
    wire_blocks(&page, scanned.summaries, scanned.bodies);
    wire_copy_triggers(&page);

    let deep_link_page = Rc::clone(&page);
    listen(window, "hashchange", move |_| run_deep_link(&deep_link_page));
    run_deep_link(&page);

    log::info!("postpage mounted ({} theme)", page.borrow().theme());
}

fn wire_theme_toggle(document: &Document, selector: &str, page: &SharedPage) {
    let Some(toggle) = dom::query_all(document, selector).into_iter().next() else {
        return;
    };
    let page = Rc::clone(page);
    listen(&toggle, "click", move |_| {
        page.borrow_mut().toggle_theme();
    });
}

fn wire_blocks(page: &SharedPage, summaries: Vec<Option<Element>>, bodies: Vec<Option<Element>>) {
    for (index, summary) in summaries.into_iter().enumerate() {
        let Some(summary) = summary else {
            continue;
        };
        let page = Rc::clone(page);
        listen(&summary, "click", move |event| {
            event.prevent_default();
            let frames = page.borrow_mut().toggle_block(BlockKey(index));
            schedule_frames(&page, frames);
        });
    }

    for (index, body) in bodies.into_iter().enumerate() {
        let Some(body) = body else {
            continue;
        };
        let page = Rc::clone(page);
        listen(&body, "transitionend", move |event| {
            if let Some(transition) = event.dyn_ref::<TransitionEvent>() {
                page.borrow_mut().on_transition_end(BlockKey(index), &transition.property_name());
            }
        });
    }
}

fn wire_copy_triggers(page: &SharedPage) {
    // Only triggers get click handling; icon-only buttons keep their native behavior.
    let triggers: Vec<(usize, Element)> = {
        let page = page.borrow();
        (0..page.copy_controller().len())
            .filter_map(|i| page.surface().copy_trigger(ButtonKey(i)).cloned().map(|t| (i, t)))
            .collect()
    };
    for (index, trigger) in triggers {
        let page = Rc::clone(page);
        listen(&trigger, "click", move |event| {
            event.prevent_default();
            event.stop_propagation();
            let href = match web_sys::window().map(|w| w.location().href()) {
                Some(Ok(href)) => href,
                Some(Err(err)) => {
                    log::warn!("copy: reading location failed: {err:?}");
                    return;
                }
                None => return,
            };
            let page = Rc::clone(&page);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = copy_link(&page, ButtonKey(index), &href, &BrowserClipboard, &BrowserTimer).await;
                log::debug!("copy: trigger {index} finished with {outcome:?}");
            });
        });
    }
}

fn run_deep_link(page: &SharedPage) {
    let hash = match web_sys::window().map(|w| w.location().hash()) {
        Some(Ok(hash)) => hash,
        Some(Err(err)) => {
            log::warn!("deep link: reading location failed: {err:?}");
            return;
        }
        None => return,
    };
    let page = Rc::clone(page);
    wasm_bindgen_futures::spawn_local(async move {
        let frames = activate_deep_link(&page, &hash, &BrowserTimer).await;
        schedule_frames(&page, frames);
    });
}

/// Deliver each request on the next animation frame, or immediately when
/// the browser refuses to schedule one.
fn schedule_frames(page: &SharedPage, frames: Vec<FrameRequest>) {
    for request in frames {
        let Some(window) = web_sys::window() else {
            page.borrow_mut().on_frame(request);
            continue;
        };
        let frame_page = Rc::clone(page);
        let callback = Closure::once_into_js(move |_: f64| frame_page.borrow_mut().on_frame(request));
        if let Err(err) = window.request_animation_frame(callback.unchecked_ref()) {
            log::warn!("frames: request_animation_frame failed: {err:?}");
            page.borrow_mut().on_frame(request);
        }
    }
}
