//! Page behavior for the blog: theme preference, collapsible posts, and
//! copy-link buttons.
//!
//! The crate is compiled to WebAssembly and runs in the browser. The core
//! is plain Rust and owns all state: which theme is active, which post block
//! is open and where it is in its animation, and which copy buttons are
//! showing their check icon. The DOM is only ever written to, through the
//! [`surface::Surface`] projection. The browser host in `web` (behind the
//! `hydrate` feature) scans the page, implements the collaborators, and routes
//! events into [`page::Page`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | [`theme::Theme`] and the persisted [`theme::ThemePreference`] |
//! | [`painter`] | Projects a theme onto labels and icon variants |
//! | [`accordion`] | Open/close state machine with exclusivity and animation |
//! | [`deep_link`] | Resolves the location fragment to a block |
//! | [`copy`] | Share URLs and per-trigger check state |
//! | [`page`] | Composition root and the async deep-link / copy flows |
//! | [`surface`] | Presentation trait and element keys |
//! | [`config`] | Selectors, labels, delays, log level |
//! | [`error`] | Error enums (never surfaced to visitors) |
//! | [`consts`] | Shared constants (delays, class names, storage key) |

pub mod accordion;
pub mod config;
pub mod consts;
pub mod copy;
pub mod deep_link;
pub mod error;
pub mod page;
pub mod painter;
pub mod surface;
pub mod theme;

#[cfg(test)]
mod testkit;

#[cfg(feature = "hydrate")]
pub mod web;
