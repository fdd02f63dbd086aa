//! Theme model and persisted preference.
//!
//! The preference is the single owner of the page's current [`Theme`]. It is
//! resolved once at startup from storage (or the system color scheme) and
//! changed only through [`ThemePreference::set_theme`], which persists it.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. Stores swallow their own failures, so a browser
//! with `localStorage` disabled simply forgets the choice on reload.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

/// Page-wide visual mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The literal persisted for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted literal. Anything else counts as no preference.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimal key-value persistence contract (browser `localStorage`).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Read-only system color scheme query (`prefers-color-scheme: dark`).
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;
}

impl ColorSchemeSignal for bool {
    fn prefers_dark(&self) -> bool {
        *self
    }
}

/// Resolve the startup theme without writing anything back to storage.
///
/// A persisted `"dark"` or `"light"` wins; otherwise the system signal
/// decides, and light is the default.
#[must_use]
pub fn resolve_initial_theme(store: &dyn PreferenceStore, key: &str, signal: &dyn ColorSchemeSignal) -> Theme {
    if let Some(theme) = store.get(key).as_deref().and_then(Theme::parse) {
        log::debug!("theme: using stored preference {theme}");
        return theme;
    }
    if signal.prefers_dark() {
        log::debug!("theme: no stored preference, system prefers dark");
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Owner of the canonical theme value and its persistence.
pub struct ThemePreference {
    store: Box<dyn PreferenceStore>,
    key: String,
    current: Theme,
}

impl ThemePreference {
    /// Resolve the initial theme from `store`, falling back to `signal`.
    #[must_use]
    pub fn resolve(store: Box<dyn PreferenceStore>, key: impl Into<String>, signal: &dyn ColorSchemeSignal) -> Self {
        let key = key.into();
        let current = resolve_initial_theme(store.as_ref(), &key, signal);
        Self { store, key, current }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.current
    }

    /// Persist `theme` and make it current.
    pub fn set_theme(&mut self, theme: Theme) {
        self.store.set(&self.key, theme.as_str());
        self.current = theme;
        log::info!("theme: set to {theme}");
    }

    /// Flip and persist the theme, returning the new value.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set_theme(next);
        next
    }
}
