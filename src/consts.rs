//! Shared constants for the page behavior crate.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the explicit theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Body class present while the dark theme is active.
pub const DARK_MARKER_CLASS: &str = "theme-dark";

/// Toggle label shown while dark (clicking turns the lights back on).
pub const LABEL_WHEN_DARK: &str = "Lights On";

/// Toggle label shown while light.
pub const LABEL_WHEN_LIGHT: &str = "Lights Out";

// ── Accordion ───────────────────────────────────────────────────

/// Presentation class added one frame after the structural open flag.
pub const IS_OPEN_CLASS: &str = "is-open";

/// The only transition property whose completion finishes a close.
pub const BODY_TRANSITION_PROPERTY: &str = "max-height";

// ── Deep links ──────────────────────────────────────────────────

/// Delay between scroll-into-view and opening a deep-linked block.
pub const DEEP_LINK_OPEN_DELAY_MS: u32 = 200;

// ── Copy buttons ────────────────────────────────────────────────

/// How long a copy button shows its check state.
pub const COPY_REVERT_DELAY_MS: u32 = 1200;

/// Class marking a copy button as recently copied.
pub const COPIED_CLASS: &str = "copied";
