//! Copy-link triggers: share URL construction and the transient check state.
//!
//! The controller owns every trigger's [`CopyButtonState`]. The painter reads
//! it through [`ClipboardCopyController::state`]. The async copy
//! flow lives in [`crate::page::copy_link`]; this module only holds the
//! state transitions so they can be tested without a clipboard.

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

use crate::surface::ButtonKey;

/// Which icon a copy button currently shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyButtonState {
    #[default]
    Copy,
    Check,
}

/// Build the shareable deep link for `target`.
///
/// Any fragment already on `href` is dropped before `#target` is appended.
#[must_use]
pub fn share_url(href: &str, target: &str) -> String {
    let base = href.split_once('#').map_or(href, |(base, _)| base);
    format!("{base}#{target}")
}

#[derive(Debug, Clone)]
struct CopyButton {
    target: Option<String>,
    state: CopyButtonState,
    /// Bumped on every copy so only the latest revert timer takes effect.
    ticket: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ClipboardCopyController {
    buttons: Vec<CopyButton>,
}

impl ClipboardCopyController {
    /// One entry per copy trigger, holding its `data-copy` target id.
    #[must_use]
    pub fn new(targets: Vec<Option<String>>) -> Self {
        let buttons = targets
            .into_iter()
            .map(|target| CopyButton {
                target: target.filter(|t| !t.is_empty()),
                state: CopyButtonState::Copy,
                ticket: 0,
            })
            .collect();
        Self { buttons }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    #[must_use]
    pub fn state(&self, button: ButtonKey) -> Option<CopyButtonState> {
        self.buttons.get(button.0).map(|b| b.state)
    }

    #[must_use]
    pub fn target(&self, button: ButtonKey) -> Option<&str> {
        self.buttons.get(button.0).and_then(|b| b.target.as_deref())
    }

    /// The URL this button copies, or `None` when it has no target.
    #[must_use]
    pub fn share_url_for(&self, button: ButtonKey, href: &str) -> Option<String> {
        self.target(button).map(|target| share_url(href, target))
    }

    /// Enter the check state. Returns the ticket the revert must present.
    pub fn mark_copied(&mut self, button: ButtonKey) -> Option<u64> {
        let entry = self.buttons.get_mut(button.0)?;
        entry.state = CopyButtonState::Check;
        entry.ticket += 1;
        Some(entry.ticket)
    }

    /// Return to the copy state if no newer copy happened since `ticket`.
    pub fn revert(&mut self, button: ButtonKey, ticket: u64) -> bool {
        let Some(entry) = self.buttons.get_mut(button.0) else {
            return false;
        };
        if entry.ticket != ticket || entry.state == CopyButtonState::Copy {
            return false;
        }
        entry.state = CopyButtonState::Copy;
        true
    }
}
