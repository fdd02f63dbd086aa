//! Page composition root.
//!
//! [`Page`] owns every controller plus the presentation [`Surface`] and is
//! the only place controller output is projected onto the page. The browser
//! host keeps it in an `Rc<RefCell<_>>` and routes DOM events into it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is single-threaded. The two async flows,
//! [`activate_deep_link`] and [`copy_link`], borrow the page only between
//! suspension points so event handlers can run while they wait.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use crate::accordion::{AccordionController, AccordionEffect, BlockSpec};
use crate::config::PageConfig;
use crate::copy::ClipboardCopyController;
use crate::deep_link::DeepLinkActivator;
use crate::error::ClipboardError;
use crate::painter::{CopyIconButton, ThemePainter, ThemedIcon};
use crate::surface::{BlockKey, ButtonKey, Surface};
use crate::theme::{ColorSchemeSignal, PreferenceStore, Theme, ThemePreference};

/// System clipboard with a legacy fallback.
#[async_trait(?Send)]
pub trait Clipboard {
    /// Asynchronous clipboard API write.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Off-screen text input plus the legacy copy command.
    fn fallback_copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Fixed-delay suspension on the UI event loop.
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// A next-paint callback the host must deliver to [`Page::on_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest {
    pub block: BlockKey,
    pub ticket: u64,
}

/// Everything the host discovers about the page before wiring events.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub blocks: Vec<BlockSpec>,
    pub icons: Vec<ThemedIcon>,
    /// `data-copy` target of each copy trigger, indexed by [`ButtonKey`].
    pub copy_triggers: Vec<Option<String>>,
    /// Icon buttons, indexed by [`crate::surface::CopyIconKey`].
    pub copy_icon_buttons: Vec<CopyIconButton>,
}

pub struct Page<S: Surface> {
    preference: ThemePreference,
    painter: ThemePainter,
    accordion: AccordionController,
    copy: ClipboardCopyController,
    deep_link: DeepLinkActivator,
    copy_revert: Duration,
    surface: S,
}

impl<S: Surface> Page<S> {
    /// Build the page and resolve the startup theme. Nothing is painted
    /// until [`Self::start`].
    #[must_use]
    pub fn new(
        config: &PageConfig,
        layout: PageLayout,
        store: Box<dyn PreferenceStore>,
        color_scheme: &dyn ColorSchemeSignal,
        reduced_motion: bool,
        surface: S,
    ) -> Self {
        let preference = ThemePreference::resolve(store, config.storage_key.clone(), color_scheme);
        log::debug!(
            "page: {} blocks, {} icons, {} copy triggers, {} copy icon buttons, reduced motion {reduced_motion}",
            layout.blocks.len(),
            layout.icons.len(),
            layout.copy_triggers.len(),
            layout.copy_icon_buttons.len()
        );
        Self {
            preference,
            painter: ThemePainter::new(config.labels.clone(), layout.icons, layout.copy_icon_buttons),
            accordion: AccordionController::new(layout.blocks, reduced_motion),
            copy: ClipboardCopyController::new(layout.copy_triggers),
            deep_link: DeepLinkActivator::new(config.deep_link_delay_ms),
            copy_revert: Duration::from_millis(u64::from(config.copy_revert_ms)),
            surface,
        }
    }

    /// Paint the resolved startup theme.
    pub fn start(&mut self) {
        self.repaint();
    }

    // --- Accessors ---

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.preference.theme()
    }

    #[must_use]
    pub fn accordion(&self) -> &AccordionController {
        &self.accordion
    }

    #[must_use]
    pub fn copy_controller(&self) -> &ClipboardCopyController {
        &self.copy
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // --- Theme ---

    /// Re-project the current theme and copy states.
    pub fn repaint(&mut self) {
        let copy = &self.copy;
        let copy_state = |button| copy.state(button).unwrap_or_default();
        self.painter.apply_theme(self.preference.theme(), &copy_state, &mut self.surface);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.preference.set_theme(theme);
        self.repaint();
    }

    /// Theme toggle click.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.preference.toggle();
        self.repaint();
        next
    }

    // --- Blocks ---

    pub fn open_block(&mut self, block: BlockKey) -> Vec<FrameRequest> {
        let effects = self.accordion.open(block);
        self.project(effects)
    }

    pub fn close_block(&mut self, block: BlockKey) -> Vec<FrameRequest> {
        let effects = self.accordion.close(block);
        self.project(effects)
    }

    /// Summary click.
    pub fn toggle_block(&mut self, block: BlockKey) -> Vec<FrameRequest> {
        let effects = self.accordion.toggle(block);
        self.project(effects)
    }

    pub fn on_frame(&mut self, request: FrameRequest) {
        let effects = self.accordion.on_frame(request.block, request.ticket);
        self.project(effects);
    }

    pub fn on_transition_end(&mut self, block: BlockKey, property: &str) {
        let effects = self.accordion.on_transition_end(block, property);
        self.project(effects);
    }

    fn project(&mut self, effects: Vec<AccordionEffect>) -> Vec<FrameRequest> {
        let mut frames = Vec::new();
        for effect in effects {
            match effect {
                AccordionEffect::SetOpen { block, open } => self.surface.set_block_open(block, open),
                AccordionEffect::SetPresented { block, presented } => {
                    self.surface.set_block_presented(block, presented);
                }
                AccordionEffect::RequestFrame { block, ticket } => frames.push(FrameRequest { block, ticket }),
            }
        }
        frames
    }

    // --- Deep links ---

    /// Resolve `hash` and scroll its block into view.
    pub fn begin_deep_link(&mut self, hash: &str) -> Option<BlockKey> {
        let block = self.deep_link.resolve(hash, &self.accordion)?;
        self.surface.scroll_into_view(block);
        Some(block)
    }

    // --- Copy triggers ---

    #[must_use]
    pub fn share_url(&self, button: ButtonKey, href: &str) -> Option<String> {
        self.copy.share_url_for(button, href)
    }

    /// Show the check state and copied marker. Returns the revert ticket.
    pub fn mark_copied(&mut self, button: ButtonKey) -> Option<u64> {
        let ticket = self.copy.mark_copied(button)?;
        self.repaint();
        self.surface.set_copied_marker(button, true);
        Some(ticket)
    }

    /// Restore the copy state unless a newer copy superseded `ticket`.
    pub fn revert_copy(&mut self, button: ButtonKey, ticket: u64) {
        if self.copy.revert(button, ticket) {
            self.surface.set_copied_marker(button, false);
            self.repaint();
        }
    }
}

/// Which clipboard path a copy took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Primary,
    Fallback,
    /// Both paths failed. The button still shows the check state.
    Failed,
}

/// Deep-link flow: scroll, wait, then open with exclusivity.
///
/// Returns the frame requests of the open, for the host to schedule.
pub async fn activate_deep_link<S: Surface>(
    page: &Rc<RefCell<Page<S>>>,
    hash: &str,
    timer: &dyn Timer,
) -> Vec<FrameRequest> {
    let Some(block) = page.borrow_mut().begin_deep_link(hash) else {
        return Vec::new();
    };
    let delay = page.borrow().deep_link.delay();
    timer.sleep(delay).await;
    log::debug!("deep link: opening block {}", block.0);
    page.borrow_mut().open_block(block)
}

/// Copy flow for one trigger click.
///
/// Returns `None` when the trigger has no target. Primary and fallback paths
/// converge: the button shows `check` until the revert delay elapses.
pub async fn copy_link<S: Surface>(
    page: &Rc<RefCell<Page<S>>>,
    button: ButtonKey,
    href: &str,
    clipboard: &dyn Clipboard,
    timer: &dyn Timer,
) -> Option<CopyOutcome> {
    let url = page.borrow().share_url(button, href)?;

    let outcome = match clipboard.write_text(&url).await {
        Ok(()) => CopyOutcome::Primary,
        Err(err) => {
            log::debug!("copy: clipboard api failed ({err}), using fallback");
            match clipboard.fallback_copy(&url) {
                Ok(()) => CopyOutcome::Fallback,
                Err(err) => {
                    log::warn!("copy: fallback failed: {err}");
                    CopyOutcome::Failed
                }
            }
        }
    };

    let ticket = page.borrow_mut().mark_copied(button)?;
    let revert = page.borrow().copy_revert;
    timer.sleep(revert).await;
    page.borrow_mut().revert_copy(button, ticket);
    Some(outcome)
}
