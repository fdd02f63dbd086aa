//! Deep-link activation: open the block named by the location fragment.
//!
//! Resolution is pure; [`crate::page::activate_deep_link`] performs the
//! scroll, waits [`DeepLinkActivator::delay`] so smooth scrolling can start,
//! then opens the block through the accordion like a click would.

#[cfg(test)]
#[path = "deep_link_test.rs"]
mod deep_link_test;

use std::time::Duration;

use crate::accordion::AccordionController;
use crate::consts::DEEP_LINK_OPEN_DELAY_MS;
use crate::surface::BlockKey;

/// Identifier named by a location hash (`"#post-3"` -> `"post-3"`).
///
/// Returns `None` for an empty hash or a bare `"#"`.
#[must_use]
pub fn fragment_target(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    (!id.is_empty()).then_some(id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeepLinkActivator {
    delay: Duration,
}

impl Default for DeepLinkActivator {
    fn default() -> Self {
        Self::new(DEEP_LINK_OPEN_DELAY_MS)
    }
}

impl DeepLinkActivator {
    #[must_use]
    pub fn new(delay_ms: u32) -> Self {
        Self { delay: Duration::from_millis(u64::from(delay_ms)) }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The block a location hash refers to, if it names a collapsible block.
    #[must_use]
    pub fn resolve(&self, hash: &str, accordion: &AccordionController) -> Option<BlockKey> {
        let id = fragment_target(hash)?;
        let block = accordion.find(id);
        if block.is_none() {
            log::debug!("deep link: no collapsible block with id {id:?}");
        }
        block
    }
}
