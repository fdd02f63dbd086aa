//! Accordion controller: the open/close state machine for collapsible blocks.
//!
//! Each block moves through `Closed -> Opening -> Open -> Closing -> Closed`.
//! The structural open flag is set when opening starts and cleared when
//! closing finishes; the `is-open` presentation flag is set one paint frame
//! after opening starts (so the CSS transition has a starting point) and
//! cleared as soon as closing starts.
//!
//! Operations return [`AccordionEffect`]s describing what the page must
//! show and which frame callbacks it must schedule. The controller is the
//! only writer of block state; at most one block is ever structurally open
//! outside of a closing animation.
//!
//! DESIGN
//! ======
//! Frame requests carry a ticket. Closing or re-opening a block bumps its
//! ticket, so a frame callback that arrives after the block was closed is
//! recognised as stale and ignored instead of re-adding `is-open`.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use crate::consts::BODY_TRANSITION_PROPERTY;
use crate::surface::BlockKey;

/// Animation phase of a single block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockPhase {
    #[default]
    Closed,
    /// Structurally open, waiting for the frame that starts the animation.
    Opening,
    Open,
    /// Presentation flag removed, waiting for the body's size transition.
    Closing,
}

/// Static description of a block, captured when the page is scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockSpec {
    /// Element id, used as the deep-link anchor.
    pub id: Option<String>,
    /// Whether the block has an inner body region that animates.
    pub has_body: bool,
}

#[derive(Debug, Clone)]
struct CollapsibleBlock {
    spec: BlockSpec,
    phase: BlockPhase,
    ticket: u64,
    awaiting_transition_end: bool,
}

impl CollapsibleBlock {
    fn new(spec: BlockSpec) -> Self {
        Self { spec, phase: BlockPhase::Closed, ticket: 0, awaiting_transition_end: false }
    }

    fn is_structurally_open(&self) -> bool {
        self.phase != BlockPhase::Closed
    }
}

/// Something the page must do as a result of a controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionEffect {
    /// Set the structural open flag.
    SetOpen { block: BlockKey, open: bool },
    /// Set the `is-open` presentation flag.
    SetPresented { block: BlockKey, presented: bool },
    /// Call [`AccordionController::on_frame`] with this ticket on the next paint.
    RequestFrame { block: BlockKey, ticket: u64 },
}

#[derive(Debug, Clone, Default)]
pub struct AccordionController {
    blocks: Vec<CollapsibleBlock>,
    reduced_motion: bool,
}

impl AccordionController {
    #[must_use]
    pub fn new(specs: Vec<BlockSpec>, reduced_motion: bool) -> Self {
        Self { blocks: specs.into_iter().map(CollapsibleBlock::new).collect(), reduced_motion }
    }

    // --- Queries ---

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    #[must_use]
    pub fn phase(&self, block: BlockKey) -> Option<BlockPhase> {
        self.blocks.get(block.0).map(|b| b.phase)
    }

    /// Structural open flag (true while opening, open, or closing).
    #[must_use]
    pub fn is_open(&self, block: BlockKey) -> bool {
        self.blocks.get(block.0).is_some_and(CollapsibleBlock::is_structurally_open)
    }

    /// Whether a close is waiting on the body's transition-end signal.
    #[must_use]
    pub fn awaiting_transition_end(&self, block: BlockKey) -> bool {
        self.blocks.get(block.0).is_some_and(|b| b.awaiting_transition_end)
    }

    /// Find a block by its element id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<BlockKey> {
        self.blocks.iter().position(|b| b.spec.id.as_deref() == Some(id)).map(BlockKey)
    }

    /// Blocks currently shown as open (`Opening` or `Open`).
    #[must_use]
    pub fn visibly_open(&self) -> Vec<BlockKey> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| matches!(b.phase, BlockPhase::Opening | BlockPhase::Open))
            .map(|(i, _)| BlockKey(i))
            .collect()
    }

    // --- Transitions ---

    /// Open `block`, first closing every other open block.
    pub fn open(&mut self, block: BlockKey) -> Vec<AccordionEffect> {
        let mut effects = Vec::new();
        if block.0 >= self.blocks.len() {
            return effects;
        }

        for index in 0..self.blocks.len() {
            if index != block.0 && self.blocks[index].is_structurally_open() {
                effects.extend(self.close(BlockKey(index)));
            }
        }

        let instant = self.reduced_motion;
        let target = &mut self.blocks[block.0];
        match target.phase {
            BlockPhase::Opening | BlockPhase::Open => return effects,
            BlockPhase::Closed | BlockPhase::Closing => {}
        }

        // Re-opening mid-close abandons the pending completion.
        target.awaiting_transition_end = false;
        target.ticket += 1;

        if instant || !target.spec.has_body {
            target.phase = BlockPhase::Open;
            effects.push(AccordionEffect::SetOpen { block, open: true });
            effects.push(AccordionEffect::SetPresented { block, presented: true });
        } else {
            target.phase = BlockPhase::Opening;
            effects.push(AccordionEffect::SetOpen { block, open: true });
            effects.push(AccordionEffect::RequestFrame { block, ticket: target.ticket });
        }
        log::debug!("accordion: open {} -> {:?}", block.0, target.phase);
        effects
    }

    /// Close `block`. A block already closed or closing is left alone.
    pub fn close(&mut self, block: BlockKey) -> Vec<AccordionEffect> {
        let instant = self.reduced_motion;
        let Some(target) = self.blocks.get_mut(block.0) else {
            return Vec::new();
        };
        match target.phase {
            BlockPhase::Closed | BlockPhase::Closing => return Vec::new(),
            BlockPhase::Opening | BlockPhase::Open => {}
        }

        target.ticket += 1;
        let mut effects = vec![AccordionEffect::SetPresented { block, presented: false }];
        if instant || !target.spec.has_body {
            target.phase = BlockPhase::Closed;
            effects.push(AccordionEffect::SetOpen { block, open: false });
        } else {
            target.phase = BlockPhase::Closing;
            target.awaiting_transition_end = true;
        }
        log::debug!("accordion: close {} -> {:?}", block.0, target.phase);
        effects
    }

    /// Summary click: close a shown block, open anything else.
    pub fn toggle(&mut self, block: BlockKey) -> Vec<AccordionEffect> {
        match self.phase(block) {
            Some(BlockPhase::Opening | BlockPhase::Open) => self.close(block),
            Some(BlockPhase::Closed | BlockPhase::Closing) => self.open(block),
            None => Vec::new(),
        }
    }

    /// Next-paint callback for a frame requested by [`Self::open`].
    pub fn on_frame(&mut self, block: BlockKey, ticket: u64) -> Vec<AccordionEffect> {
        let Some(target) = self.blocks.get_mut(block.0) else {
            return Vec::new();
        };
        if target.phase != BlockPhase::Opening || target.ticket != ticket {
            log::debug!("accordion: stale frame for {} ignored", block.0);
            return Vec::new();
        }
        target.phase = BlockPhase::Open;
        vec![AccordionEffect::SetPresented { block, presented: true }]
    }

    /// Transition-end signal from a block's body region.
    ///
    /// Only the body's `max-height` transition completes a close; any other
    /// property is ignored.
    pub fn on_transition_end(&mut self, block: BlockKey, property: &str) -> Vec<AccordionEffect> {
        if property != BODY_TRANSITION_PROPERTY {
            return Vec::new();
        }
        let Some(target) = self.blocks.get_mut(block.0) else {
            return Vec::new();
        };
        if target.phase != BlockPhase::Closing || !target.awaiting_transition_end {
            return Vec::new();
        }
        target.phase = BlockPhase::Closed;
        target.awaiting_transition_end = false;
        log::debug!("accordion: close {} finished", block.0);
        vec![AccordionEffect::SetOpen { block, open: false }]
    }
}
