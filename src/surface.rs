//! Presentation surface: the one-way projection target for controller state.
//!
//! Controllers never read state back off the page. They own their state and
//! push it through this trait; the browser host implements it over the DOM
//! and tests implement it in memory. Getters exist only so the painter can
//! skip writes that would not change anything.

/// Index of a collapsible block, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockKey(pub usize);

/// Index of a themed icon, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconKey(pub usize);

/// Index of a copy trigger (a control that copies a link), in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonKey(pub usize);

/// Index of a copy icon button (whose image shows copy/check), in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CopyIconKey(pub usize);

pub trait Surface {
    // --- Theme ---

    fn dark_marker(&self) -> bool;
    fn set_dark_marker(&mut self, on: bool);

    /// Current toggle label, or `None` when the page has no toggle control.
    fn toggle_label(&self) -> Option<String>;
    fn set_toggle_label(&mut self, label: &str);

    fn icon_src(&self, icon: IconKey) -> Option<String>;
    fn set_icon_src(&mut self, icon: IconKey, src: &str);

    fn copy_icon_src(&self, button: CopyIconKey) -> Option<String>;
    fn set_copy_icon_src(&mut self, button: CopyIconKey, src: &str);

    // --- Blocks ---

    /// Structural open flag (the `open` attribute of a disclosure element).
    fn set_block_open(&mut self, block: BlockKey, open: bool);

    /// Presentation flag driving the open animation (the `is-open` class).
    fn set_block_presented(&mut self, block: BlockKey, presented: bool);

    fn scroll_into_view(&mut self, block: BlockKey);

    // --- Copy triggers ---

    fn set_copied_marker(&mut self, button: ButtonKey, on: bool);
}
