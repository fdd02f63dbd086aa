//! In-memory fakes shared by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::ClipboardError;
use crate::page::{Clipboard, Timer};
use crate::surface::{BlockKey, ButtonKey, CopyIconKey, IconKey, Surface};

/// Recording surface. `mutations` counts every setter call.
#[derive(Debug, Default)]
pub struct FakeSurface {
    pub dark: bool,
    pub label: Option<String>,
    pub icons: BTreeMap<IconKey, String>,
    pub copy_icons: BTreeMap<CopyIconKey, String>,
    pub open: BTreeSet<BlockKey>,
    pub presented: BTreeSet<BlockKey>,
    pub copied: BTreeSet<ButtonKey>,
    pub scrolled: Vec<BlockKey>,
    pub mutations: usize,
}

impl FakeSurface {
    pub fn with_toggle() -> Self {
        Self { label: Some(String::new()), ..Self::default() }
    }
}

impl Surface for FakeSurface {
    fn dark_marker(&self) -> bool {
        self.dark
    }

    fn set_dark_marker(&mut self, on: bool) {
        self.mutations += 1;
        self.dark = on;
    }

    fn toggle_label(&self) -> Option<String> {
        self.label.clone()
    }

    fn set_toggle_label(&mut self, label: &str) {
        self.mutations += 1;
        if self.label.is_some() {
            self.label = Some(label.to_owned());
        }
    }

    fn icon_src(&self, icon: IconKey) -> Option<String> {
        self.icons.get(&icon).cloned()
    }

    fn set_icon_src(&mut self, icon: IconKey, src: &str) {
        self.mutations += 1;
        self.icons.insert(icon, src.to_owned());
    }

    fn copy_icon_src(&self, button: CopyIconKey) -> Option<String> {
        self.copy_icons.get(&button).cloned()
    }

    fn set_copy_icon_src(&mut self, button: CopyIconKey, src: &str) {
        self.mutations += 1;
        self.copy_icons.insert(button, src.to_owned());
    }

    fn set_block_open(&mut self, block: BlockKey, open: bool) {
        self.mutations += 1;
        if open {
            self.open.insert(block);
        } else {
            self.open.remove(&block);
        }
    }

    fn set_block_presented(&mut self, block: BlockKey, presented: bool) {
        self.mutations += 1;
        if presented {
            self.presented.insert(block);
        } else {
            self.presented.remove(&block);
        }
    }

    fn scroll_into_view(&mut self, block: BlockKey) {
        self.scrolled.push(block);
    }

    fn set_copied_marker(&mut self, button: ButtonKey, on: bool) {
        self.mutations += 1;
        if on {
            self.copied.insert(button);
        } else {
            self.copied.remove(&button);
        }
    }
}

/// Clipboard whose primary and fallback outcomes are scripted.
#[derive(Debug, Default)]
pub struct FakeClipboard {
    pub reject_primary: bool,
    pub fail_fallback: bool,
    pub written: RefCell<Vec<String>>,
    pub fallback_used: RefCell<Vec<String>>,
}

#[async_trait(?Send)]
impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.reject_primary {
            return Err(ClipboardError::Rejected("denied".into()));
        }
        self.written.borrow_mut().push(text.to_owned());
        Ok(())
    }

    fn fallback_copy(&self, text: &str) -> Result<(), ClipboardError> {
        self.fallback_used.borrow_mut().push(text.to_owned());
        if self.fail_fallback {
            return Err(ClipboardError::FallbackFailed("execCommand returned false".into()));
        }
        Ok(())
    }
}

/// Timer that resolves immediately, first running a hook so tests can
/// observe state at the suspension point.
#[derive(Default)]
pub struct FakeTimer {
    pub sleeps: RefCell<Vec<Duration>>,
    pub hook: RefCell<Option<Box<dyn FnMut()>>>,
    pub hook_runs: Cell<usize>,
}

impl FakeTimer {
    pub fn on_sleep(hook: impl FnMut() + 'static) -> Rc<Self> {
        Rc::new(Self { hook: RefCell::new(Some(Box::new(hook))), ..Self::default() })
    }
}

#[async_trait(?Send)]
impl Timer for FakeTimer {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
        if let Some(hook) = self.hook.borrow_mut().as_mut() {
            hook();
            self.hook_runs.set(self.hook_runs.get() + 1);
        }
    }
}
