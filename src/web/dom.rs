//! DOM scanning and the [`Surface`] implementation over live elements.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::accordion::BlockSpec;
use crate::config::Selectors;
use crate::consts::{COPIED_CLASS, DARK_MARKER_CLASS, IS_OPEN_CLASS};
use crate::painter::{CopyIconButton, CopyIconSet, ThemedIcon};
use crate::page::PageLayout;
use crate::surface::{BlockKey, ButtonKey, CopyIconKey, IconKey, Surface};

/// Elements found on the page, in document order.
pub struct ScannedPage {
    pub layout: PageLayout,
    pub surface: DomSurface,
    /// Summary element per block, for click interception.
    pub summaries: Vec<Option<Element>>,
    /// Body region per block, for transition-end signals.
    pub bodies: Vec<Option<Element>>,
}

#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect(),
        Err(err) => {
            log::warn!("dom: bad selector {selector:?}: {err:?}");
            Vec::new()
        }
    }
}

fn query_in(element: &Element, selector: &str) -> Option<Element> {
    match element.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("dom: bad selector {selector:?}: {err:?}");
            None
        }
    }
}

#[must_use]
pub fn scan(document: &Document, selectors: &Selectors) -> ScannedPage {
    let block_elements = query_all(document, &selectors.blocks);
    let mut blocks = Vec::with_capacity(block_elements.len());
    let mut summaries = Vec::with_capacity(block_elements.len());
    let mut bodies = Vec::with_capacity(block_elements.len());
    for element in &block_elements {
        let id = element.id();
        let body = query_in(element, &selectors.block_body);
        blocks.push(BlockSpec { id: (!id.is_empty()).then_some(id), has_body: body.is_some() });
        summaries.push(query_in(element, &selectors.block_summary));
        bodies.push(body);
    }

    let icon_elements = query_all(document, &selectors.themed_icons);
    let icons = icon_elements
        .iter()
        .map(|el| ThemedIcon::new(el.get_attribute("data-icon-light"), el.get_attribute("data-icon-dark")))
        .collect();

    let copy_triggers = query_all(document, &selectors.copy_triggers);
    let trigger_targets = copy_triggers.iter().map(|el| el.get_attribute("data-copy")).collect();

    // An icon button that also matches the trigger selector shows that trigger's state.
    let icon_buttons = query_all(document, &selectors.copy_icon_buttons);
    let copy_images: Vec<Option<Element>> = icon_buttons.iter().map(|el| query_in(el, "img")).collect();
    let copy_icon_buttons = icon_buttons
        .iter()
        .zip(&copy_images)
        .map(|(el, img)| CopyIconButton {
            trigger: copy_triggers.iter().position(|t| t == el).map(ButtonKey),
            icons: img.as_ref().map(|img| {
                CopyIconSet::new(
                    img.get_attribute("data-copy-light"),
                    img.get_attribute("data-copy-dark"),
                    img.get_attribute("data-check-light"),
                    img.get_attribute("data-check-dark"),
                )
            }),
        })
        .collect();

    let surface = DomSurface {
        body: document.body(),
        toggle: query_all(document, &selectors.theme_toggle).into_iter().next(),
        icons: icon_elements,
        copy_triggers,
        copy_images,
        blocks: block_elements,
    };

    let layout = PageLayout { blocks, icons, copy_triggers: trigger_targets, copy_icon_buttons };
    ScannedPage { layout, surface, summaries, bodies }
}

pub struct DomSurface {
    body: Option<HtmlElement>,
    toggle: Option<Element>,
    icons: Vec<Element>,
    /// Indexed by [`ButtonKey`].
    copy_triggers: Vec<Element>,
    /// Inner image of each icon button, indexed by [`CopyIconKey`].
    copy_images: Vec<Option<Element>>,
    blocks: Vec<Element>,
}

impl DomSurface {
    #[must_use]
    pub fn copy_trigger(&self, button: ButtonKey) -> Option<&Element> {
        self.copy_triggers.get(button.0)
    }
}

fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::warn!("dom: toggling class {class:?} failed: {err:?}");
    }
}

fn set_src(element: &Element, src: &str) {
    if let Err(err) = element.set_attribute("src", src) {
        log::warn!("dom: setting src failed: {err:?}");
    }
}

impl Surface for DomSurface {
    fn dark_marker(&self) -> bool {
        self.body.as_ref().is_some_and(|b| b.class_list().contains(DARK_MARKER_CLASS))
    }

    fn set_dark_marker(&mut self, on: bool) {
        if let Some(body) = &self.body {
            toggle_class(body, DARK_MARKER_CLASS, on);
        }
    }

    fn toggle_label(&self) -> Option<String> {
        self.toggle.as_ref().map(|t| t.text_content().unwrap_or_default())
    }

    fn set_toggle_label(&mut self, label: &str) {
        if let Some(toggle) = &self.toggle {
            toggle.set_text_content(Some(label));
        }
    }

    fn icon_src(&self, icon: IconKey) -> Option<String> {
        self.icons.get(icon.0).and_then(|el| el.get_attribute("src"))
    }

    fn set_icon_src(&mut self, icon: IconKey, src: &str) {
        if let Some(el) = self.icons.get(icon.0) {
            set_src(el, src);
        }
    }

    fn copy_icon_src(&self, button: CopyIconKey) -> Option<String> {
        self.copy_images.get(button.0).and_then(Option::as_ref).and_then(|img| img.get_attribute("src"))
    }

    fn set_copy_icon_src(&mut self, button: CopyIconKey, src: &str) {
        if let Some(Some(img)) = self.copy_images.get(button.0) {
            set_src(img, src);
        }
    }

    fn set_block_open(&mut self, block: BlockKey, open: bool) {
        let Some(el) = self.blocks.get(block.0) else {
            return;
        };
        if open {
            if let Err(err) = el.set_attribute("open", "") {
                log::warn!("dom: opening block {} failed: {err:?}", block.0);
            }
        } else if let Err(err) = el.remove_attribute("open") {
            log::warn!("dom: closing block {} failed: {err:?}", block.0);
        }
    }

    fn set_block_presented(&mut self, block: BlockKey, presented: bool) {
        if let Some(el) = self.blocks.get(block.0) {
            toggle_class(el, IS_OPEN_CLASS, presented);
        }
    }

    fn scroll_into_view(&mut self, block: BlockKey) {
        if let Some(el) = self.blocks.get(block.0) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    fn set_copied_marker(&mut self, button: ButtonKey, on: bool) {
        if let Some(el) = self.copy_triggers.get(button.0) {
            toggle_class(el, COPIED_CLASS, on);
        }
    }
}
