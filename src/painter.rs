//! Theme painter: projects a [`Theme`] onto every themed element.
//!
//! DESIGN
//! ======
//! Icon variant URLs are static data scanned from the page once. Copy
//! trigger state is owned by [`crate::copy::ClipboardCopyController`] and
//! looked up on each call, so the painter holds no mutable state and can be
//! re-run any number of times. Each write is skipped when the surface already
//! shows the target value, which makes a repeated call mutation-free.
//!
//! Copy icon buttons and copy triggers are separate element sets. An icon
//! button that is also a trigger shows that trigger's state; one that is not
//! always shows the `copy` variant.

#[cfg(test)]
#[path = "painter_test.rs"]
mod painter_test;

use crate::config::ToggleLabels;
use crate::copy::CopyButtonState;
use crate::surface::{ButtonKey, CopyIconKey, IconKey, Surface};
use crate::theme::Theme;

/// Light/dark source variants declared on a themed icon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemedIcon {
    pub light: Option<String>,
    pub dark: Option<String>,
}

impl ThemedIcon {
    #[must_use]
    pub fn new(light: Option<String>, dark: Option<String>) -> Self {
        Self { light: non_empty(light), dark: non_empty(dark) }
    }

    #[must_use]
    pub fn src_for(&self, theme: Theme) -> Option<&str> {
        match theme {
            Theme::Light => self.light.as_deref(),
            Theme::Dark => self.dark.as_deref(),
        }
    }
}

/// The four image variants of a copy button's inner icon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyIconSet {
    pub copy_light: Option<String>,
    pub copy_dark: Option<String>,
    pub check_light: Option<String>,
    pub check_dark: Option<String>,
}

impl CopyIconSet {
    #[must_use]
    pub fn new(
        copy_light: Option<String>,
        copy_dark: Option<String>,
        check_light: Option<String>,
        check_dark: Option<String>,
    ) -> Self {
        Self {
            copy_light: non_empty(copy_light),
            copy_dark: non_empty(copy_dark),
            check_light: non_empty(check_light),
            check_dark: non_empty(check_dark),
        }
    }

    #[must_use]
    pub fn src_for(&self, theme: Theme, state: CopyButtonState) -> Option<&str> {
        match (theme, state) {
            (Theme::Light, CopyButtonState::Copy) => self.copy_light.as_deref(),
            (Theme::Dark, CopyButtonState::Copy) => self.copy_dark.as_deref(),
            (Theme::Light, CopyButtonState::Check) => self.check_light.as_deref(),
            (Theme::Dark, CopyButtonState::Check) => self.check_dark.as_deref(),
        }
    }
}

/// A copy icon button as scanned from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyIconButton {
    /// The trigger this button also is, if any.
    pub trigger: Option<ButtonKey>,
    /// `None` when the button has no inner image.
    pub icons: Option<CopyIconSet>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Default)]
pub struct ThemePainter {
    labels: ToggleLabels,
    icons: Vec<ThemedIcon>,
    /// Indexed by [`CopyIconKey`].
    copy_icons: Vec<CopyIconButton>,
}

impl ThemePainter {
    #[must_use]
    pub fn new(labels: ToggleLabels, icons: Vec<ThemedIcon>, copy_icons: Vec<CopyIconButton>) -> Self {
        Self { labels, icons, copy_icons }
    }

    #[must_use]
    pub fn label_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.labels.when_dark,
            Theme::Light => &self.labels.when_light,
        }
    }

    /// Apply `theme` to the surface. `copy_state` reports the state of a copy
    /// trigger; icon buttons without a trigger are painted in the `copy` state.
    pub fn apply_theme(
        &self,
        theme: Theme,
        copy_state: &dyn Fn(ButtonKey) -> CopyButtonState,
        surface: &mut dyn Surface,
    ) {
        if surface.dark_marker() != theme.is_dark() {
            surface.set_dark_marker(theme.is_dark());
        }

        let label = self.label_for(theme);
        if surface.toggle_label().is_some_and(|current| current != label) {
            surface.set_toggle_label(label);
        }

        for (index, icon) in self.icons.iter().enumerate() {
            let key = IconKey(index);
            if let Some(src) = icon.src_for(theme) {
                if surface.icon_src(key).as_deref() != Some(src) {
                    surface.set_icon_src(key, src);
                }
            }
        }

        for (index, button) in self.copy_icons.iter().enumerate() {
            let Some(set) = &button.icons else {
                continue;
            };
            let key = CopyIconKey(index);
            let state = button.trigger.map(copy_state).unwrap_or_default();
            if let Some(src) = set.src_for(theme, state) {
                if surface.copy_icon_src(key).as_deref() != Some(src) {
                    surface.set_copy_icon_src(key, src);
                }
            }
        }
    }
}
