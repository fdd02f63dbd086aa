use super::*;
use crate::testkit::FakeSurface;

// =============================================================
// Helpers
// =============================================================

fn icon(name: &str) -> ThemedIcon {
    ThemedIcon::new(Some(format!("{name}-light.svg")), Some(format!("{name}-dark.svg")))
}

fn copy_set() -> CopyIconSet {
    CopyIconSet::new(
        Some("copy-light.svg".into()),
        Some("copy-dark.svg".into()),
        Some("check-light.svg".into()),
        Some("check-dark.svg".into()),
    )
}

fn icon_button(trigger: usize) -> CopyIconButton {
    CopyIconButton { trigger: Some(ButtonKey(trigger)), icons: Some(copy_set()) }
}

fn painter() -> ThemePainter {
    ThemePainter::new(
        ToggleLabels::default(),
        vec![icon("rss"), icon("github")],
        vec![icon_button(0), CopyIconButton { trigger: Some(ButtonKey(1)), icons: None }, icon_button(2)],
    )
}

fn all_copy(_: ButtonKey) -> CopyButtonState {
    CopyButtonState::Copy
}

// =============================================================
// Variant selection
// =============================================================

#[test]
fn empty_variants_count_as_missing() {
    let icon = ThemedIcon::new(Some(String::new()), Some("d.svg".into()));
    assert_eq!(icon.src_for(Theme::Light), None);
    assert_eq!(icon.src_for(Theme::Dark), Some("d.svg"));
}

#[test]
fn copy_set_picks_one_of_four() {
    let set = copy_set();
    assert_eq!(set.src_for(Theme::Light, CopyButtonState::Copy), Some("copy-light.svg"));
    assert_eq!(set.src_for(Theme::Dark, CopyButtonState::Copy), Some("copy-dark.svg"));
    assert_eq!(set.src_for(Theme::Light, CopyButtonState::Check), Some("check-light.svg"));
    assert_eq!(set.src_for(Theme::Dark, CopyButtonState::Check), Some("check-dark.svg"));
}

// =============================================================
// apply_theme
// =============================================================

#[test]
fn dark_paints_marker_label_and_icons() {
    let mut surface = FakeSurface::with_toggle();
    painter().apply_theme(Theme::Dark, &all_copy, &mut surface);

    assert!(surface.dark);
    assert_eq!(surface.label.as_deref(), Some("Lights On"));
    assert_eq!(surface.icons[&IconKey(0)], "rss-dark.svg");
    assert_eq!(surface.icons[&IconKey(1)], "github-dark.svg");
    assert_eq!(surface.copy_icons[&CopyIconKey(0)], "copy-dark.svg");
    assert!(!surface.copy_icons.contains_key(&CopyIconKey(1)));
    assert_eq!(surface.copy_icons[&CopyIconKey(2)], "copy-dark.svg");
}

#[test]
fn light_clears_marker_and_sets_light_label() {
    let mut surface = FakeSurface::with_toggle();
    let painter = painter();
    painter.apply_theme(Theme::Dark, &all_copy, &mut surface);
    painter.apply_theme(Theme::Light, &all_copy, &mut surface);

    assert!(!surface.dark);
    assert_eq!(surface.label.as_deref(), Some("Lights Out"));
    assert_eq!(surface.icons[&IconKey(0)], "rss-light.svg");
}

#[test]
fn copy_state_selects_check_variant() {
    let mut surface = FakeSurface::default();
    let checked = |b: ButtonKey| if b == ButtonKey(2) { CopyButtonState::Check } else { CopyButtonState::Copy };
    painter().apply_theme(Theme::Light, &checked, &mut surface);

    assert_eq!(surface.copy_icons[&CopyIconKey(0)], "copy-light.svg");
    assert_eq!(surface.copy_icons[&CopyIconKey(2)], "check-light.svg");
}

#[test]
fn icon_button_without_trigger_always_shows_copy() {
    let painter = ThemePainter::new(
        ToggleLabels::default(),
        Vec::new(),
        vec![CopyIconButton { trigger: None, icons: Some(copy_set()) }, icon_button(0)],
    );
    let mut surface = FakeSurface::default();
    let all_check = |_: ButtonKey| CopyButtonState::Check;
    painter.apply_theme(Theme::Dark, &all_check, &mut surface);

    assert_eq!(surface.copy_icons[&CopyIconKey(0)], "copy-dark.svg");
    assert_eq!(surface.copy_icons[&CopyIconKey(1)], "check-dark.svg");
}

#[test]
fn icon_button_shows_state_of_its_own_trigger() {
    let painter = ThemePainter::new(ToggleLabels::default(), Vec::new(), vec![icon_button(3)]);
    let mut surface = FakeSurface::default();
    let only_third = |b: ButtonKey| if b == ButtonKey(3) { CopyButtonState::Check } else { CopyButtonState::Copy };
    painter.apply_theme(Theme::Light, &only_third, &mut surface);

    assert_eq!(surface.copy_icons[&CopyIconKey(0)], "check-light.svg");
}

#[test]
fn missing_toggle_is_left_alone() {
    let mut surface = FakeSurface::default();
    painter().apply_theme(Theme::Dark, &all_copy, &mut surface);
    assert_eq!(surface.label, None);
}

#[test]
fn icon_without_variant_keeps_its_source() {
    let painter = ThemePainter::new(
        ToggleLabels::default(),
        vec![ThemedIcon::new(Some("only-light.svg".into()), None)],
        Vec::new(),
    );
    let mut surface = FakeSurface::default();
    surface.icons.insert(IconKey(0), "original.svg".into());

    painter.apply_theme(Theme::Dark, &all_copy, &mut surface);
    assert_eq!(surface.icons[&IconKey(0)], "original.svg");
}

#[test]
fn reapplying_same_theme_makes_no_mutations() {
    let mut surface = FakeSurface::with_toggle();
    let painter = painter();
    painter.apply_theme(Theme::Dark, &all_copy, &mut surface);
    let after_first = surface.mutations;
    assert!(after_first > 0);

    painter.apply_theme(Theme::Dark, &all_copy, &mut surface);
    assert_eq!(surface.mutations, after_first);
}

#[test]
fn initial_light_on_fresh_page_only_writes_icons() {
    let mut surface = FakeSurface::default();
    painter().apply_theme(Theme::Light, &all_copy, &mut surface);
    // two themed icons plus two copy buttons with images
    assert_eq!(surface.mutations, 4);
    assert!(!surface.dark);
}

#[test]
fn custom_labels_are_used() {
    let labels = ToggleLabels { when_dark: "Sun".into(), when_light: "Moon".into() };
    let painter = ThemePainter::new(labels, Vec::new(), Vec::new());
    let mut surface = FakeSurface::with_toggle();
    painter.apply_theme(Theme::Dark, &all_copy, &mut surface);
    assert_eq!(surface.label.as_deref(), Some("Sun"));
    assert_eq!(painter.label_for(Theme::Light), "Moon");
}
