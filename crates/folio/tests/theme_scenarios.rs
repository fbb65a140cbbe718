//! Integration tests for theme resolution through the composed shell.
//!
//! The host color scheme is always mocked so results do not depend on the
//! machine running the tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use folio::document::PdfAction;
use folio::ui::{UiAction, UiState};
use folio::{Providers, Shell, ShellConfig};
use folio_render::{
    ColorSchemeQuery, DocumentRoot, EffectiveTheme, FixedColorScheme, SharedColorScheme, ThemePreference,
};

fn compose(theme: ThemePreference, host: Option<bool>) -> Providers {
    Providers::compose(
        UiState {
            theme,
            ..UiState::default()
        },
        DocumentRoot::new("en"),
        host.map(|dark| Box::new(FixedColorScheme::new(dark)) as Box<dyn ColorSchemeQuery>),
    )
}

fn root_class(providers: &Providers) -> Option<EffectiveTheme> {
    providers.root().theme_class()
}

// ============================================================================
// Resolution scenarios
// ============================================================================

#[test]
fn dark_preference_sets_dark_class() {
    let providers = compose(ThemePreference::Dark, Some(false));
    assert_eq!(root_class(&providers), Some(EffectiveTheme::Dark));
}

#[test]
fn light_preference_sets_light_class() {
    let providers = compose(ThemePreference::Light, Some(true));
    assert_eq!(root_class(&providers), Some(EffectiveTheme::Light));
}

#[test]
fn auto_follows_dark_host() {
    let providers = compose(ThemePreference::Auto, Some(true));
    assert_eq!(root_class(&providers), Some(EffectiveTheme::Dark));
}

#[test]
fn auto_follows_light_host() {
    let providers = compose(ThemePreference::Auto, Some(false));
    assert_eq!(root_class(&providers), Some(EffectiveTheme::Light));
}

#[test]
fn auto_without_host_falls_back_to_light() {
    let providers = compose(ThemePreference::Auto, None);
    assert_eq!(root_class(&providers), Some(EffectiveTheme::Light));
    assert!(!providers.theme().has_host());
}

#[test]
fn mid_session_change_never_shows_both_or_neither() {
    let providers = compose(ThemePreference::Light, Some(false));
    let root = providers.root().clone();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let observer = {
        let seen = Rc::clone(&seen);
        providers.ui().subscribe(move |_| {
            seen.borrow_mut()
                .push((root.theme_token_count(), root.theme_class()));
        })
    };

    providers
        .ui()
        .dispatch(UiAction::SetTheme(ThemePreference::Dark));
    drop(observer);

    assert_eq!(*seen.borrow(), vec![(1, Some(EffectiveTheme::Dark))]);
    assert_eq!(root_class(&providers), Some(EffectiveTheme::Dark));
}

// ============================================================================
// Idempotence and pass accounting
// ============================================================================

#[test]
fn repeated_sync_leaves_root_unchanged() {
    let providers = compose(ThemePreference::Auto, Some(true));
    let before = providers.root().classes().to_string();

    providers.theme().sync();
    providers.theme().sync();

    assert_eq!(providers.root().classes().to_string(), before);
    assert_eq!(providers.root().theme_token_count(), 1);
}

#[test]
fn unrelated_ui_changes_do_not_trigger_passes() {
    let providers = compose(ThemePreference::Dark, Some(false));
    let passes = providers.theme().passes();

    let ui = providers.ui();
    ui.dispatch(UiAction::ToggleSidebar);
    ui.dispatch(UiAction::ZoomIn);
    ui.dispatch(UiAction::SetTheme(ThemePreference::Dark));

    assert_eq!(providers.theme().passes(), passes);
}

#[test]
fn cycling_walks_every_preference() {
    let host = SharedColorScheme::new(true);
    let providers = Providers::compose(
        UiState {
            theme: ThemePreference::Light,
            ..UiState::default()
        },
        DocumentRoot::new("en"),
        Some(Box::new(host.clone())),
    );

    let mut classes = Vec::new();
    for _ in 0..3 {
        providers.ui().dispatch(UiAction::CycleTheme);
        classes.push((providers.theme().preference(), root_class(&providers)));
    }

    assert_eq!(
        classes,
        vec![
            (ThemePreference::Dark, Some(EffectiveTheme::Dark)),
            (ThemePreference::Auto, Some(EffectiveTheme::Dark)),
            (ThemePreference::Light, Some(EffectiveTheme::Light)),
        ]
    );
}

// ============================================================================
// Host changes
// ============================================================================

#[test]
fn host_change_reresolves_auto() {
    let host = SharedColorScheme::new(false);
    let providers = Providers::compose(
        UiState::default(),
        DocumentRoot::new("en"),
        Some(Box::new(host.clone())),
    );
    assert_eq!(root_class(&providers), Some(EffectiveTheme::Light));

    host.set_dark(true);
    assert_eq!(providers.theme().host_changed(), Some(EffectiveTheme::Dark));
    assert_eq!(root_class(&providers), Some(EffectiveTheme::Dark));
}

#[test]
fn host_change_is_ignored_for_fixed_preferences() {
    let host = SharedColorScheme::new(false);
    let providers = Providers::compose(
        UiState {
            theme: ThemePreference::Light,
            ..UiState::default()
        },
        DocumentRoot::new("en"),
        Some(Box::new(host.clone())),
    );

    host.set_dark(true);
    assert_eq!(providers.theme().host_changed(), None);
    assert_eq!(root_class(&providers), Some(EffectiveTheme::Light));
    assert_eq!(host.query_count(), 0);
}

// ============================================================================
// Composition order
// ============================================================================

#[test]
fn document_ui_renders_under_resolved_theme() {
    let providers = compose(ThemePreference::Auto, Some(true));

    let seen = providers.render(|scope| {
        scope.use_pdf().dispatch(PdfAction::Load {
            file_name: "report.pdf".into(),
            page_count: 3,
        });
        let pages = scope.use_pdf().select(|s| s.page_count());
        (pages, scope.root().theme_class())
    });

    assert_eq!(seen, (3, Some(EffectiveTheme::Dark)));
}

#[test]
fn shell_page_carries_single_theme_class() {
    let mut config = ShellConfig::default();
    config.initial.theme = ThemePreference::Auto;
    let mut shell = Shell::new(config, Some(Box::new(FixedColorScheme::dark()))).unwrap();

    shell
        .ui()
        .dispatch(UiAction::SetTheme(ThemePreference::Light));
    let html = shell
        .render(|scope| format!("<main data-theme=\"{}\"></main>", scope.root_theme()))
        .unwrap();

    assert!(html.contains(r#"<html lang="en" class="font-inter light">"#));
    assert!(html.contains(r#"<main data-theme="light"></main>"#));
    assert!(!html.contains("font-inter dark"));
}

// ============================================================================
// Root access from outside the coordinator
// ============================================================================

#[test]
fn child_can_read_root_then_change_theme() {
    let providers = compose(ThemePreference::Light, Some(false));

    let seen = providers.render(|scope| {
        let root = scope.root();
        let classes = root.classes();
        scope
            .use_ui()
            .dispatch(UiAction::SetTheme(ThemePreference::Dark));
        (classes.to_string(), root.theme_class())
    });

    assert_eq!(seen, ("light".to_string(), Some(EffectiveTheme::Dark)));
}

#[test]
fn root_copies_cannot_override_the_coordinator() {
    let providers = compose(ThemePreference::Light, Some(false));

    let mut copy = providers.root().snapshot();
    copy.apply_theme(EffectiveTheme::Dark);
    providers
        .ui()
        .dispatch(UiAction::SetTheme(ThemePreference::Light));

    assert_eq!(root_class(&providers), Some(EffectiveTheme::Light));
    assert_eq!(
        root_class(&providers),
        Some(providers.theme().effective_theme())
    );
}

// ============================================================================
// Notifications
// ============================================================================

#[test]
fn long_lived_shell_does_not_accumulate_expired_toasts() {
    let mut shell = Shell::new(ShellConfig::default(), None).unwrap();
    let start = Instant::now();
    for i in 0..1000 {
        shell.toaster_mut().show_at(
            folio::Severity::Success,
            format!("Page {} exported", i),
            Duration::from_millis(4000),
            start,
        );
    }

    let later = start + Duration::from_secs(60);
    for _ in 0..3 {
        shell.render_at(later, |_| String::new()).unwrap();
    }

    assert!(shell.toaster().is_empty());
}
