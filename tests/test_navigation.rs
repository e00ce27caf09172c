//! Integration tests for the navigation menu, scroll lock and page layout.
//!
//! Tests cover:
//! - Menu toggling and scroll lock release on every exit path
//! - Resolving section anchors to scroll offsets
//! - The scrolled bar threshold
//! - Layout ordering, grid columns and the active section

mod common;

use lienzo::navigation::{MenuState, NavigationState, ScrollLock, SectionSpan};

use common::*;

#[test]
fn test_toggle_twice_restores_scroll() {
    let lock = ScrollLock::new();
    let mut nav = NavigationState::new(lock.clone());

    nav.toggle();
    assert!(nav.is_menu_open());
    assert!(lock.is_locked());

    nav.toggle();
    assert!(matches!(nav.menu(), MenuState::Closed));
    assert!(!lock.is_locked());
}

#[test]
fn test_open_is_idempotent() {
    let lock = ScrollLock::new();
    let mut nav = NavigationState::new(lock.clone());

    nav.open();
    nav.open();
    assert_eq!(lock.holders(), 1);

    nav.close();
    nav.close();
    assert_eq!(lock.holders(), 0);
}

#[test]
fn test_drop_while_open_restores_scroll() {
    let lock = ScrollLock::new();
    {
        let mut nav = NavigationState::new(lock.clone());
        nav.open();
        assert!(lock.is_locked());
    }
    assert!(!lock.is_locked(), "teardown must release the scroll lock");
}

#[test]
fn test_lock_counts_independent_holders() {
    let lock = ScrollLock::new();
    let first = lock.acquire();
    let second = lock.acquire();

    drop(first);
    assert!(lock.is_locked());

    drop(second);
    assert!(!lock.is_locked());
}

#[test]
fn test_select_closes_menu_and_offsets_by_bar() {
    let lock = ScrollLock::new();
    let mut nav = NavigationState::new(lock.clone());
    let layout = desktop_layout(6);
    nav.open();

    let request = nav
        .select(SectionId::SobreMi, &layout)
        .expect("section is on the page");

    let top = layout.offset_of(SectionId::SobreMi).expect("about section");
    assert_eq!(request.section, SectionId::SobreMi);
    assert_eq!(request.offset, top - NAV_BAR_HEIGHT);
    assert!(!nav.is_menu_open());
    assert!(!lock.is_locked());
}

#[test]
fn test_select_clamps_to_page() {
    let mut nav = NavigationState::new(ScrollLock::new());
    let layout = desktop_layout(6);

    let top = nav
        .select(SectionId::Inicio, &layout)
        .expect("hero is on the page");
    assert_eq!(top.offset, 0.0);

    let contact = nav
        .select(SectionId::Contacto, &layout)
        .expect("contact is on the page");
    assert!(contact.offset <= layout.max_scroll());
}

#[test]
fn test_select_missing_target_still_closes() {
    let lock = ScrollLock::new();
    let mut nav = NavigationState::new(lock.clone());
    let viewport = Viewport::new(1280.0, 800.0);
    let layout = PageLayout::from_spans(
        viewport,
        vec![SectionSpan {
            section: SectionId::Inicio,
            top: 0.0,
            height: 800.0,
        }],
        180.0,
    );
    nav.open();

    assert!(nav.select(SectionId::Proyectos, &layout).is_none());
    assert!(!nav.is_menu_open());
    assert!(!lock.is_locked());
}

#[test]
fn test_scrolled_threshold() {
    let mut nav = NavigationState::new(ScrollLock::new());

    assert!(!nav.on_scroll(50.0));
    assert!(!nav.is_scrolled());

    assert!(nav.on_scroll(51.0));
    assert!(nav.is_scrolled());

    assert!(!nav.on_scroll(400.0));
    assert!(nav.on_scroll(0.0));
    assert!(!nav.is_scrolled());
}

#[test]
fn test_layout_is_monotonic() {
    let layout = desktop_layout(6);
    let order: Vec<SectionId> = layout.spans().iter().map(|span| span.section).collect();
    assert_eq!(order, SectionId::ALL.to_vec());

    for pair in layout.spans().windows(2) {
        assert_eq!(pair[0].bottom(), pair[1].top);
    }
    for span in layout.spans() {
        assert!(span.height >= layout.viewport().height);
    }
    assert_eq!(
        layout.total_height(),
        layout.spans().last().map(|span| span.bottom()).unwrap_or(0.0) + layout.footer_height()
    );
}

#[test]
fn test_grid_columns_follow_width() {
    assert_eq!(PageLayout::columns_for(375.0), 1);
    assert_eq!(PageLayout::columns_for(800.0), 2);
    assert_eq!(PageLayout::columns_for(1024.0), 3);

    // Fewer columns means more rows and a taller projects section.
    let metrics = SectionMetrics::default();
    let narrow = PageLayout::compute(Viewport::new(800.0, 800.0), &metrics, 6);
    let wide = PageLayout::compute(Viewport::new(1280.0, 800.0), &metrics, 6);
    assert!(narrow.height_of(SectionId::Proyectos) > wide.height_of(SectionId::Proyectos));
}

#[test]
fn test_filtering_shrinks_projects_section() {
    let all = desktop_layout(6);
    let mobile = desktop_layout(2);
    let none = desktop_layout(0);

    let height = |layout: &PageLayout| layout.height_of(SectionId::Proyectos).unwrap_or(0.0);
    assert!(height(&all) > height(&mobile));
    assert!(height(&mobile) > height(&none));
    assert!(all.offset_of(SectionId::Contacto) > mobile.offset_of(SectionId::Contacto));
}

#[test]
fn test_active_section_tracks_offset() {
    let layout = desktop_layout(6);
    let mut nav = NavigationState::new(ScrollLock::new());

    assert_eq!(nav.active_section(&layout), Some(SectionId::Inicio));

    let projects = layout
        .offset_of(SectionId::Proyectos)
        .expect("projects section");
    nav.on_scroll(projects - NAV_BAR_HEIGHT);
    assert_eq!(nav.active_section(&layout), Some(SectionId::Proyectos));

    nav.on_scroll(layout.max_scroll());
    assert_eq!(nav.active_section(&layout), Some(SectionId::Contacto));
}

#[test]
fn test_anchor_round_trip() {
    for section in SectionId::ALL {
        assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        assert_eq!(SectionId::from_anchor(&section.to_string()), Some(section));
    }
    assert_eq!(SectionId::from_anchor("#galeria"), None);
}
