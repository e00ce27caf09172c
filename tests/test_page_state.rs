//! Integration tests for the page-wide state shared by the sections.
//!
//! Tests cover:
//! - Window size taken from the configuration
//! - Entrances firing when a layout change moves a section into view
#![cfg(feature = "gui")]

mod common;

use std::time::Duration;

use lienzo::{SiteConfig, animation::Target, gui::AppState};

use common::*;

fn page_state(config: SiteConfig) -> anyhow::Result<AppState> {
    let content = SiteContent::builtin(ContentVariant::Exhibition)?;
    let catalog = content.catalog()?;
    Ok(AppState::new(config, content, catalog))
}

#[test]
fn test_layout_uses_configured_window() -> anyhow::Result<()> {
    let state = page_state(SiteConfig::new().with_window(800.0, 600.0))?;

    assert_eq!(state.layout.viewport(), Viewport::new(800.0, 600.0));
    assert_eq!(PageLayout::columns_for(state.layout.viewport().width), 2);
    Ok(())
}

#[test]
fn test_filter_change_fires_entrances_it_reveals() -> anyhow::Result<()> {
    let mut state = page_state(SiteConfig::new())?;

    // With all six cards the contact section sits below the trigger line.
    state.on_scroll(2500.0);
    let hidden = state.animations.pose(Target::ContactTitle, 0, state.now);
    assert_eq!(hidden.opacity, 0.0);

    // Two cards shrink the grid and pull the contact section up.
    state.set_visible_cards(2);
    let settled = state.now + Duration::from_secs(2);
    assert_eq!(
        state.animations.pose(Target::ContactTitle, 0, settled).opacity,
        1.0
    );
    Ok(())
}

#[test]
fn test_resize_fires_entrances_it_reveals() -> anyhow::Result<()> {
    let mut state = page_state(SiteConfig::new())?;

    // At 150 the trigger line sits at 790, just above the about section (800).
    state.on_scroll(150.0);
    assert_eq!(
        state.animations.pose(Target::AboutContent, 0, state.now).opacity,
        0.0
    );

    // A shorter window pulls the about section up to 640, above the new line (662).
    state.resize(Viewport::new(1280.0, 640.0));
    let settled = state.now + Duration::from_secs(2);
    assert!(state.animations.pose(Target::AboutContent, 0, settled).is_rest());
    Ok(())
}
