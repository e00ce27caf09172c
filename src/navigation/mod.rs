//! Navigation bar state: scroll position, the full-screen menu, and the
//! mapping from section anchors to scroll offsets.

mod layout;
mod scroll_lock;

pub use layout::{NAV_BAR_HEIGHT, PageLayout, SectionMetrics, SectionSpan, Viewport};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};

use crate::models::SectionId;

/// Offset past which the bar switches to its opaque style.
pub const SCROLLED_THRESHOLD: f32 = 50.0;

/// The menu overlay. While open it holds the page's scroll lock, so leaving
/// this state by any path (including drop) restores scrolling.
#[derive(Debug, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open(ScrollLockGuard),
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open(_))
    }
}

/// Where the page should scroll after a navigation click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub section: SectionId,
    pub offset: f32,
}

#[derive(Debug)]
pub struct NavigationState {
    lock: ScrollLock,
    menu: MenuState,
    scroll_offset: f32,
    scrolled: bool,
    scrolled_threshold: f32,
    nav_offset: f32,
}

impl NavigationState {
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            lock,
            menu: MenuState::Closed,
            scroll_offset: 0.0,
            scrolled: false,
            scrolled_threshold: SCROLLED_THRESHOLD,
            nav_offset: NAV_BAR_HEIGHT,
        }
    }

    pub fn with_scrolled_threshold(mut self, threshold: f32) -> Self {
        self.scrolled_threshold = threshold;
        self
    }

    pub fn with_nav_offset(mut self, offset: f32) -> Self {
        self.nav_offset = offset;
        self
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.lock
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn toggle(&mut self) {
        if self.menu.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        if !self.menu.is_open() {
            self.menu = MenuState::Open(self.lock.acquire());
            tracing::debug!("menu opened");
        }
    }

    pub fn close(&mut self) {
        if self.menu.is_open() {
            // Replacing the state drops the guard.
            self.menu = MenuState::Closed;
            tracing::debug!("menu closed");
        }
    }

    /// Closes the menu and resolves `target` to a scroll offset. A target the
    /// layout does not know is not an error; the menu still closes.
    pub fn select(&mut self, target: SectionId, layout: &PageLayout) -> Option<ScrollRequest> {
        self.close();
        let Some(top) = layout.offset_of(target) else {
            tracing::debug!(%target, "navigation target not on page");
            return None;
        };
        let offset = (top - self.nav_offset).clamp(0.0, layout.max_scroll());
        tracing::debug!(%target, offset, "scrolling to section");
        Some(ScrollRequest {
            section: target,
            offset,
        })
    }

    /// Records a new scroll position. Returns `true` when the bar style flips.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        self.scroll_offset = offset.max(0.0);
        let scrolled = self.scroll_offset > self.scrolled_threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active_section(&self, layout: &PageLayout) -> Option<SectionId> {
        layout.section_at(self.scroll_offset)
    }
}
