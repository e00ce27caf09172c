use std::time::Instant;

use time::OffsetDateTime;

use crate::{
    animation::{ScrollAnimationBindings, Target, page_bindings},
    catalog::ProjectCatalog,
    config::SiteConfig,
    content::SiteContent,
    models::FilterSelection,
    navigation::{PageLayout, ScrollLock, SectionMetrics, Viewport},
};

/// Page-wide state every section reads.
#[derive(Debug)]
pub struct AppState {
    pub content: SiteContent,
    pub catalog: ProjectCatalog,
    pub config: SiteConfig,
    pub metrics: SectionMetrics,
    pub layout: PageLayout,
    pub animations: ScrollAnimationBindings,
    pub scroll_lock: ScrollLock,
    pub visible_cards: usize,
    /// Last offset reported by the page scrollable.
    pub scroll_offset: f32,
    /// Clock used for sampling animations; advanced on every frame.
    pub now: Instant,
    pub year: i32,
}

impl AppState {
    pub fn new(config: SiteConfig, content: SiteContent, catalog: ProjectCatalog) -> Self {
        let visible_cards = catalog.count(FilterSelection::default());
        let metrics = SectionMetrics::default();
        let layout = PageLayout::compute(config.window, &metrics, visible_cards);

        let mut animations = page_bindings().with_motion(config.motion);
        animations.set_items(Target::ProjectCards, visible_cards);
        animations.set_items(Target::ProjectFilters, FilterSelection::ALL.len());
        animations.set_items(Target::Skills, content.about.skills.len());
        animations.set_items(Target::ContactCards, content.contact.cards.len());
        animations.set_items(Target::SocialLinks, content.contact.social.len());

        let year = OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .year();

        Self {
            content,
            catalog,
            config,
            metrics,
            layout,
            animations,
            scroll_lock: ScrollLock::new(),
            visible_cards,
            scroll_offset: 0.0,
            now: Instant::now(),
            year,
        }
    }

    /// Records the page offset and starts the entrances it has reached.
    pub fn on_scroll(&mut self, offset: f32) {
        self.scroll_offset = offset;
        self.fire_entrances();
    }

    /// Recomputes the layout. Sections that moved above their trigger line
    /// start their entrance without waiting for the next scroll.
    pub fn resize(&mut self, viewport: Viewport) {
        self.layout = PageLayout::compute(viewport, &self.metrics, self.visible_cards);
        self.fire_entrances();
    }

    pub fn set_visible_cards(&mut self, visible_cards: usize) {
        self.visible_cards = visible_cards;
        self.animations.set_items(Target::ProjectCards, visible_cards);
        self.resize(self.layout.viewport());
    }

    fn fire_entrances(&mut self) {
        self.now = Instant::now();
        self.animations.on_scroll(self.scroll_offset, &self.layout, self.now);
    }
}
