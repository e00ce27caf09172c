use std::{path::PathBuf, time::Duration};

use anyhow::Context;

use crate::{
    contact::DEFAULT_SUBMIT_DELAY,
    content::{ContentVariant, SiteContent},
    navigation::{NAV_BAR_HEIGHT, SCROLLED_THRESHOLD, Viewport},
};

/// Where the site copy comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Builtin(ContentVariant),
    File(PathBuf),
}

impl Default for ContentSource {
    fn default() -> Self {
        ContentSource::Builtin(ContentVariant::default())
    }
}

/// Runtime settings for one page session.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub content: ContentSource,
    pub submit_delay: Duration,
    pub nav_offset: f32,
    pub scrolled_threshold: f32,
    pub window: Viewport,
    pub motion: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content: ContentSource::default(),
            submit_delay: DEFAULT_SUBMIT_DELAY,
            nav_offset: NAV_BAR_HEIGHT,
            scrolled_threshold: SCROLLED_THRESHOLD,
            window: Viewport::default(),
            motion: true,
        }
    }
}

impl SiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, content: ContentSource) -> Self {
        self.content = content;
        self
    }

    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn with_window(mut self, width: f32, height: f32) -> Self {
        self.window = Viewport::new(width, height);
        self
    }

    pub fn with_motion(mut self, motion: bool) -> Self {
        self.motion = motion;
        self
    }

    pub fn load_content(&self) -> anyhow::Result<SiteContent> {
        match &self.content {
            ContentSource::Builtin(variant) => SiteContent::builtin(*variant)
                .with_context(|| format!("Built-in {:?} content is invalid", variant)),
            ContentSource::File(path) => SiteContent::load(path)
                .with_context(|| format!("Failed to load content from {:?}", path)),
        }
    }
}
