use crate::models::SectionId;

/// Height of the fixed navigation bar; scroll targets land just below it.
pub const NAV_BAR_HEIGHT: f32 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Content heights each section needs regardless of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionMetrics {
    pub hero: f32,
    pub about: f32,
    pub projects_header: f32,
    pub projects_footer: f32,
    pub card_height: f32,
    pub card_gap: f32,
    pub empty_grid: f32,
    pub contact: f32,
    pub footer: f32,
}

impl Default for SectionMetrics {
    fn default() -> Self {
        Self {
            hero: 640.0,
            about: 1180.0,
            projects_header: 360.0,
            projects_footer: 200.0,
            card_height: 440.0,
            card_gap: 32.0,
            empty_grid: 120.0,
            contact: 1150.0,
            footer: 180.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub section: SectionId,
    pub top: f32,
    pub height: f32,
}

impl SectionSpan {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn contains(&self, offset: f32) -> bool {
        offset >= self.top && offset < self.bottom()
    }
}

/// Vertical placement of every section on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    viewport: Viewport,
    spans: Vec<SectionSpan>,
    footer_height: f32,
}

impl PageLayout {
    /// Grid columns for the projects gallery at a given width.
    pub fn columns_for(width: f32) -> usize {
        if width < 768.0 {
            1
        } else if width < 1024.0 {
            2
        } else {
            3
        }
    }

    /// Lays the four sections out top to bottom. Each one is at least a full
    /// viewport tall.
    pub fn compute(viewport: Viewport, metrics: &SectionMetrics, visible_cards: usize) -> Self {
        let columns = Self::columns_for(viewport.width);
        let grid = if visible_cards == 0 {
            metrics.empty_grid
        } else {
            let rows = visible_cards.div_ceil(columns) as f32;
            rows * metrics.card_height + (rows - 1.0) * metrics.card_gap
        };
        let projects = metrics.projects_header + grid + metrics.projects_footer;

        let heights = [
            (SectionId::Inicio, metrics.hero),
            (SectionId::SobreMi, metrics.about),
            (SectionId::Proyectos, projects),
            (SectionId::Contacto, metrics.contact),
        ];

        let mut top = 0.0;
        let spans = heights
            .into_iter()
            .map(|(section, intrinsic)| {
                let height = intrinsic.max(viewport.height);
                let span = SectionSpan {
                    section,
                    top,
                    height,
                };
                top += height;
                span
            })
            .collect();

        Self {
            viewport,
            spans,
            footer_height: metrics.footer,
        }
    }

    /// A layout from explicit spans, e.g. a page that omits some sections.
    pub fn from_spans(viewport: Viewport, mut spans: Vec<SectionSpan>, footer_height: f32) -> Self {
        spans.sort_by(|a, b| a.top.total_cmp(&b.top));
        Self {
            viewport,
            spans,
            footer_height,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn span(&self, section: SectionId) -> Option<&SectionSpan> {
        self.spans.iter().find(|span| span.section == section)
    }

    pub fn offset_of(&self, section: SectionId) -> Option<f32> {
        self.span(section).map(|span| span.top)
    }

    pub fn height_of(&self, section: SectionId) -> Option<f32> {
        self.span(section).map(|span| span.height)
    }

    pub fn footer_height(&self) -> f32 {
        self.footer_height
    }

    pub fn total_height(&self) -> f32 {
        self.spans.last().map(SectionSpan::bottom).unwrap_or(0.0) + self.footer_height
    }

    pub fn max_scroll(&self) -> f32 {
        (self.total_height() - self.viewport.height).max(0.0)
    }

    /// The section sitting just under the navigation bar at `offset`.
    pub fn section_at(&self, offset: f32) -> Option<SectionId> {
        let probe = offset + NAV_BAR_HEIGHT;
        self.spans
            .iter()
            .find(|span| span.contains(probe))
            .or_else(|| self.spans.last().filter(|span| probe >= span.bottom()))
            .map(|span| span.section)
    }
}
