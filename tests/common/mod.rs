mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from lienzo for tests
pub use lienzo::{
    Category, ContentError, ContentVariant, FilterSelection, ProjectCatalog, ProjectRecord,
    SectionId, SiteContent,
    models::{Color, ProjectLinks},
    navigation::{NAV_BAR_HEIGHT, PageLayout, SectionMetrics, Viewport},
};
