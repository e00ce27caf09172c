pub mod animation;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod content;
pub mod models;
pub mod navigation;

pub use catalog::ProjectCatalog;
pub use config::{ContentSource, SiteConfig};
pub use content::{ContentError, ContentVariant, SiteContent};
pub use models::{Category, FilterSelection, ProjectRecord, SectionId};

#[cfg(feature = "gui")]
pub mod gui;
