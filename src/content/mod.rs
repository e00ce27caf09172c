//! Site copy and project data, kept outside the code as TOML documents.
//!
//! Two variants ship with the crate; a deployment can point the binary at its
//! own document with `--content`.

mod error;

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    catalog::ProjectCatalog,
    models::{Color, FilterSelection, ProjectRecord, SectionId},
};

pub use error::ContentError;

const PORTFOLIO_TOML: &str = include_str!("../../content/portfolio.toml");
const EXHIBITION_TOML: &str = include_str!("../../content/exhibition.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ContentVariant {
    /// Generic developer portfolio.
    Portfolio,
    /// Art exhibition announcement.
    #[default]
    Exhibition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub meta: Meta,
    pub brand: Brand,
    pub hero: Hero,
    pub about: About,
    pub projects: ProjectsCopy,
    pub contact: Contact,
    pub footer: Footer,
    #[serde(rename = "nav")]
    pub navigation: Vec<NavItem>,
    #[serde(rename = "project", default)]
    pub project_records: Vec<ProjectRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub logo: String,
    pub accent: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub section: SectionId,
    pub label: String,
    pub accent: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub lines: Vec<String>,
    pub primary_cta: String,
    pub secondary_cta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    pub accent: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub title: String,
    pub description: String,
    pub accent: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub emblem: String,
    pub skills_heading: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Badge>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterLabels {
    pub all: String,
    pub web: String,
    pub mobile: String,
    pub featured: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsCopy {
    pub heading: String,
    pub intro: String,
    pub featured_badge: String,
    pub demo_label: String,
    pub repo_label: String,
    pub empty: String,
    pub cta_text: String,
    pub cta_button: String,
    pub filters: FilterLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoCard {
    pub title: String,
    pub value: String,
    pub subtitle: String,
    pub link: String,
    pub accent: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormCopy {
    pub heading: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submit: String,
    pub submitting: String,
    pub acknowledgement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub intro: String,
    pub social_heading: String,
    #[serde(default)]
    pub cards: Vec<InfoCard>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    pub form: FormCopy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub brand: String,
    pub tagline: String,
    pub made_with: String,
    pub credits: String,
}

impl SiteContent {
    pub fn builtin(variant: ContentVariant) -> Result<Self, ContentError> {
        let source = match variant {
            ContentVariant::Portfolio => PORTFOLIO_TOML,
            ContentVariant::Exhibition => EXHIBITION_TOML,
        };
        Self::from_toml_str(source)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_toml_str(&source)?;
        tracing::info!(?path, projects = content.project_records.len(), "loaded site content");
        Ok(content)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    pub fn to_toml_string(&self) -> Result<String, ContentError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks the invariants the page relies on: unique project ids and at
    /// most one navigation entry per section.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.meta.title.trim().is_empty() {
            return Err(ContentError::Empty("meta.title"));
        }
        if self.navigation.is_empty() {
            return Err(ContentError::Empty("nav"));
        }
        let mut seen = HashSet::new();
        for item in &self.navigation {
            if !seen.insert(item.section) {
                return Err(ContentError::DuplicateNavItem(item.section));
            }
        }
        ProjectCatalog::check_unique_ids(&self.project_records)
    }

    /// Builds the immutable catalog from the project entries.
    pub fn catalog(&self) -> Result<ProjectCatalog, ContentError> {
        ProjectCatalog::new(self.project_records.clone())
    }

    pub fn filter_label(&self, selection: FilterSelection) -> &str {
        let labels = &self.projects.filters;
        match selection {
            FilterSelection::All => &labels.all,
            FilterSelection::Web => &labels.web,
            FilterSelection::Mobile => &labels.mobile,
            FilterSelection::Featured => &labels.featured,
        }
    }

    pub fn nav_label(&self, section: SectionId) -> Option<&str> {
        self.navigation
            .iter()
            .find(|item| item.section == section)
            .map(|item| item.label.as_str())
    }
}
