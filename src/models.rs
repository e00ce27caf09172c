use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content::ContentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses `#rrggbb` or `rrggbb`, case-insensitive.
    pub fn from_hex_string(value: &str) -> Result<Self, ContentError> {
        let invalid = || ContentError::InvalidColor(value.to_string());
        let digits = value.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let packed = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Ok(Color::from(packed))
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        let r = ((value >> 16) & 0xFF) as u8;
        let g = ((value >> 8) & 0xFF) as u8;
        let b = (value & 0xFF) as u8;
        Color { r, g, b }
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        ((color.r as u32) << 16) | ((color.g as u32) << 8) | (color.b as u32)
    }
}

impl TryFrom<String> for Color {
    type Error = ContentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex_string(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}

/// Paint palette shared by both content variants.
pub mod palette {
    use super::Color;

    pub const PINK: Color = Color::rgb(0xff, 0x1e, 0x56);
    pub const BLUE: Color = Color::rgb(0x00, 0xd9, 0xff);
    pub const GREEN: Color = Color::rgb(0x7e, 0xd3, 0x21);
    pub const PURPLE: Color = Color::rgb(0xbd, 0x10, 0xe0);
    pub const ORANGE: Color = Color::rgb(0xf3, 0x9c, 0x12);
    pub const GOLD: Color = Color::rgb(0xff, 0xd7, 0x00);
    pub const DARK_900: Color = Color::rgb(0x0a, 0x0a, 0x0a);
    pub const DARK_800: Color = Color::rgb(0x1a, 0x1a, 0x1a);
    pub const DEEP_BLUE: Color = Color::rgb(0x0b, 0x1a, 0x4a);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Mobile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub demo: String,
    pub repo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    /// Gradient endpoints for the card banner.
    pub accent: (Color, Color),
    pub links: ProjectLinks,
}

/// Which slice of the catalog the projects grid shows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FilterSelection {
    #[default]
    #[value(alias = "todos")]
    All,
    Web,
    Mobile,
    #[value(alias = "destacados")]
    Featured,
}

impl FilterSelection {
    /// Button order in the filter row.
    pub const ALL: [FilterSelection; 4] = [
        FilterSelection::All,
        FilterSelection::Web,
        FilterSelection::Mobile,
        FilterSelection::Featured,
    ];

    pub fn matches(self, record: &ProjectRecord) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Featured => record.featured,
            FilterSelection::Web => record.category == Category::Web,
            FilterSelection::Mobile => record.category == Category::Mobile,
        }
    }
}

/// The four scroll targets of the page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionId {
    #[serde(rename = "inicio")]
    Inicio,
    #[serde(rename = "sobre-mi")]
    SobreMi,
    #[serde(rename = "proyectos")]
    Proyectos,
    #[serde(rename = "contacto")]
    Contacto,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Inicio,
        SectionId::SobreMi,
        SectionId::Proyectos,
        SectionId::Contacto,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Inicio => "inicio",
            SectionId::SobreMi => "sobre-mi",
            SectionId::Proyectos => "proyectos",
            SectionId::Contacto => "contacto",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        SectionId::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.anchor())
    }
}
