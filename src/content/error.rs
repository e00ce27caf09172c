use std::path::PathBuf;

use thiserror::Error;

use crate::models::SectionId;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed content document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize content: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("project id {0} appears more than once")]
    DuplicateProjectId(u32),

    #[error("navigation lists section {0} more than once")]
    DuplicateNavItem(SectionId),

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("content field `{0}` must not be empty")]
    Empty(&'static str),
}
