use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    #[serde(rename = "file")]
    File,
    #[serde(rename = "dir")]
    Directory,
    /// symlinks, submodules and anything else the contents API reports
    #[serde(other)]
    Other,
}

/// One item of a remote folder listing as returned by the contents API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RemoteEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl RemoteEntry {
    pub fn file(name: impl Into<String>, download_url: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            download_url: download_url.map(str::to_string),
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            download_url: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GalleryKind {
    Logo,
    Testimonial,
}

impl GalleryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryKind::Logo => "logo",
            GalleryKind::Testimonial => "testimonial",
        }
    }
}

impl fmt::Display for GalleryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a single gallery container.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum GalleryState {
    Idle,
    Loading,
    Rendered { count: usize },
    Empty,
    Error { message: String },
}

impl GalleryState {
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            GalleryState::Rendered { .. } | GalleryState::Empty | GalleryState::Error { .. }
        )
    }
}
