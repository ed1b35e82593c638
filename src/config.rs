use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_ROOT: &str = "https://api.github.com";
pub const DEFAULT_RAW_ROOT: &str = "https://raw.githubusercontent.com";

/// Repository coordinates the galleries are pulled from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub owner: String,
    pub repo: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default = "default_api_root")]
    pub api_root: String,
    #[serde(default = "default_raw_root")]
    pub raw_root: String,
    #[serde(default = "default_logo_folder")]
    pub logo_folder: String,
    #[serde(default = "default_testimonial_folder")]
    pub testimonial_folder: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_api_root() -> String {
    DEFAULT_API_ROOT.to_string()
}

fn default_raw_root() -> String {
    DEFAULT_RAW_ROOT.to_string()
}

fn default_logo_folder() -> String {
    "logo".to_string()
}

fn default_testimonial_folder() -> String {
    "testimonial".to_string()
}

impl SiteConfig {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: branch.into(),
            api_root: default_api_root(),
            raw_root: default_raw_root(),
            logo_folder: default_logo_folder(),
            testimonial_folder: default_testimonial_folder(),
            request_timeout_secs: None,
        }
    }

    /// Reads `gallery.json` from the platform config directory.
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::default_path()?)
    }

    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = directories::ProjectDirs::from("com", "folio", "FolioGallery")
            .ok_or_else(|| anyhow::anyhow!("Failed to get project directories"))?;
        Ok(project_dirs.config_dir().join("gallery.json"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "No gallery config at {:?}; create it with at least \"owner\" and \"repo\"",
                path
            );
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid gallery config {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("owner", &self.owner), ("repo", &self.repo), ("branch", &self.branch)] {
            if value.is_empty() {
                anyhow::bail!("{} must not be empty", field);
            }
            if value.chars().any(char::is_whitespace) {
                anyhow::bail!("{} must not contain whitespace: {:?}", field, value);
            }
        }
        if self.owner.contains('/') || self.repo.contains('/') {
            anyhow::bail!("owner and repo must not contain '/'");
        }
        Ok(())
    }

    /// `{api_root}/repos/{owner}/{repo}/contents`
    pub fn api_base(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents",
            self.api_root.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }

    /// `{raw_root}/{owner}/{repo}/{branch}`
    pub fn raw_base(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.raw_root.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.branch
        )
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
