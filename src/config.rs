//! Configuration handling for the site

use crate::gateway::DEFAULT_ENDPOINT_BASE;
use crate::state::FormKind;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Form id used until a real Contact form id is configured
pub const CONTACT_ID_PLACEHOLDER: &str = "YOUR_FORMSPREE_CONTACT_ID";
/// Form id used until a real Booking form id is configured
pub const BOOKING_ID_PLACEHOLDER: &str = "YOUR_FORMSPREE_BOOKING_ID";

const DEFAULT_TIMEOUT_SECS: u64 = 15;

const ENV_CONTACT_ID: &str = "DJN_FORMSPREE_CONTACT_ID";
const ENV_BOOKING_ID: &str = "DJN_FORMSPREE_BOOKING_ID";
const ENV_ENDPOINT: &str = "DJN_FORMSPREE_ENDPOINT";

/// User configuration for the site
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Formspree id of the Contact form
    pub contact_form_id: Option<String>,
    /// Formspree id of the Booking form
    pub booking_form_id: Option<String>,
    /// Base URL of the form service
    pub endpoint_base: Option<String>,
    /// Per-request timeout for submissions
    pub request_timeout_secs: Option<u64>,
}

impl SiteConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "djnservicesllc", "djn-site")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Replace fields with non-empty values returned by `lookup`
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(id) = get(ENV_CONTACT_ID) {
            self.contact_form_id = Some(id);
        }
        if let Some(id) = get(ENV_BOOKING_ID) {
            self.booking_form_id = Some(id);
        }
        if let Some(base) = get(ENV_ENDPOINT) {
            self.endpoint_base = Some(base);
        }
    }

    /// Form id for `kind`, falling back to its placeholder
    pub fn form_id(&self, kind: FormKind) -> &str {
        match kind {
            FormKind::Contact => self
                .contact_form_id
                .as_deref()
                .unwrap_or(CONTACT_ID_PLACEHOLDER),
            FormKind::Booking => self
                .booking_form_id
                .as_deref()
                .unwrap_or(BOOKING_ID_PLACEHOLDER),
        }
    }

    pub fn endpoint_base(&self) -> &str {
        self.endpoint_base.as_deref().unwrap_or(DEFAULT_ENDPOINT_BASE)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Whether `kind` still posts to a placeholder id
    pub fn is_placeholder(&self, kind: FormKind) -> bool {
        matches!(
            self.form_id(kind),
            CONTACT_ID_PLACEHOLDER | BOOKING_ID_PLACEHOLDER
        )
    }
}
