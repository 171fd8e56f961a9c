//! UI tuning persistence.
//!
//! Stores input and layout tuning (drag threshold, tooltip switch, checker
//! alpha) as JSON at `~/.local/share/gump-ui/config.json`. Loaded once on
//! startup; `save` writes the whole file so it is always current.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file path.
fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gump-ui")
        .join("config.json")
}

/// Persisted UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Manhattan distance the pointer must travel before a press becomes a drag.
    #[serde(default = "default_drag_distance")]
    pub min_drag_distance: i32,
    /// Whether `tooltip` / `itemproperty` layout commands attach anything.
    #[serde(default = "default_true")]
    pub tooltips_enabled: bool,
    /// Alpha applied to controls covered by a `checkertrans` region.
    #[serde(default = "default_checker_alpha")]
    pub checker_alpha: f32,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_drag_distance() -> i32 { 4 }
fn default_true() -> bool { true }
fn default_checker_alpha() -> f32 { 0.6 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            min_drag_distance: default_drag_distance(),
            tooltips_enabled: true,
            checker_alpha: default_checker_alpha(),
            path: default_path(),
        }
    }
}

impl UiConfig {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&default_path()).unwrap_or_else(|e| {
            tracing::debug!("Using default UI config: {}", e);
            Self::default()
        })
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&contents)?;
        config.path = path.to_path_buf();
        Ok(config)
    }

    /// Redirect where `save` writes.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist current config to disk.
    pub fn save(&self) -> crate::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
