//! Application configuration.
//!
//! Everything the peripheral layers need - workspace layout, the pandoc
//! binary, timeouts, allowed origins for a fronting web layer - lives in
//! one [`AppConfig`] value passed at construction time. Directory
//! creation is an explicit call, never a load-time side effect.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::utils::error::{ConversionError, ConversionResult};

/// Origins a fronting web layer should accept by default.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:5173",
    "http://localhost:8080",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
    "http://127.0.0.1:8080",
];

/// Runtime configuration for the peripheral layers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root directory for intermediate and output files
    pub workspace_dir: PathBuf,
    /// Name or path of the pandoc binary
    pub pandoc_bin: String,
    /// Deadline for the `pandoc --version` availability probe
    pub probe_timeout_secs: u64,
    /// Deadline for one markdown -> DOCX conversion
    pub convert_timeout_secs: u64,
    /// Origins a fronting web layer should accept
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            workspace_dir: PathBuf::from("uploads"),
            pandoc_bin: "pandoc".to_string(),
            probe_timeout_secs: 5,
            convert_timeout_secs: 30,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl AppConfig {
    /// Build a configuration from defaults plus `M2D_*` environment
    /// overrides.
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();
        if let Ok(dir) = std::env::var("M2D_WORKSPACE_DIR") {
            config.workspace_dir = PathBuf::from(dir);
        }
        if let Ok(bin) = std::env::var("M2D_PANDOC_BIN") {
            config.pandoc_bin = bin;
        }
        config
    }

    /// Load a configuration from a TOML file. Missing keys fall back to
    /// their defaults.
    pub fn from_toml_file(path: &Path) -> ConversionResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ConversionError::invalid(format!("bad config file: {}", e)))
    }

    /// Directory for intermediate markdown files.
    pub fn md_dir(&self) -> PathBuf {
        self.workspace_dir.join("md")
    }

    /// Directory for converted DOCX files.
    pub fn docx_dir(&self) -> PathBuf {
        self.workspace_dir.join("docx")
    }

    /// Create the workspace directories if they do not exist.
    pub fn ensure_dirs(&self) -> ConversionResult<()> {
        fs::create_dir_all(self.md_dir())?;
        fs::create_dir_all(self.docx_dir())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_layout() {
        let config = AppConfig::default();
        assert_eq!(config.md_dir(), PathBuf::from("uploads/md"));
        assert_eq!(config.docx_dir(), PathBuf::from("uploads/docx"));
        assert_eq!(config.pandoc_bin, "pandoc");
        assert_eq!(config.probe_timeout_secs, 5);
        assert_eq!(config.convert_timeout_secs, 30);
        assert_eq!(config.allowed_origins.len(), 6);
    }

    #[test]
    fn test_toml_overrides() {
        let parsed: AppConfig = toml::from_str(
            "workspace_dir = \"/tmp/m2d\"\npandoc_bin = \"/opt/pandoc\"\nconvert_timeout_secs = 60\n",
        )
        .unwrap();
        assert_eq!(parsed.workspace_dir, PathBuf::from("/tmp/m2d"));
        assert_eq!(parsed.pandoc_bin, "/opt/pandoc");
        assert_eq!(parsed.convert_timeout_secs, 60);
        // untouched keys keep their defaults
        assert_eq!(parsed.probe_timeout_secs, 5);
    }
}
