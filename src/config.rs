//! Project configuration describing where the build output and manifest live.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File searched for when discovering configuration in a project directory.
pub const DEFAULT_CONFIG_FILE: &str = "vite-tags.config.json";

/// Discoverable configuration for locating the manifest and rendering tags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TagsConfig {
    /// Build output directory relative to the project root.
    pub dist_dir: String,
    /// Manifest location relative to `dist_dir`.
    pub manifest_file: String,
    /// URL prefix prepended to every emitted asset path.
    pub base: String,
    /// HTML document that receives injected tags, relative to `dist_dir`.
    pub index_html_file: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            dist_dir: "dist".into(),
            manifest_file: ".vite/manifest.json".into(),
            base: "/".into(),
            index_html_file: "index.html".into(),
        }
    }
}

impl TagsConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// A missing or unparsable file falls back to the defaults, which match a stock Vite
    /// build with `build.manifest` enabled.
    pub fn discover(project_dir: &Path) -> Self {
        let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
        match Self::from_path(&candidate) {
            Some(config) => config,
            None => {
                log::debug!(
                    "no usable {} in {}, using defaults",
                    DEFAULT_CONFIG_FILE,
                    project_dir.display()
                );
                Self::default()
            }
        }
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Absolute build output directory for the project.
    pub fn dist_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.dist_dir)
    }

    /// Configured manifest path inside the build output.
    pub fn manifest_path(&self, project_dir: &Path) -> PathBuf {
        self.dist_path(project_dir).join(&self.manifest_file)
    }

    /// HTML document path inside the build output.
    pub fn index_html_path(&self, project_dir: &Path) -> PathBuf {
        self.dist_path(project_dir).join(&self.index_html_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        assert_eq!(TagsConfig::discover(temp.path()), TagsConfig::default());
    }

    #[test]
    fn discover_ignores_invalid_json() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();

        assert_eq!(TagsConfig::discover(temp.path()), TagsConfig::default());
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            r#"{"dist_dir": "build", "base": "/static/"}"#,
        )
        .unwrap();

        let config = TagsConfig::discover(temp.path());
        assert_eq!(config.dist_dir, "build");
        assert_eq!(config.base, "/static/");
        assert_eq!(config.manifest_file, ".vite/manifest.json");
        assert_eq!(
            config.manifest_path(Path::new("app")),
            Path::new("app").join("build").join(".vite/manifest.json")
        );
        assert_eq!(
            config.index_html_path(Path::new("app")),
            Path::new("app").join("build").join("index.html")
        );
    }
}
