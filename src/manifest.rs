//! Loading the manifest emitted by `vite build`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::TagsConfig;
use crate::models::Manifest;

/// Manifest location used by Vite releases before 5.0.
pub const LEGACY_MANIFEST_FILE: &str = "manifest.json";

/// Deserialise a manifest from its JSON text.
pub fn manifest_from_str(content: &str) -> Result<Manifest> {
  serde_json::from_str(content).context("failed to parse vite manifest JSON")
}

/// Load a manifest from disk.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
  let content = fs::read_to_string(path)
    .with_context(|| format!("manifest not found at {}", path.display()))?;
  let manifest = manifest_from_str(&content)
    .with_context(|| format!("invalid manifest at {}", path.display()))?;
  log::debug!(
    "loaded {} chunks from {}",
    manifest.len(),
    path.display()
  );
  Ok(manifest)
}

/// Determine which manifest file to read for the project.
///
/// The configured location wins when it exists. Otherwise the legacy `dist/manifest.json`
/// is used if present, and the configured path is returned unchanged when neither exists so
/// the subsequent load reports it.
pub fn resolve_manifest_path(project_dir: &Path, config: &TagsConfig) -> PathBuf {
  let configured = config.manifest_path(project_dir);
  if configured.is_file() {
    return configured;
  }

  let legacy = config.dist_path(project_dir).join(LEGACY_MANIFEST_FILE);
  if legacy.is_file() {
    log::debug!("using legacy manifest location {}", legacy.display());
    return legacy;
  }

  configured
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  const SAMPLE: &str = r#"{
    "src/main.ts": {
      "file": "assets/main-4f2a.js",
      "src": "src/main.ts",
      "isEntry": true,
      "css": ["assets/main-91bc.css"],
      "dynamicImports": ["src/lazy.ts"]
    },
    "src/lazy.ts": {
      "file": "assets/lazy-07de.js",
      "isDynamicEntry": true
    }
  }"#;

  #[test]
  fn parses_manifest_text() {
    let manifest = manifest_from_str(SAMPLE).unwrap();

    assert_eq!(manifest.len(), 2);
    let main = &manifest["src/main.ts"];
    assert!(main.is_entry);
    assert_eq!(main.dynamic_imports, vec!["src/lazy.ts"]);
  }

  #[test]
  fn rejects_chunks_without_file() {
    let err = manifest_from_str(r#"{"src/a.ts": {"isEntry": true}}"#).unwrap_err();
    assert!(err.to_string().contains("failed to parse vite manifest JSON"));
  }

  #[test]
  fn load_reports_missing_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("manifest.json");

    let err = load_manifest(&path).unwrap_err();
    assert!(err.to_string().contains("manifest not found"));
  }

  #[test]
  fn load_reads_manifest_from_disk() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("manifest.json");
    fs::write(&path, SAMPLE).unwrap();

    let manifest = load_manifest(&path).unwrap();
    let keys: Vec<&String> = manifest.keys().collect();
    assert_eq!(keys, vec!["src/main.ts", "src/lazy.ts"]);
  }

  #[test]
  fn prefers_configured_manifest_location() {
    let temp = tempdir().unwrap();
    let config = TagsConfig::default();
    let vite_dir = temp.path().join("dist").join(".vite");
    fs::create_dir_all(&vite_dir).unwrap();
    fs::write(vite_dir.join("manifest.json"), "{}").unwrap();
    fs::write(temp.path().join("dist").join(LEGACY_MANIFEST_FILE), "{}").unwrap();

    assert_eq!(
      resolve_manifest_path(temp.path(), &config),
      config.manifest_path(temp.path())
    );
  }

  #[test]
  fn falls_back_to_legacy_manifest_location() {
    let temp = tempdir().unwrap();
    let config = TagsConfig::default();
    let dist = temp.path().join("dist");
    fs::create_dir_all(&dist).unwrap();
    fs::write(dist.join(LEGACY_MANIFEST_FILE), "{}").unwrap();

    assert_eq!(
      resolve_manifest_path(temp.path(), &config),
      dist.join(LEGACY_MANIFEST_FILE)
    );
  }

  #[test]
  fn returns_configured_path_when_nothing_exists() {
    let temp = tempdir().unwrap();
    let config = TagsConfig::default();

    assert_eq!(
      resolve_manifest_path(temp.path(), &config),
      config.manifest_path(temp.path())
    );
  }
}
