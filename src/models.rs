//! Data structures describing a Vite build manifest and the tags derived from it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Complete build manifest keyed by source module identifier.
///
/// Iteration follows the declaration order of the JSON document, which in turn decides the
/// order of the generated tags.
pub type Manifest = IndexMap<String, ManifestChunk>;

/// A single build output described by the manifest.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestChunk {
  /// Path of the compiled output file.
  pub file: String,
  /// Chunk is loaded directly by the page.
  #[serde(default)]
  pub is_entry: bool,
  /// Chunk is the root of a lazily loaded bundle.
  #[serde(default)]
  pub is_dynamic_entry: bool,
  /// Stylesheets emitted for the chunk.
  #[serde(default)]
  pub css: Vec<String>,
  /// Static assets (images, fonts, ...) referenced by the chunk.
  #[serde(default)]
  pub assets: Vec<String>,
  /// Manifest keys of statically imported chunks.
  #[serde(default)]
  pub imports: Vec<String>,
  /// Manifest keys of dynamically imported chunks.
  #[serde(default)]
  pub dynamic_imports: Vec<String>,
  /// Chunk name assigned by the bundler.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  /// Source module the chunk was built from.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub src: Option<String>,
}

impl ManifestChunk {
  /// Chunk with only an output file and every optional field left empty.
  pub fn new(file: impl Into<String>) -> Self {
    Self {
      file: file.into(),
      ..Self::default()
    }
  }

  /// Whether the chunk is delivered as a script on its own account.
  pub fn is_entry_point(&self) -> bool {
    self.is_entry || self.is_dynamic_entry
  }
}

/// Asset references to emit into an HTML document.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tags {
  /// Stylesheet paths.
  pub links: Vec<String>,
  /// Chunks to hint for early fetching.
  pub preloads: Vec<String>,
  /// Script paths, always a superset of `preloads`.
  pub scripts: Vec<String>,
}

impl Tags {
  /// True when no list holds any entry.
  pub fn is_empty(&self) -> bool {
    self.links.is_empty() && self.preloads.is_empty() && self.scripts.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_optional_fields_use_defaults() {
    let chunk: ManifestChunk = serde_json::from_str(r#"{"file": "assets/a.js"}"#).unwrap();

    assert_eq!(chunk, ManifestChunk::new("assets/a.js"));
    assert!(!chunk.is_entry_point());
  }

  #[test]
  fn reads_camel_case_fields() {
    let chunk: ManifestChunk = serde_json::from_str(
      r#"{
        "file": "assets/lazy.js",
        "isDynamicEntry": true,
        "dynamicImports": ["src/other.ts"],
        "src": "src/lazy.ts",
        "unknownField": 42
      }"#,
    )
    .unwrap();

    assert!(chunk.is_dynamic_entry);
    assert!(chunk.is_entry_point());
    assert_eq!(chunk.dynamic_imports, vec!["src/other.ts"]);
    assert_eq!(chunk.src.as_deref(), Some("src/lazy.ts"));
  }

  #[test]
  fn manifest_keeps_declaration_order() {
    let manifest: Manifest = serde_json::from_str(
      r#"{"z.ts": {"file": "z.js"}, "a.ts": {"file": "a.js"}, "m.ts": {"file": "m.js"}}"#,
    )
    .unwrap();

    let keys: Vec<&str> = manifest.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["z.ts", "a.ts", "m.ts"]);
  }
}
