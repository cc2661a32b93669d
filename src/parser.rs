//! Classify manifest chunks into stylesheet, preload and script references.

use indexmap::IndexSet;

use crate::models::{Manifest, Tags};

/// Compute the tags required to deliver every entry chunk of `manifest`.
///
/// Each chunk is visited once in manifest order. Entry chunks contribute their own file to
/// `scripts`, every chunk contributes its stylesheets to `links`, and each `imports` or
/// `dynamicImports` key is resolved one hop into both `preloads` and `scripts`. Because every
/// chunk is also a top-level manifest key, chains of imports are covered transitively without
/// recursing, so cycles need no bookkeeping. Keys missing from the manifest are skipped.
pub fn parse(manifest: &Manifest) -> Tags {
  let mut links: IndexSet<&str> = IndexSet::new();
  let mut preloads: IndexSet<&str> = IndexSet::new();
  let mut scripts: IndexSet<&str> = IndexSet::new();

  for chunk in manifest.values() {
    if chunk.is_entry_point() {
      scripts.insert(&chunk.file);
    }

    for stylesheet in &chunk.css {
      links.insert(stylesheet);
    }

    let imported = chunk
      .imports
      .iter()
      .chain(&chunk.dynamic_imports)
      .filter_map(|key| manifest.get(key));
    for target in imported {
      preloads.insert(&target.file);
      scripts.insert(&target.file);
    }
  }

  Tags {
    links: into_owned(links),
    preloads: into_owned(preloads),
    scripts: into_owned(scripts),
  }
}

fn into_owned(set: IndexSet<&str>) -> Vec<String> {
  set.into_iter().map(str::to_owned).collect()
}
