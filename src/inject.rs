//! Splice rendered tags into an HTML document.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result, anyhow};
use regex::Regex;

use crate::render::RenderedTags;

fn head_close() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"(?i)</head\s*>").expect("invalid head regex"))
}

fn body_close() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"(?i)</body\s*>").expect("invalid body regex"))
}

/// Insert head markup before the first `</head>` and scripts before the last `</body>`.
pub fn inject_tags(html: &str, rendered: &RenderedTags) -> Result<String> {
  let head_at = head_close()
    .find(html)
    .map(|m| m.start())
    .ok_or_else(|| anyhow!("failed to locate </head> in HTML document"))?;
  let body_at = body_close()
    .find_iter(html)
    .last()
    .map(|m| m.start())
    .ok_or_else(|| anyhow!("failed to locate </body> in HTML document"))?;
  if body_at < head_at {
    return Err(anyhow!("</body> appears before </head> in HTML document"));
  }

  let head = rendered.head();
  let body = rendered.body();
  let mut output = String::with_capacity(html.len() + head.len() + body.len() + 2);
  output.push_str(&html[..head_at]);
  push_block(&mut output, &head);
  output.push_str(&html[head_at..body_at]);
  push_block(&mut output, &body);
  output.push_str(&html[body_at..]);
  Ok(output)
}

/// Rewrite an HTML file in place with the rendered tags injected.
pub fn inject_into_file(path: &Path, rendered: &RenderedTags) -> Result<()> {
  let html = fs::read_to_string(path)
    .with_context(|| format!("failed to read {}", path.display()))?;
  let updated =
    inject_tags(&html, rendered).with_context(|| format!("failed to patch {}", path.display()))?;
  fs::write(path, updated).with_context(|| format!("failed to write {}", path.display()))?;
  log::info!(
    "injected {} stylesheet, {} preload and {} script tags into {}",
    rendered.links.len(),
    rendered.preloads.len(),
    rendered.scripts.len(),
    path.display()
  );
  Ok(())
}

fn push_block(output: &mut String, block: &str) {
  if block.is_empty() {
    return;
  }
  output.push_str(block);
  output.push('\n');
}
