//! Render tags into HTML markup.

use crate::models::Tags;

/// Markup lines for each tag list, in the order they were produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderedTags {
    /// `<link rel="stylesheet">` elements.
    pub links: Vec<String>,
    /// `<link rel="modulepreload">` elements.
    pub preloads: Vec<String>,
    /// `<script type="module">` elements.
    pub scripts: Vec<String>,
}

impl RenderedTags {
    /// Markup belonging in the document head: stylesheets followed by preload hints.
    pub fn head(&self) -> String {
        self.links
            .iter()
            .chain(&self.preloads)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Markup belonging at the end of the document body.
    pub fn body(&self) -> String {
        self.scripts.join("\n")
    }
}

/// Render every tag list with `base` prefixed to each asset path.
pub fn render_tags(tags: &Tags, base: &str) -> RenderedTags {
    let url = |path: &String| escape_attribute(&join_base(base, path));

    RenderedTags {
        links: tags
            .links
            .iter()
            .map(|path| format!("<link rel=\"stylesheet\" href=\"{}\">", url(path)))
            .collect(),
        preloads: tags
            .preloads
            .iter()
            .map(|path| format!("<link rel=\"modulepreload\" href=\"{}\">", url(path)))
            .collect(),
        scripts: tags
            .scripts
            .iter()
            .map(|path| format!("<script type=\"module\" src=\"{}\"></script>", url(path)))
            .collect(),
    }
}

/// Join a URL prefix and an asset path with exactly one separating slash.
pub fn join_base(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}
