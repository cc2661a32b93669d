#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod inject;
pub mod manifest;
pub mod models;
pub mod parser;
pub mod render;

pub use config::TagsConfig;
pub use manifest::{load_manifest, manifest_from_str};
pub use models::{Manifest, ManifestChunk, Tags};
pub use parser::parse;
pub use render::{RenderedTags, render_tags};
