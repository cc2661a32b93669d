//! Command-line interface for turning a build manifest into tags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::TagsConfig;
use crate::inject::inject_into_file;
use crate::manifest::{load_manifest, resolve_manifest_path};
use crate::models::Tags;
use crate::parser::parse;
use crate::render::render_tags;

/// Derive stylesheet, preload and script tags from a Vite manifest.
#[derive(Parser, Debug)]
#[command(name = "vite-manifest-tags")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory holding vite-tags.config.json
    #[arg(short, long, global = true, default_value = ".")]
    pub config: PathBuf,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tag lists as JSON
    Tags(ManifestArgs),

    /// Print the rendered head and body markup
    Render(RenderArgs),

    /// Inject the rendered markup into an HTML file
    Inject(InjectArgs),
}

/// Manifest selection shared by every subcommand.
#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Manifest file, defaults to the configured location
    pub manifest: Option<PathBuf>,
}

/// Arguments for rendering markup.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: ManifestArgs,

    /// URL prefix for asset paths, overrides the configured base
    #[arg(long)]
    pub base: Option<String>,
}

/// Arguments for patching an HTML file.
#[derive(Args, Debug)]
pub struct InjectArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// HTML file to patch, defaults to the configured index.html
    #[arg(long)]
    pub html: Option<PathBuf>,
}

impl Cli {
    /// Execute the selected subcommand.
    pub fn execute(&self) -> Result<()> {
        let config = TagsConfig::discover(&self.config);

        match &self.command {
            Commands::Tags(args) => {
                let tags = args.load_tags(&self.config, &config)?;
                let json = serde_json::to_string_pretty(&tags)
                    .context("failed to serialise tags")?;
                println!("{json}");
            }
            Commands::Render(args) => {
                let tags = args.source.load_tags(&self.config, &config)?;
                let rendered = render_tags(&tags, args.base(&config));
                println!("{}", rendered.head());
                println!("{}", rendered.body());
            }
            Commands::Inject(args) => {
                let tags = args.render.source.load_tags(&self.config, &config)?;
                let rendered = render_tags(&tags, args.render.base(&config));
                let html = args
                    .html
                    .clone()
                    .unwrap_or_else(|| config.index_html_path(&self.config));
                inject_into_file(&html, &rendered)?;
            }
        }

        Ok(())
    }
}

impl ManifestArgs {
    fn load_tags(&self, project_dir: &Path, config: &TagsConfig) -> Result<Tags> {
        let path = match &self.manifest {
            Some(path) => path.clone(),
            None => resolve_manifest_path(project_dir, config),
        };
        let manifest = load_manifest(&path)?;
        let tags = parse(&manifest);
        log::debug!(
            "{}: {} links, {} preloads, {} scripts",
            path.display(),
            tags.links.len(),
            tags.preloads.len(),
            tags.scripts.len()
        );
        Ok(tags)
    }
}

impl RenderArgs {
    fn base<'a>(&'a self, config: &'a TagsConfig) -> &'a str {
        self.base.as_deref().unwrap_or(&config.base)
    }
}
