use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use vite_manifest_tags::cli::Cli;

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "vite_manifest_tags=debug"
    } else {
        "vite_manifest_tags=info"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    cli.execute()
}
