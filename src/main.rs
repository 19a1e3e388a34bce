use std::path::PathBuf;

use clap::Parser;

use tallyfeed::config::Config;
use tallyfeed::{trace, ui};

/// Counter and post-list demo in a terminal.
#[derive(Debug, Parser)]
#[command(name = "tallyfeed", version)]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the posts endpoint URL.
    #[arg(long)]
    posts_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    trace::init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.posts_url {
        config.api.posts_url = url;
        config.validate()?;
    }

    ui::run(config)?;
    Ok(())
}
