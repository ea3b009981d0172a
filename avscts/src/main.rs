//! Command-line entry point.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use avscts::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    let path = avscts::run(&config).with_context(|| {
        format!(
            "generation from '{}' failed",
            config.schema_dir.display()
        )
    })?;

    println!("[OK] Wrote {}", path.display());
    Ok(())
}
