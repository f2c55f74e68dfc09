//! Catalog console.

use std::io;

use anyhow::Context;
use catalog_cli::logging::init_logging;
use catalog_cli::{Console, run_shell};
use catalog_core::{Catalog, CatalogConfig, resolve_base_dir};
use clap::Parser;
use tracing::info;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error:#}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = CatalogConfig::builder()
        .base_dir(resolve_base_dir(cli.base_dir.clone()))
        .extension(&cli.extension)
        .policy(cli.stats_policy.into())
        .build();
    let catalog = Catalog::open(config).context("cannot open catalog")?;
    info!(
        base_dir = %catalog.config().base_dir.display(),
        files = catalog.files().len(),
        "catalog opened"
    );

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());
    run_shell(&catalog, &mut console)
}
