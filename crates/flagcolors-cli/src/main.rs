//! flagcolors — Command-line interface for flagcolors-core
//!
//! Joins `src/data/flag_colors.json` with `src/data/country_data.json`
//! relative to the current directory.
//!
//! Usage examples
//! --------------
//!
//! - Print the inverted map and write `country_data_with_colors.json`
//!   $ flagcolors
//!   $ flagcolors annotate
//!
//! - Pull the `colors` fields back out into `flag_colors.json`
//!   $ flagcolors extract
//!
//! - Report color map codes with no matching country record
//!   $ flagcolors check
//!
//! Diagnostics go to stderr; set `RUST_LOG=info` (or `debug`) for more.
use clap::Parser;
use flagcolors_cli::args::CliArgs;
use flagcolors_core::FlagDataset;
use std::io;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging();

    let data_dir = FlagDataset::default_data_dir();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    flagcolors_cli::run(args.command, &data_dir, &mut out)
}
