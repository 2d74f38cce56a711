use clap::{Parser, Subcommand};

/// CLI arguments for flagcolors
///
/// Input and output paths are fixed under `src/data` in the working directory.
#[derive(Debug, Parser)]
#[command(
    name = "flagcolors",
    version,
    about = "Annotate country records with the flag colors that match their flag code"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Invert flag_colors.json, print it and write country_data_with_colors.json (default)
    Annotate,

    /// Move the colors out of country_data.json back into flag_colors.json
    Extract,

    /// List flag_colors.json codes that no country record uses
    Check,
}
