//! flagcolors-cli
//! ==============
//!
//! Command-line interface for the `flagcolors-core` flag color join.
//!
//! The binary (`flagcolors`) parses [`args::CliArgs`], sets up logging and
//! hands the selected command to [`run`]. Keeping the dispatch here lets it
//! run against any data directory and any output sink.
//!
//! ```text
//! flagcolors            # annotate (default)
//! flagcolors extract
//! flagcolors check      # non-zero exit when codes dangle
//! ```
pub mod args;

use crate::args::Commands;
use anyhow::bail;
use flagcolors_core::check::write_check_report;
use flagcolors_core::{annotate_dir, extract_dir, FlagDataset};
use std::io::Write;
use std::path::Path;

/// Runs one command against the files in `data_dir`, reporting to `out`.
///
/// No command means `annotate`. `check` fails when any color map code has no
/// matching country record, after the offending entries were reported.
pub fn run<W: Write>(
    command: Option<Commands>,
    data_dir: &Path,
    out: &mut W,
) -> anyhow::Result<()> {
    match command.unwrap_or(Commands::Annotate) {
        Commands::Annotate => {
            let stats = annotate_dir(data_dir, out)?;
            tracing::info!(?stats, "done");
        }

        Commands::Extract => {
            let by_color = extract_dir(data_dir, out)?;
            tracing::info!(colors = by_color.len(), "done");
        }

        Commands::Check => {
            let db = FlagDataset::load_from_dir(data_dir)?;
            let dangling = db.dangling_codes();
            write_check_report(out, &dangling)?;
            if !dangling.is_empty() {
                bail!("{} color map entries reference unknown flag codes", dangling.len());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::CliArgs;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn seed(flag_colors: &str, country_data: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(FlagDataset::flag_colors_path(dir.path()), flag_colors).unwrap();
        fs::write(FlagDataset::country_data_path(dir.path()), country_data).unwrap();
        dir
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let args = CliArgs::try_parse_from(["flagcolors"]).unwrap();
        assert!(args.command.is_none());

        let args = CliArgs::try_parse_from(["flagcolors", "check"]).unwrap();
        assert!(matches!(args.command, Some(Commands::Check)));

        assert!(CliArgs::try_parse_from(["flagcolors", "--input", "x.json"]).is_err());
    }

    #[test]
    fn no_command_runs_annotate() {
        let dir = seed(r#"{"red": ["us"]}"#, r#"[{"flagCode": "us"}]"#);
        let mut out = Vec::new();

        run(None, dir.path(), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "us: ['red']\n");
        let written = fs::read_to_string(FlagDataset::output_path(dir.path())).unwrap();
        assert!(written.contains("\"colors\""), "{written}");
    }

    #[test]
    fn check_fails_on_dangling_codes() {
        let dir = seed(r#"{"red": ["us", "su"]}"#, r#"[{"flagCode": "us"}]"#);
        let mut out = Vec::new();

        let err = run(Some(Commands::Check), dir.path(), &mut out).unwrap_err();

        assert!(err.to_string().contains("unknown flag codes"), "{err}");
        assert_eq!(String::from_utf8(out).unwrap(), "red: invalid codes su\n");
    }

    #[test]
    fn check_passes_when_every_code_is_known() {
        let dir = seed(r#"{"red": ["us"]}"#, r#"[{"flagCode": "us"}]"#);
        let mut out = Vec::new();

        run(Some(Commands::Check), dir.path(), &mut out).unwrap();
        assert!(!FlagDataset::output_path(dir.path()).exists());
    }
}
