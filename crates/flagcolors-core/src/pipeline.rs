// crates/flagcolors-core/src/pipeline.rs
use crate::common::JoinStats;
use crate::error::Result;
use crate::invert::invert;
use crate::join::annotate;
use crate::model::FlagDataset;
use crate::report::{write_annotated, write_report};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Load → invert → join → print → write, against the files in `dir`.
///
/// The report goes to `out`; the annotated records go to
/// `<dir>/country_data_with_colors.json`. Nothing is written if loading or
/// joining fails.
pub fn annotate_dir<W: Write>(dir: impl AsRef<Path>, out: &mut W) -> Result<JoinStats> {
    let dir = dir.as_ref();
    let FlagDataset {
        color_map,
        mut countries,
    } = FlagDataset::load_from_dir(dir)?;

    let inverted = invert(&color_map);
    let stats = annotate(&mut countries, &inverted)?;

    write_report(out, inverted.iter())?;
    write_annotated(FlagDataset::output_path(dir), &countries)?;

    info!(
        colors = inverted.len(),
        records = stats.records,
        matched = stats.matched,
        "annotation finished"
    );
    Ok(stats)
}
