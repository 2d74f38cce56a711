// crates/flagcolors-core/src/join.rs
use crate::common::JoinStats;
use crate::error::{FlagColorsError, Result};
use crate::model::{CountryRecord, InvertedMap, FLAG_CODE_FIELD};
use tracing::{debug, warn};

/// Sets `colors` on every record to the inverted entry for its flag code.
///
/// A flag code missing from `inverted` yields an empty list. A record without
/// a string `flagCode` aborts the join before any record is touched.
pub fn annotate(records: &mut [CountryRecord], inverted: &InvertedMap) -> Result<JoinStats> {
    if let Some(index) = records.iter().position(|r| r.flag_code().is_none()) {
        return Err(FlagColorsError::InvalidData(format!(
            "record {index} has no string `{FLAG_CODE_FIELD}`"
        )));
    }

    let mut stats = JoinStats {
        records: records.len(),
        ..JoinStats::default()
    };

    for record in records.iter_mut() {
        let codes = match record.flag_code() {
            Some(code) => inverted.codes_for(code).to_vec(),
            None => continue,
        };
        if codes.is_empty() {
            stats.unmatched += 1;
        } else {
            stats.matched += 1;
        }
        record.set_colors(codes);
    }

    if stats.unmatched > 0 {
        warn!(unmatched = stats.unmatched, "records without an inverted entry");
    }
    debug!(?stats, "annotated records");
    Ok(stats)
}
