// crates/flagcolors-core/src/extract.rs

//! Splits annotated records back into the two source documents.
//!
//! Each record loses its `colors` field; every color in it gains the
//! record's flag code in a `color -> flag codes` map, which is what
//! `flag_colors.json` holds.

use crate::error::{FlagColorsError, Result};
use crate::loader::{common_io, load_country_data};
use crate::model::{ColorMap, CountryRecord, FlagDataset, COLORS_FIELD, FLAG_CODE_FIELD};
use crate::report::write_report;
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Strips `colors` from every record and collects them per color.
///
/// Records without `colors` are left as they are.
pub fn extract_colors(records: &mut [CountryRecord]) -> Result<ColorMap> {
    let mut by_color = ColorMap::new();

    for (index, record) in records.iter_mut().enumerate() {
        let Some(colors) = record.take_colors() else {
            continue;
        };
        let flag_code = record.flag_code().ok_or_else(|| {
            FlagColorsError::InvalidData(format!(
                "record {index} has `{COLORS_FIELD}` but no string `{FLAG_CODE_FIELD}`"
            ))
        })?;
        for color in color_names(&colors, index)? {
            by_color
                .entry(color.to_owned())
                .or_default()
                .push(flag_code.to_owned());
        }
    }

    Ok(by_color)
}

fn color_names(value: &Value, index: usize) -> Result<Vec<&str>> {
    let invalid = || {
        FlagColorsError::InvalidData(format!(
            "record {index}: `{COLORS_FIELD}` must be an array of strings"
        ))
    };
    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|v| v.as_str().ok_or_else(invalid))
        .collect()
}

/// Rewrites `country_data.json` without colors and regenerates
/// `flag_colors.json` from them. The map is also reported to `out`.
pub fn extract_dir<W: Write>(dir: impl AsRef<Path>, out: &mut W) -> Result<ColorMap> {
    let dir = dir.as_ref();
    let country_path = FlagDataset::country_data_path(dir);
    let mut records = load_country_data(&country_path)?;

    let by_color = extract_colors(&mut records)?;

    write_report(
        out,
        by_color.iter().map(|(k, v)| (k.as_str(), v.as_slice())),
    )?;
    // Colors must land in flag_colors.json before they leave the records.
    common_io::write_pretty_json(&FlagDataset::flag_colors_path(dir), &by_color)?;
    common_io::write_pretty_json(&country_path, &records)?;

    info!(
        colors = by_color.len(),
        records = records.len(),
        "extracted flag colors"
    );
    Ok(by_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Vec<CountryRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn groups_flag_codes_by_color() {
        let mut rs = records(json!([
            {"country": "United States", "flagCode": "us", "colors": ["red", "white", "blue"]},
            {"country": "France", "flagCode": "fr", "colors": ["blue", "white", "red"]},
            {"country": "Unknown", "flagCode": "xx"}
        ]));
        let map = extract_colors(&mut rs).unwrap();

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["red", "white", "blue"]);
        assert_eq!(map["blue"], ["us", "fr"]);
        assert!(rs.iter().all(|r| r.colors().is_none()));
        assert_eq!(rs[2], records(json!([{"country": "Unknown", "flagCode": "xx"}]))[0]);
    }

    #[test]
    fn colors_without_flag_code_is_rejected() {
        let mut rs = records(json!([{"colors": ["red"]}]));
        let err = extract_colors(&mut rs).unwrap_err();
        assert!(matches!(err, FlagColorsError::InvalidData(_)));
    }

    #[test]
    fn non_string_colors_are_rejected() {
        let mut rs = records(json!([{"flagCode": "us", "colors": ["red", 3]}]));
        assert!(extract_colors(&mut rs).is_err());

        let mut rs = records(json!([{"flagCode": "us", "colors": "red"}]));
        assert!(extract_colors(&mut rs).is_err());
    }
}
