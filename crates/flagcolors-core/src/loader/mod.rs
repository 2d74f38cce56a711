// crates/flagcolors-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O) for both input documents and the
//! annotated output. Parsing is plain `serde_json`; field order is preserved
//! through the `preserve_order` feature.

use crate::common::{COUNTRY_DATA_FILE, DATA_DIR, FLAG_COLORS_FILE, OUTPUT_FILE};
use crate::error::Result;
use crate::model::{ColorMap, CountryRecord, FlagDataset};
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod common_io;

impl FlagDataset {
    /// Data directory relative to the working directory (`src/data`).
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(DATA_DIR)
    }

    pub fn flag_colors_path(dir: &Path) -> PathBuf {
        dir.join(FLAG_COLORS_FILE)
    }

    pub fn country_data_path(dir: &Path) -> PathBuf {
        dir.join(COUNTRY_DATA_FILE)
    }

    pub fn output_path(dir: &Path) -> PathBuf {
        dir.join(OUTPUT_FILE)
    }

    /// Loads `flag_colors.json` and `country_data.json` from `dir`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Self::load_from_paths(Self::flag_colors_path(dir), Self::country_data_path(dir))
    }

    pub fn load_from_paths(
        flag_colors: impl AsRef<Path>,
        country_data: impl AsRef<Path>,
    ) -> Result<Self> {
        let color_map = load_color_map(flag_colors)?;
        let countries = load_country_data(country_data)?;
        Ok(Self::new(color_map, countries))
    }
}

pub fn load_color_map(path: impl AsRef<Path>) -> Result<ColorMap> {
    let path = path.as_ref();
    let map: ColorMap = common_io::read_json(path)?;
    debug!(path = %path.display(), keys = map.len(), "loaded color map");
    Ok(map)
}

pub fn load_country_data(path: impl AsRef<Path>) -> Result<Vec<CountryRecord>> {
    let path = path.as_ref();
    let records: Vec<CountryRecord> = common_io::read_json(path)?;
    debug!(path = %path.display(), records = records.len(), "loaded country data");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlagColorsError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn color_map_keeps_file_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FLAG_COLORS_FILE);
        fs::write(&path, r#"{"zz": ["b"], "aa": ["a", "c"], "mm": []}"#).unwrap();

        let map = load_color_map(&path).unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zz", "aa", "mm"]);
        assert_eq!(map["aa"], ["a", "c"]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = FlagDataset::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, FlagColorsError::NotFound(_)), "{err:?}");
    }

    #[test]
    fn malformed_json_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(COUNTRY_DATA_FILE);
        fs::write(&path, "[{\"flagCode\": ").unwrap();

        let err = load_country_data(&path).unwrap_err();
        assert!(matches!(err, FlagColorsError::Json(_)), "{err:?}");
    }

    #[test]
    fn default_paths_live_under_src_data() {
        let dir = FlagDataset::default_data_dir();
        assert_eq!(dir, PathBuf::from("src/data"));
        assert_eq!(
            FlagDataset::output_path(&dir),
            PathBuf::from("src/data/country_data_with_colors.json")
        );
    }
}
