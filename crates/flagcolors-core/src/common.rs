/// Simple aggregate statistics for one join.
///
/// Returned by [`crate::join::annotate`] so callers can log how many records
/// found their flag code in the inverted map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinStats {
    pub records: usize,
    pub matched: usize,
    pub unmatched: usize,
}

/// Directory holding the datasets, relative to the working directory.
pub const DATA_DIR: &str = "src/data";
/// Code → colors input.
pub const FLAG_COLORS_FILE: &str = "flag_colors.json";
/// Country records input.
pub const COUNTRY_DATA_FILE: &str = "country_data.json";
/// Annotated records output.
pub const OUTPUT_FILE: &str = "country_data_with_colors.json";
