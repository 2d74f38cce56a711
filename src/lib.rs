//! flagcolors-rs
//! =============
//!
//! Workspace facade over [`flagcolors_core`]. Use the prelude for the common
//! types and the join stages.

pub use flagcolors_core::*;

pub mod prelude {
    pub use flagcolors_core::{
        annotate, annotate_dir, extract_colors, extract_dir, invert, ColorMap, CountryRecord,
        FlagColorsError, FlagDataset, InvertedMap, JoinStats, Result,
    };
}
