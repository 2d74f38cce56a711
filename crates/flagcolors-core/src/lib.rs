// crates/flagcolors-core/src/lib.rs

pub mod check;
pub mod common;
pub mod error;
pub mod extract;
pub mod invert;
pub mod join;
pub mod loader; // The public loader
pub mod model;
pub mod pipeline;
pub mod report;

// Re-exports
pub use crate::common::JoinStats;
pub use crate::error::{FlagColorsError, Result};
pub use crate::model::{ColorMap, CountryRecord, FlagDataset, InvertedMap};

pub use crate::check::DanglingCodes;
pub use crate::extract::{extract_colors, extract_dir};
pub use crate::invert::invert;
pub use crate::join::annotate;
pub use crate::pipeline::annotate_dir;
