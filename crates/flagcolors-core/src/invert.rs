// crates/flagcolors-core/src/invert.rs
use crate::model::{ColorMap, InvertedMap};
use indexmap::IndexMap;
use tracing::debug;

/// Inverts `code -> colors` into `color -> codes`.
///
/// Every color becomes a key the first time it is seen, and each code is
/// appended to it in visiting order. Duplicates are kept.
pub fn invert(color_map: &ColorMap) -> InvertedMap {
    let mut index: IndexMap<String, Vec<String>> = IndexMap::new();
    for (code, colors) in color_map {
        for color in colors {
            index.entry(color.clone()).or_default().push(code.clone());
        }
    }
    debug!(sources = color_map.len(), keys = index.len(), "inverted color map");
    InvertedMap::from_index(index)
}
