// crates/flagcolors-core/src/model.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the lookup key of a country record.
pub const FLAG_CODE_FIELD: &str = "flagCode";
/// Field added to every record by the join.
pub const COLORS_FIELD: &str = "colors";

/// Code → ordered color names, exactly as read from `flag_colors.json`.
///
/// Key order follows the file.
pub type ColorMap = IndexMap<String, Vec<String>>;

/// Color → ordered codes that listed it.
///
/// Built once by [`crate::invert::invert`] and read-only afterwards: there is
/// no public way to insert, so lookups of missing keys never grow the map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvertedMap(IndexMap<String, Vec<String>>);

impl InvertedMap {
    pub(crate) fn from_index(index: IndexMap<String, Vec<String>>) -> Self {
        Self(index)
    }

    /// Codes recorded under `key`, or an empty slice when the key is absent.
    pub fn codes_for(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Entries in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One entry of `country_data.json`.
///
/// Only `flagCode` is interpreted; every other field is carried through
/// untouched and in its original order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryRecord(Map<String, Value>);

impl CountryRecord {
    /// The record's flag code, if present and a string.
    pub fn flag_code(&self) -> Option<&str> {
        self.0.get(FLAG_CODE_FIELD).and_then(Value::as_str)
    }

    /// The `colors` field, if the record has one.
    pub fn colors(&self) -> Option<&Value> {
        self.0.get(COLORS_FIELD)
    }

    /// Sets `colors`, replacing any previous value in place.
    pub fn set_colors(&mut self, codes: Vec<String>) {
        let codes = codes.into_iter().map(Value::String).collect();
        self.0.insert(COLORS_FIELD.to_owned(), Value::Array(codes));
    }

    /// Removes `colors` and returns it, keeping the order of the other fields.
    pub fn take_colors(&mut self) -> Option<Value> {
        self.0.shift_remove(COLORS_FIELD)
    }
}

/// Both input documents, loaded into memory.
#[derive(Clone, Debug, Default)]
pub struct FlagDataset {
    pub color_map: ColorMap,
    pub countries: Vec<CountryRecord>,
}

impl FlagDataset {
    pub fn new(color_map: ColorMap, countries: Vec<CountryRecord>) -> Self {
        Self {
            color_map,
            countries,
        }
    }
}
