// crates/flagcolors-core/src/loader/common_io.rs
use crate::error::{FlagColorsError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

pub fn open_stream(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        FlagColorsError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    Ok(BufReader::new(file))
}

/// Parses a whole JSON document from `path`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = open_stream(path)?;
    serde_json::from_reader(reader).map_err(FlagColorsError::Json)
}

/// Writes ANY serializable value as 2-space indented JSON, truncating the file.
pub fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    write_with(path, value, PrettyFormatter::new())
}

/// Like [`write_pretty_json`], but every non-ASCII character in strings is
/// written as a lowercase `\uXXXX` escape (surrogate pairs above U+FFFF).
pub fn write_pretty_json_ascii<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    write_with(path, value, AsciiPrettyFormatter::default())
}

fn write_with<T, F>(path: &Path, value: &T, formatter: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: Formatter,
{
    let file = File::create(path).map_err(FlagColorsError::Io)?;
    let mut writer = BufWriter::new(file);

    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut ser).map_err(FlagColorsError::Json)?;
    writer.flush().map_err(FlagColorsError::Io)?;
    Ok(())
}

/// Pretty formatter that only ever emits ASCII.
#[derive(Default)]
pub struct AsciiPrettyFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }
}
