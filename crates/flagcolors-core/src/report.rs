// crates/flagcolors-core/src/report.rs

//! Human-readable report lines and the annotated JSON output.
//!
//! A line looks like `red: ['us', 'fr']`: the key, then the code list with
//! each code quoted the way a Python list repr quotes strings.

use crate::error::{FlagColorsError, Result};
use crate::loader::common_io;
use crate::model::CountryRecord;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Quotes `s` like a Python `str` repr: single quotes unless the text holds a
/// single quote and no double quote. Control characters become `\xNN`.
pub fn quote(s: &str) -> String {
    let delim = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

pub fn format_line(key: &str, codes: &[String]) -> String {
    let items: Vec<String> = codes.iter().map(|c| quote(c)).collect();
    format!("{key}: [{}]", items.join(", "))
}

/// Writes one line per entry, in iteration order.
pub fn write_report<'a, W, I>(out: &mut W, entries: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a [String])>,
{
    let mut lines = 0;
    for (key, codes) in entries {
        writeln!(out, "{}", format_line(key, codes)).map_err(FlagColorsError::Io)?;
        lines += 1;
    }
    out.flush().map_err(FlagColorsError::Io)?;
    Ok(lines)
}

/// Serializes the records as 2-space indented, ASCII-only JSON, overwriting
/// `path`.
pub fn write_annotated(path: impl AsRef<Path>, records: &[CountryRecord]) -> Result<()> {
    let path = path.as_ref();
    common_io::write_pretty_json_ascii(path, records)?;
    info!(path = %path.display(), records = records.len(), "wrote annotated records");
    Ok(())
}
