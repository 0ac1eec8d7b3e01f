//! Line classification and fixed-width column slicing
//!
//! IGRA2 files are ASCII with occasional Latin-1 bytes. Lines are handled as
//! bytes so that column numbers are byte offsets; each slice is decoded one
//! byte to one `char`.

use crate::app::models::FieldMap;
use crate::app::services::schema::{LineKind, SchemaEntry};
use crate::config::MalformedLinePolicy;
use crate::constants::HEADER_MARKER;
use crate::{Error, Result};

/// Classify a line: header iff column 1 holds the header marker
pub fn classify(line: &[u8]) -> LineKind {
    match line.first() {
        Some(&HEADER_MARKER) => LineKind::Header,
        _ => LineKind::Data,
    }
}

/// Whether a line holds only whitespace
pub fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

/// Split content into `(line_number, line)` pairs, 1-based
///
/// Accepts LF and CRLF endings. A final line without terminator is kept;
/// a trailing terminator does not produce an extra empty line.
pub fn split_lines(content: &[u8]) -> impl Iterator<Item = (usize, &[u8])> {
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    let lines = if content.is_empty() {
        None
    } else {
        Some(body.split(|&b| b == b'\n'))
    };

    lines.into_iter().flatten().enumerate().map(|(i, line)| {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        (i + 1, line)
    })
}

/// Decode Latin-1 bytes into a `String`
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Slice one field from a line
///
/// Under the strict policy a line ending before `entry.end` is an error.
/// Under the lenient policy the slice is truncated, possibly to empty.
pub fn slice_field(
    line: &[u8],
    entry: &SchemaEntry,
    line_number: usize,
    policy: MalformedLinePolicy,
) -> Result<String> {
    if line.len() >= entry.end {
        return Ok(decode_latin1(&line[entry.byte_range()]));
    }

    match policy {
        MalformedLinePolicy::Strict => Err(Error::malformed_line(
            line_number,
            entry.name,
            entry.end,
            line.len(),
        )),
        MalformedLinePolicy::Lenient => {
            let start = (entry.start - 1).min(line.len());
            Ok(decode_latin1(&line[start..]))
        }
    }
}

/// Slice every schema field from a line, in schema order
///
/// Content is not validated; columns past the last schema field are ignored.
pub fn slice_fields(
    line: &[u8],
    entries: &'static [SchemaEntry],
    line_number: usize,
    policy: MalformedLinePolicy,
) -> Result<FieldMap<String>> {
    let mut fields = FieldMap::with_capacity(entries.len());
    for entry in entries {
        let value = slice_field(line, entry, line_number, policy)?;
        fields.insert(entry.name, value);
    }
    Ok(fields)
}
