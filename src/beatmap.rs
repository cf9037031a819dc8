//! Recognition of `.osu` beatmap files and extraction of their set ID.
//!
//! osu!lazer stores beatmaps as hash-named blobs without extensions, so files are
//! recognised by their header line instead of by name. Both entry points swallow
//! every I/O failure: an unreadable file is simply "not a map" or "no set ID".

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Header every `.osu` file starts with, followed by the format version.
pub const FORMAT_HEADER: &str = "osu file format";

/// Metadata field holding the server-assigned set ID.
pub const SET_ID_FIELD: &str = "BeatmapSetID:";

/// Section marking the end of the metadata header.
pub const HIT_OBJECTS_SECTION: &str = "[HitObjects]";

/// Set ID used by maps that were never uploaded (locally authored).
pub const LOCAL_SET_ID: i64 = -1;

const UTF8_BOM: &str = "\u{feff}";

/// Returns whether the file at `path` is an `.osu` beatmap.
///
/// Only the first line is read. Any error opening or reading the file yields `false`.
/// A UTF-8 byte-order mark before the header is skipped, so such a file is accepted
/// even though its raw first line does not start with [`FORMAT_HEADER`].
#[must_use]
pub fn is_map_file(path: &Path) -> bool {
    File::open(path).is_ok_and(|file| read_is_map_header(BufReader::new(file)))
}

/// Extracts the `BeatmapSetID` of a file already known to be an `.osu` beatmap.
///
/// Returns `None` when the field is missing, not an integer, appears only after
/// `[HitObjects]`, or when the file cannot be read.
#[must_use]
pub fn extract_set_id(path: &Path) -> Option<i64> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::debug!("Cannot reopen {}: {e}", path.display());
            return None;
        }
    };
    read_set_id(BufReader::new(file))
}

/// Reader-level classifier used by [`is_map_file`].
pub fn read_is_map_header<R: BufRead>(mut reader: R) -> bool {
    read_lossy_line(&mut reader)
        .is_some_and(|line| line.trim_start_matches(UTF8_BOM).starts_with(FORMAT_HEADER))
}

/// Reader-level extractor used by [`extract_set_id`]. The first line is skipped.
pub fn read_set_id<R: BufRead>(mut reader: R) -> Option<i64> {
    read_lossy_line(&mut reader)?;

    while let Some(line) = read_lossy_line(&mut reader) {
        if line.starts_with(SET_ID_FIELD) {
            return parse_set_id_line(&line);
        }
        if line.starts_with(HIT_OBJECTS_SECTION) {
            return None;
        }
    }

    None
}

/// Parses the value of a `BeatmapSetID:` line.
fn parse_set_id_line(line: &str) -> Option<i64> {
    let (_, value) = line.split_once(':')?;
    let value = value.trim();
    match value.parse() {
        Ok(id) => Some(id),
        Err(e) => {
            log::debug!("Unparseable set ID {value:?}: {e}");
            None
        }
    }
}

/// Reads one line, replacing invalid UTF-8. `None` on EOF or read error.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`; the terminator stays in the returned
/// string.
fn read_lossy_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut buf = Vec::new();
    let mut after_cr = false;

    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(_) => return None,
        };
        if available.is_empty() {
            break;
        }

        if after_cr {
            if available[0] == b'\n' {
                buf.push(b'\n');
                reader.consume(1);
            }
            break;
        }

        let (used, line_end) = match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) => {
                buf.extend_from_slice(&available[..=i]);
                (i + 1, Some(available[i]))
            }
            None => {
                buf.extend_from_slice(available);
                (available.len(), None)
            }
        };
        reader.consume(used);

        match line_end {
            Some(b'\r') => after_cr = true,
            Some(_) => break,
            None => {}
        }
    }

    if buf.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
#[path = "beatmap_tests.rs"]
mod tests;
