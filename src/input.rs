//! Line-oriented input for interactive word entry
//!
//! Word lists are entered one word per line and closed with a line holding a
//! single `.`. End of input closes a list as well.

use std::io::{self, BufRead};

use crate::words::WordSet;

/// Line that closes a word list
pub const TERMINATOR: &str = ".";

/// Read one line without its line ending. Returns `None` at end of input.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Read words until the terminator line or end of input.
///
/// Empty lines are kept as empty words. The terminator itself is consumed.
pub fn read_word_set<R: BufRead>(reader: &mut R) -> io::Result<WordSet> {
    let mut words = WordSet::new();
    while let Some(line) = read_line(reader)? {
        if line == TERMINATOR {
            break;
        }
        words.push(line);
    }
    log::debug!("read {} word(s)", words.len());
    Ok(words)
}

/// Parse a font size entered by the user
///
/// Only positive integers are accepted; anything else yields `None` so the
/// caller can fall back to its default.
pub fn parse_font_size(line: &str) -> Option<u32> {
    line.trim().parse::<u32>().ok().filter(|&size| size > 0)
}

/// Read the font size line, falling back to `default` for unusable input
pub fn read_font_size<R: BufRead>(reader: &mut R, default: u32) -> io::Result<u32> {
    let size = read_line(reader)?
        .as_deref()
        .and_then(parse_font_size)
        .unwrap_or(default);
    Ok(size)
}
