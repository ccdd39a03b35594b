#![allow(dead_code)]

//! Section segmentation: raw CV text → named sections of non-empty lines.

use serde::{Deserialize, Serialize};

use crate::pipeline::keywords::SECTION_HEADERS;

pub const UNKNOWN_SECTION: &str = "unknown";

/// Ordered section map. Preserves first-appearance order; looking up a name
/// that recurs returns the content of its most recent contiguous block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sections {
    entries: Vec<(String, Vec<String>)>,
}

impl Sections {
    pub fn new() -> Self {
        Sections {
            // Text preceding the first recognized header lands here.
            entries: vec![(UNKNOWN_SECTION.to_string(), Vec::new())],
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, lines)| lines.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(n, lines)| (n.as_str(), lines.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Opens (or reopens) a section. A recurring header discards the lines
    /// from its earlier occurrence: last block wins.
    fn open(&mut self, name: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, lines)) => lines.clear(),
            None => self.entries.push((name.to_string(), Vec::new())),
        }
    }

    fn append(&mut self, name: &str, line: &str) {
        if let Some((_, lines)) = self.entries.iter_mut().find(|(n, _)| n == name) {
            lines.push(line.to_string());
        }
    }
}

/// Splits raw CV text into sections keyed by canonical header names.
///
/// Header detection takes priority over content classification, so a header
/// word inside an ordinary sentence that happens to satisfy one of the
/// structural patterns is still treated as a header. Known limitation.
pub fn segment(raw_text: &str) -> Sections {
    let mut sections = Sections::new();
    let mut current = UNKNOWN_SECTION.to_string();

    for line in raw_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match detect_header(line) {
            Some(header) => {
                sections.open(header);
                current = header.to_string();
            }
            None => sections.append(&current, line),
        }
    }
    sections
}

/// Reconstructs segmentable text from a section map: each named section is
/// emitted as an upper-cased `NAME:` header followed by its lines.
pub fn reconstruct(sections: &Sections) -> String {
    let mut out = String::new();
    for (name, lines) in sections.iter() {
        if name != UNKNOWN_SECTION {
            out.push_str(&name.to_uppercase());
            out.push_str(":\n");
        }
        for line in lines {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

fn detect_header(line: &str) -> Option<&'static str> {
    SECTION_HEADERS
        .iter()
        .find(|header| is_header_line(line, header))
        .copied()
}

/// Structural header patterns, all case-insensitive:
/// (a) line composed of uppercase letters and spaces, containing the header;
/// (b) line with no lowercase letters at all, containing the header;
/// (c) header followed by a colon;
/// (d) header surrounded only by non-word characters.
fn is_header_line(line: &str, header: &str) -> bool {
    let lower = line.to_lowercase();

    let contains_header = contains_word(&lower, header);
    if contains_header {
        let all_upper_or_space = line
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_whitespace());
        if all_upper_or_space {
            return true;
        }
        let no_lowercase = !line.chars().any(|c| c.is_lowercase());
        if no_lowercase {
            return true;
        }
    }

    if let Some(rest) = lower.strip_prefix(header) {
        if rest.trim_start().starts_with(':') {
            return true;
        }
    }

    let stripped = lower.trim_matches(|c: char| !c.is_alphanumeric() && c != '_');
    stripped == header
}

fn contains_word(haystack_lower: &str, word: &str) -> bool {
    crate::pipeline::keywords::contains_term(haystack_lower, word)
}
