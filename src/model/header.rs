//! Header line model.

use std::sync::OnceLock;

use regex::Regex;

/// A dot-separated numeric label at the start of header text, with an
/// optional trailing dot, followed by whitespace.
fn label_regex() -> &'static Regex {
    static LABEL_RE: OnceLock<Regex> = OnceLock::new();
    LABEL_RE.get_or_init(|| Regex::new(r"^\s*(\d+(?:\.\d+)*\.?)\s+").unwrap())
}

/// A single header line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Nesting depth: count of leading `#` markers.
    pub level: usize,

    /// Pre-existing numeric label, trailing dot stripped. Kept as the
    /// literal digit string found in the document ("03" stays "03").
    pub label: Option<String>,

    /// Title text with markers and label removed.
    pub title: String,
}

impl Header {
    /// Parse a document line into a header.
    ///
    /// Returns `None` when the trimmed line does not start with `#`.
    /// Text that looks like a label but does not parse cleanly is left in
    /// the title rather than rejected. Whether the line sits inside a
    /// fenced code block is the caller's concern.
    pub fn parse(line: &str) -> Option<Header> {
        let trimmed = line.trim();
        if !trimmed.starts_with('#') {
            return None;
        }

        let level = trimmed.bytes().take_while(|&b| b == b'#').count();
        let (label, title) = extract_label(trimmed[level..].trim());

        Some(Header {
            level,
            label,
            title,
        })
    }

    /// Render the header back to a line carrying the computed number.
    ///
    /// The marker run keeps the original level; any indentation the input
    /// line had is not restored.
    pub fn to_line(&self, number: &str) -> String {
        format!("{} {}. {}", "#".repeat(self.level), number, self.title)
    }
}

/// Split a pre-existing numeric label off the front of header text.
///
/// The label is a leading `digit+ (.digit+)*` run with an optional trailing
/// dot, and must be followed by whitespace ("3 Title", "3. Title",
/// "2.3.4 Title"). Anything else belongs to the title, including a bare
/// trailing number with nothing after it.
fn extract_label(text: &str) -> (Option<String>, String) {
    match label_regex().captures(text) {
        Some(caps) => {
            let label = caps[1].trim_end_matches('.').to_string();
            let title = text[caps[0].len()..].trim().to_string();
            (Some(label), title)
        }
        None => (None, text.trim().to_string()),
    }
}
