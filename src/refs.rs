//! Cross-reference rewriting over renumbered text.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::NumberMap;

/// An inline "section N" mention: the word "section" in any case, optional
/// emphasis punctuation and whitespace around it, then a dot-separated
/// numeric label. No word boundary before "section", so the tail of
/// "subsection 3" is matched too.
fn reference_regex() -> &'static Regex {
    static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();
    REFERENCE_RE.get_or_init(|| {
        Regex::new(r"(?i)([_*]*\s*section\s*[_*]*\s*)(\d+(?:\.\d+)*)([_*]*)").unwrap()
    })
}

/// Rewrite "section N" mentions in `content` using the old-to-new label
/// `mapping`.
///
/// Only the numeric label of a recognized mention is replaced; the word
/// "section", its case, and any emphasis punctuation are kept verbatim.
/// Mentions whose label is not a mapping key stay unchanged. The scan is
/// a single global pass, so a label that only becomes a mapping key after
/// substitution is not rewritten again. Returns the rewritten text and the
/// number of substitutions performed.
pub fn rewrite_references(content: &str, mapping: &NumberMap) -> (String, u32) {
    if mapping.is_empty() {
        return (content.to_string(), 0);
    }

    let mut rewritten = 0u32;
    let output = reference_regex().replace_all(content, |caps: &regex::Captures| {
        match mapping.get(&caps[2]) {
            Some(new_label) => {
                rewritten += 1;
                format!("{}{}{}", &caps[1], new_label, &caps[3])
            }
            None => caps[0].to_string(),
        }
    });

    log::debug!("Rewrote {} section references", rewritten);
    (output.into_owned(), rewritten)
}
