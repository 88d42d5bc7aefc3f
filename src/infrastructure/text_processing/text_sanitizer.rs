use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)").unwrap());

/// Cleans up PDF extraction artifacts: NFKC-normalizes ligatures, rejoins
/// words hyphenated across line breaks, and collapses runs of whitespace while
/// keeping paragraph breaks.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let joined = HYPHEN_BREAK.replace_all(&normalized, "$head$tail");

    let mut out = String::with_capacity(joined.len());
    let mut pending_break = false;

    for line in joined.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            pending_break = !out.is_empty();
            continue;
        }

        if pending_break {
            out.push_str("\n\n");
            pending_break = false;
        } else if !out.is_empty() {
            out.push(' ');
        }

        let mut last_was_space = false;
        for ch in trimmed.chars() {
            if ch.is_whitespace() {
                if !last_was_space {
                    out.push(' ');
                    last_was_space = true;
                }
            } else {
                out.push(ch);
                last_was_space = false;
            }
        }
    }

    out.trim().to_string()
}
