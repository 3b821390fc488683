//! Character-level transliteration transform.

use crate::table::SubstitutionTable;

/// Transliterate `text` one character at a time using `table`.
///
/// The input is split on `\n` only, and every logical line is re-terminated
/// with a single `\n` — including the last line, and including the empty
/// line a trailing delimiter produces. Characters without a mapping pass
/// through unchanged, so the transform is total: digits, punctuation, and
/// already-Latin text survive as-is.
pub fn transliterate(text: &str, table: &SubstitutionTable) -> String {
    // Replacements are short, so input length is a good starting estimate.
    let mut out = String::with_capacity(text.len() + 1);

    for line in text.split('\n') {
        for ch in line.chars() {
            match table.get(ch) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(ch),
            }
        }
        out.push('\n');
    }

    tracing::debug!(bytes_in = text.len(), bytes_out = out.len(), "transliterated");
    out
}
