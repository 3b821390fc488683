//! Character-level Unicode classification for Arabic text.

/// Check the base Arabic block (U+0600..U+06FF). The block also contains
/// Arabic-Indic digits, harakat and punctuation, not just letters, but for
/// coverage diagnostics the block-level check is preferred over enumerating
/// the letter ranges exactly.
pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check whether a string contains any character from the Arabic block.
pub fn contains_arabic(s: &str) -> bool {
    s.chars().any(is_arabic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_arabic('ا'));
        assert!(is_arabic('ء'));
        assert!(is_arabic('٣')); // Arabic-Indic digit
        assert!(!is_arabic('a'));
        assert!(!is_arabic('1'));
        assert!(is_latin('a'));
        assert!(!is_latin('ا'));
    }

    #[test]
    fn test_contains_arabic() {
        assert!(contains_arabic("اب"));
        assert!(contains_arabic("abc ع xyz"));
        assert!(!contains_arabic("abc 123"));
        assert!(!contains_arabic(""));
    }
}
