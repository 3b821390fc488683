//! Coverage diagnostics: how much of a document the scheme actually maps.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::table::SubstitutionTable;
use crate::unicode::is_arabic;

#[derive(Debug, Serialize)]
pub struct CoverageReport {
    pub total_chars: usize,
    pub mapped: usize,
    pub passthrough: usize,
    /// Arabic-block characters the scheme has no key for — candidates for
    /// extending a custom scheme file.
    pub unmapped_arabic: BTreeSet<char>,
}

impl CoverageReport {
    pub fn mapped_ratio(&self) -> f64 {
        if self.total_chars == 0 {
            0.0
        } else {
            self.mapped as f64 / self.total_chars as f64
        }
    }
}

/// Count how many characters of `text` the table maps. Line breaks are
/// excluded from the totals since the transform re-terminates lines itself.
pub fn coverage(text: &str, table: &SubstitutionTable) -> CoverageReport {
    let mut report = CoverageReport {
        total_chars: 0,
        mapped: 0,
        passthrough: 0,
        unmapped_arabic: BTreeSet::new(),
    };

    for ch in text.chars() {
        if ch == '\n' {
            continue;
        }
        report.total_chars += 1;
        if table.get(ch).is_some() {
            report.mapped += 1;
        } else {
            report.passthrough += 1;
            if is_arabic(ch) {
                report.unmapped_arabic.insert(ch);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(text: &str) -> CoverageReport {
        coverage(text, SubstitutionTable::default_scheme())
    }

    #[test]
    fn test_fully_mapped() {
        let r = report("اب");
        assert_eq!(r.total_chars, 2);
        assert_eq!(r.mapped, 2);
        assert_eq!(r.passthrough, 0);
        assert!(r.unmapped_arabic.is_empty());
        assert!((r.mapped_ratio() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unmapped_arabic_collected() {
        // ء (hamza) and ى (alef maqsura) are not in the default scheme
        let r = report("اءى");
        assert_eq!(r.mapped, 1);
        assert_eq!(r.passthrough, 2);
        assert_eq!(
            r.unmapped_arabic.iter().copied().collect::<Vec<_>>(),
            vec!['ء', 'ى']
        );
    }

    #[test]
    fn test_line_breaks_excluded() {
        let r = report("ا\nب\n");
        assert_eq!(r.total_chars, 2);
        assert_eq!(r.mapped, 2);
    }

    #[test]
    fn test_latin_is_passthrough_not_arabic() {
        let r = report("abc");
        assert_eq!(r.passthrough, 3);
        assert!(r.unmapped_arabic.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let r = report("");
        assert_eq!(r.total_chars, 0);
        assert_eq!(r.mapped_ratio(), 0.0);
    }
}
