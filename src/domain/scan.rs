use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Section name for items that appear before the first `##` header.
pub const UNSECTIONED: &str = "Unsectioned";

/// Matches an unchecked TODO line carrying an hour annotation:
/// `- [ ] Some task 5h`. Checked boxes (`- [x]`) never match.
static ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^- \[ \]\s.*\d+h$").expect("ITEM_RE: invalid regex"));

/// Extracts the hour value from the end of an already-classified line.
/// Kept separate from `ITEM_RE` on purpose: classification and extraction
/// have different matching bounds.
static HOURS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)h$").expect("HOURS_RE: invalid regex"));

/// Matches an H2 markdown header and captures its trimmed title.
static SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^##\s+(.*\S)\s*$").expect("SECTION_RE: invalid regex"));

/// Aggregated result of scanning a markdown document for TODO hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of lines classified as checklist-hour items.
    pub matched_lines: usize,
    /// Sum of the hour values across all matched items.
    pub total_hours: u64,
    /// Per-section hour subtotals. Only sections with at least one matched
    /// item are present. Iteration order is unspecified.
    pub subtotals: HashMap<String, u64>,
}

/// Classify a single line, returning its hour value if it is a
/// checklist-hour item. Malformed lines (checked boxes, missing `<N>h`,
/// digit runs that overflow `u64`) contribute nothing.
pub fn item_hours(line: &str) -> Option<u64> {
    if !ITEM_RE.is_match(line) {
        return None;
    }
    let caps = HOURS_RE.captures(line)?;
    caps[1].parse().ok()
}

/// Scan the full text in a single pass: classify lines, track the current
/// `##` section, and accumulate totals.
pub fn scan(text: &str) -> ScanReport {
    let mut matched_lines = 0;
    let mut total_hours: u64 = 0;
    let mut subtotals: HashMap<String, u64> = HashMap::new();
    let mut current_section = UNSECTIONED;

    for line in text.lines() {
        if let Some(caps) = SECTION_RE.captures(line) {
            current_section = caps.get(1).map(|m| m.as_str()).unwrap_or(UNSECTIONED);
            continue;
        }

        if let Some(hours) = item_hours(line) {
            matched_lines += 1;
            total_hours += hours;
            *subtotals.entry(current_section.to_string()).or_insert(0) += hours;
        }
    }

    ScanReport {
        matched_lines,
        total_hours,
        subtotals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_hours_basic() {
        assert_eq!(item_hours("- [ ] Task one 5h"), Some(5));
        assert_eq!(item_hours("- [ ] Refactor the parser 12h"), Some(12));
        assert_eq!(item_hours("- [ ] 3h"), Some(3));
    }

    #[test]
    fn test_item_hours_rejects_checked_and_malformed() {
        assert_eq!(item_hours("- [x] Done task 2h"), None);
        assert_eq!(item_hours("- [ ] No hours here"), None);
        assert_eq!(item_hours("- [ ] Trailing space 5h "), None);
        assert_eq!(item_hours("* [ ] Wrong bullet 5h"), None);
        assert_eq!(item_hours("- [ ] Hours mid-line 5h then more"), None);
    }

    #[test]
    fn test_item_hours_takes_trailing_digit_run() {
        // Only the digit run immediately before the final `h` counts.
        assert_eq!(item_hours("- [ ] Port module 12, est 4h"), Some(4));
        assert_eq!(item_hours("- [ ] Big task 100h"), Some(100));
    }

    #[test]
    fn test_item_hours_overflow_is_ignored() {
        let line = format!("- [ ] Absurd estimate {}0h", u64::MAX);
        assert_eq!(item_hours(&line), None);
    }

    #[test]
    fn test_scan_counts_and_sums() {
        let text = "- [ ] Task one 5h\n- [ ] Task two 3h\n- [x] Done task 2h\n";
        let report = scan(text);
        assert_eq!(report.matched_lines, 2);
        assert_eq!(report.total_hours, 8);
    }

    #[test]
    fn test_scan_empty_and_unrelated_text() {
        let report = scan("No todo items here\n\nJust prose.\n");
        assert_eq!(report.matched_lines, 0);
        assert_eq!(report.total_hours, 0);
        assert!(report.subtotals.is_empty());
    }

    #[test]
    fn test_scan_section_subtotals() {
        let text = "\
## Section A
- [ ] Task one 5h
- [ ] Task two 3h

## Section B
- [ ] Task three 2h
";
        let report = scan(text);
        assert_eq!(report.subtotals.get("Section A"), Some(&8));
        assert_eq!(report.subtotals.get("Section B"), Some(&2));
        assert_eq!(report.subtotals.len(), 2);
    }

    #[test]
    fn test_scan_items_before_first_header_are_unsectioned() {
        let text = "- [ ] Early task 4h\n\n## Later\n- [ ] Task 1h\n";
        let report = scan(text);
        assert_eq!(report.subtotals.get(UNSECTIONED), Some(&4));
        assert_eq!(report.subtotals.get("Later"), Some(&1));
    }

    #[test]
    fn test_scan_sections_without_items_are_absent() {
        let text = "## Empty section\n\n## Busy section\n- [ ] Task 7h\n";
        let report = scan(text);
        assert!(!report.subtotals.contains_key("Empty section"));
        assert_eq!(report.subtotals.get("Busy section"), Some(&7));
    }

    #[test]
    fn test_scan_subtotals_sum_to_total() {
        let text = "\
- [ ] Setup 2h
## A
- [ ] One 5h
- [ ] Two 3h
## B
- [ ] Three 2h
- [x] Skipped 9h
";
        let report = scan(text);
        let sum: u64 = report.subtotals.values().sum();
        assert_eq!(sum, report.total_hours);
        assert_eq!(report.total_hours, 12);
    }

    #[test]
    fn test_header_lines_are_never_items() {
        let report = scan("## Heading that ends in 5h\n");
        assert_eq!(report.matched_lines, 0);
        assert!(report.subtotals.is_empty());
    }
}
