use once_cell::sync::Lazy;
use regex::Regex;

/// Literal prefix used to count summary-line occurrences. Deliberately a
/// plain substring check, not the structural pattern below: the locator
/// finds the one line to replace, the literal count detects multiplicity.
pub const SUMMARY_PREFIX: &str = "Total planned hours from TODO items:";

/// Structural match for a well-formed summary line.
static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^Total planned hours from TODO items:\s*\d+h$")
        .expect("SUMMARY_RE: invalid regex")
});

/// Byte span of a located summary line within the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarySpan {
    pub start: usize,
    pub end: usize,
}

impl SummarySpan {
    /// The exact text of the located line.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Locate the first well-formed summary line. Returns `None` when the
/// document has no such line; multiplicity is the caller's problem, via
/// [`count_summary_markers`].
pub fn locate_summary(text: &str) -> Option<SummarySpan> {
    SUMMARY_RE.find(text).map(|m| SummarySpan {
        start: m.start(),
        end: m.end(),
    })
}

/// Count occurrences of the literal summary prefix anywhere in the text.
pub fn count_summary_markers(text: &str) -> usize {
    text.matches(SUMMARY_PREFIX).count()
}

/// The canonical summary line for a computed total.
pub fn expected_summary_line(total: u64) -> String {
    format!("{SUMMARY_PREFIX} {total}h")
}
