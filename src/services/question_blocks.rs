//! Splitting a response sheet page into per-question table fragments.

use std::sync::OnceLock;

use regex::Regex;

/// One question's HTML fragment, tagged with its part-local number.
#[derive(Debug, Clone, Copy)]
pub(crate) struct QuestionBlock<'a> {
    pub(crate) local_number: u32,
    pub(crate) fragment: &'a str,
}

// Lazy boundary on purpose: the fragment ends at the NEAREST `</table>` after
// the Q.No marker, regardless of nesting. The portal's markup is not
// well-formed and downstream consumers rely on exactly this truncation, so
// the scanner must not be "fixed" to balance tags.
fn block_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)<table[^>]*>[\s\S]*?Q\.No:\s*&nbsp;(\d+)[\s\S]*?</table>")
            .expect("question block pattern")
    })
}

/// Scan a page for question blocks, in document order.
///
/// The output order reflects position in the page, not the numeric value of
/// the local number; callers must sort if they need numeric order.
pub(crate) fn scan_question_blocks(html: &str) -> Vec<QuestionBlock<'_>> {
    block_pattern()
        .captures_iter(html)
        .filter_map(|caps| {
            let local_number = caps.get(1)?.as_str().parse().ok()?;
            let fragment = caps.get(0)?.as_str();
            Some(QuestionBlock { local_number, fragment })
        })
        .collect()
}
