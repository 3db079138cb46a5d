//! Candidate metadata extraction from a response sheet page.
//!
//! The portal renders candidate fields as two-cell table rows: a label cell
//! followed by a value cell that starts with an optional `:` and `&nbsp;`
//! padding. Each field has an ordered list of label synonyms; the first one
//! that matches a populated value wins.

use regex::Regex;

use crate::core::registry::ExamConfig;
use crate::schemas::analysis::CandidateInfo;

const ROLL_NUMBER_LABELS: &[&str] = &["Roll No", "Roll Number"];
const NAME_LABELS: &[&str] = &["Candidate Name", "Name"];
const EXAM_LEVEL_LABELS: &[&str] = &["Exam Level"];
const TEST_DATE_LABELS: &[&str] = &["Test Date"];
const SHIFT_LABELS: &[&str] = &["Test Time", "Shift"];
const CENTRE_NAME_LABELS: &[&str] = &["Centre Name", "Center Name"];

/// Value of the cell adjacent to a label cell containing `label`, up to the
/// next markup boundary. `None` when the label is absent or the value is
/// blank after stripping `:` / `&nbsp;` padding.
fn table_value(html: &str, label: &str) -> Option<String> {
    let pattern = format!(
        r"(?i)<td[^>]*>[^<]*{}[^<]*</td>\s*<td[^>]*>:?(?:&nbsp;)*\s*([^<]+)",
        regex::escape(label)
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace("&nbsp;", " ").trim().to_string())
        .filter(|value| !value.is_empty())
}

fn first_value(html: &str, labels: &[&str]) -> String {
    labels.iter().find_map(|label| table_value(html, label)).unwrap_or_default()
}

pub(crate) fn extract_candidate_info(html: &str) -> CandidateInfo {
    CandidateInfo {
        roll_number: first_value(html, ROLL_NUMBER_LABELS),
        name: first_value(html, NAME_LABELS),
        exam_level: first_value(html, EXAM_LEVEL_LABELS),
        test_date: first_value(html, TEST_DATE_LABELS),
        shift: first_value(html, SHIFT_LABELS),
        centre_name: first_value(html, CENTRE_NAME_LABELS),
    }
}

/// All-empty candidate carrying the exam's display name, used when no field
/// could be extracted from any fetched part.
pub(crate) fn fallback_candidate(config: &ExamConfig) -> CandidateInfo {
    CandidateInfo { exam_level: config.name.clone(), ..CandidateInfo::default() }
}
