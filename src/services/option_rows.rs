//! Classification of the rows inside one question fragment.
//!
//! A fragment is scanned twice: once for the question image (the first image
//! after the Q.No marker cell) and once row by row for answer options. The
//! row scan is a two-state machine: rows before the Q.No header row are
//! ignored, the header row itself is skipped, and every later row carrying
//! at least one image fills the next of four option slots.

use std::sync::OnceLock;

use regex::Regex;

use crate::schemas::analysis::QuestionOption;
use crate::services::bilingual;

pub(crate) const OPTION_SLOTS: usize = 4;
pub(crate) const OPTION_IDS: [char; OPTION_SLOTS] = ['A', 'B', 'C', 'D'];

/// Everything extracted from one question fragment, before assembly.
#[derive(Debug, Clone)]
pub(crate) struct FragmentScan {
    pub(crate) question_image_url: String,
    pub(crate) question_image_url_hindi: String,
    pub(crate) question_image_url_english: String,
    /// Up to four classified options, one per qualifying row. Not padded.
    pub(crate) options: Vec<QuestionOption>,
}

fn question_image_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?i)Q\.No:\s*&nbsp;\d+</font></td><td[^>]*>[\s\S]*?<img[^>]+src\s*=\s*["']([^"']+)["']"#,
        )
        .expect("question image pattern")
    })
}

fn row_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<tr([^>]*)>([\s\S]*?)</tr>").expect("row pattern"))
}

fn image_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)<img[^>]+src\s*=\s*["']([^"']+)["']"#).expect("image pattern")
    })
}

fn bgcolor_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)bgcolor\s*=\s*["']([^"']+)["']"#).expect("bgcolor pattern")
    })
}

/// Map a background color to (isSelected, isCorrect), first match wins.
///
/// green: the candidate picked the right answer. red: picked a wrong one.
/// yellow: the right answer the candidate did not pick. Anything else is an
/// unmarked cell.
pub(crate) fn classify_color(bgcolor: &str) -> (bool, bool) {
    let color = bgcolor.to_lowercase();
    if color.contains("green") {
        (true, true)
    } else if color.contains("red") {
        (true, false)
    } else if color.contains("yellow") {
        (false, true)
    } else {
        (false, false)
    }
}

fn resolve_relative(url: &str, base_dir: &str) -> String {
    if url.is_empty() || url.starts_with("http") {
        url.to_string()
    } else {
        format!("{base_dir}{url}")
    }
}

fn row_bgcolor(attrs: &str, content: &str) -> String {
    bgcolor_pattern()
        .captures(attrs)
        .or_else(|| bgcolor_pattern().captures(content))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default()
}

/// Bucket a row's images into default/Hindi/English URLs.
///
/// The default is the first image without a language suffix, falling back to
/// the row's first image when every URL is suffixed. Missing language
/// variants are derived from the default, or backfilled from the variant
/// that was found.
fn bucket_row_images(images: &[String]) -> (String, String, String) {
    let mut hindi = String::new();
    let mut english = String::new();
    let mut default_url = String::new();

    for url in images {
        if bilingual::is_hindi(url) {
            hindi = url.clone();
        } else if bilingual::is_english(url) {
            english = url.clone();
        } else if default_url.is_empty() {
            default_url = url.clone();
        }
    }
    if default_url.is_empty() {
        default_url = images[0].clone();
    }

    if hindi.is_empty() && english.is_empty() {
        let derived = bilingual::resolve(&default_url);
        hindi = if derived.hindi.is_empty() { default_url.clone() } else { derived.hindi };
        english = if derived.english.is_empty() { default_url.clone() } else { derived.english };
    } else {
        if hindi.is_empty() {
            hindi = if english.is_empty() { default_url.clone() } else { english.clone() };
        }
        if english.is_empty() {
            english = if hindi.is_empty() { default_url.clone() } else { hindi.clone() };
        }
    }

    (default_url, hindi, english)
}

pub(crate) fn scan_fragment(fragment: &str, base_dir: &str) -> FragmentScan {
    let question_image_url = question_image_pattern()
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|m| resolve_relative(m.as_str(), base_dir))
        .unwrap_or_default();

    let derived = bilingual::resolve(&question_image_url);
    let question_image_url_hindi = if derived.hindi.is_empty() {
        question_image_url.clone()
    } else {
        derived.hindi
    };
    let question_image_url_english = if derived.english.is_empty() {
        question_image_url.clone()
    } else {
        derived.english
    };

    let mut options = Vec::new();
    let mut seen_header = false;

    for row in row_pattern().captures_iter(fragment) {
        if options.len() >= OPTION_SLOTS {
            break;
        }

        let attrs = row.get(1).map(|m| m.as_str()).unwrap_or_default();
        let content = row.get(2).map(|m| m.as_str()).unwrap_or_default();

        if content.contains("Q.No:") {
            seen_header = true;
            continue;
        }
        if !seen_header {
            continue;
        }

        let images: Vec<String> = image_pattern()
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| resolve_relative(m.as_str(), base_dir))
            .collect();
        if images.is_empty() {
            continue;
        }

        let (image_url, image_url_hindi, image_url_english) = bucket_row_images(&images);
        let (is_selected, is_correct) = classify_color(&row_bgcolor(attrs, content));

        options.push(QuestionOption {
            id: OPTION_IDS[options.len()],
            image_url,
            image_url_hindi,
            image_url_english,
            is_selected,
            is_correct,
        });
    }

    FragmentScan {
        question_image_url,
        question_image_url_hindi,
        question_image_url_english,
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://portal.example.com/sheets/";

    fn header_row(number: u32, image: &str) -> String {
        format!(
            "<tr><td><font>Q.No:&nbsp;{number}</font></td><td align=left><img src=\"{image}\"></td></tr>"
        )
    }

    fn option_row(color: &str, image: &str) -> String {
        let bg = if color.is_empty() { String::new() } else { format!(" bgcolor=\"{color}\"") };
        format!("<tr{bg}><td><img src=\"{image}\"></td></tr>")
    }

    fn fragment(rows: &[String]) -> String {
        format!("<table>{}</table>", rows.concat())
    }

    #[test]
    fn extracts_question_image_and_resolves_relative_path() {
        let html = fragment(&[header_row(1, "q1_HI.jpg")]);
        let scan = scan_fragment(&html, BASE);
        assert_eq!(scan.question_image_url, "https://portal.example.com/sheets/q1_HI.jpg");
        assert_eq!(scan.question_image_url_hindi, "https://portal.example.com/sheets/q1_HI.jpg");
        assert_eq!(scan.question_image_url_english, "https://portal.example.com/sheets/q1_EN.jpg");
    }

    #[test]
    fn absolute_image_urls_are_left_alone() {
        let html = fragment(&[header_row(1, "http://cdn.example.com/q1.jpg")]);
        let scan = scan_fragment(&html, BASE);
        assert_eq!(scan.question_image_url, "http://cdn.example.com/q1.jpg");
    }

    #[test]
    fn missing_question_image_degrades_to_empty() {
        let html = "<table><tr><td>Q.No:&nbsp;1</td></tr></table>";
        let scan = scan_fragment(html, BASE);
        assert_eq!(scan.question_image_url, "");
        assert_eq!(scan.question_image_url_hindi, "");
        assert_eq!(scan.question_image_url_english, "");
    }

    #[test]
    fn rows_before_header_are_ignored() {
        let html = fragment(&[
            option_row("green", "stray.jpg"),
            header_row(1, "q.jpg"),
            option_row("", "opt1.jpg"),
        ]);
        let scan = scan_fragment(&html, BASE);
        assert_eq!(scan.options.len(), 1);
        assert_eq!(scan.options[0].image_url, format!("{BASE}opt1.jpg"));
    }

    #[test]
    fn imageless_rows_do_not_consume_slots() {
        let html = fragment(&[
            header_row(1, "q.jpg"),
            "<tr><td>instructions only</td></tr>".to_string(),
            option_row("", "opt1.jpg"),
        ]);
        let scan = scan_fragment(&html, BASE);
        assert_eq!(scan.options.len(), 1);
        assert_eq!(scan.options[0].id, 'A');
    }

    #[test]
    fn scan_stops_after_four_option_rows() {
        let html = fragment(&[
            header_row(1, "q.jpg"),
            option_row("", "o1.jpg"),
            option_row("", "o2.jpg"),
            option_row("", "o3.jpg"),
            option_row("", "o4.jpg"),
            option_row("green", "o5.jpg"),
        ]);
        let scan = scan_fragment(&html, BASE);
        assert_eq!(scan.options.len(), 4);
        let ids: Vec<char> = scan.options.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!['A', 'B', 'C', 'D']);
        assert!(scan.options.iter().all(|o| !o.is_selected));
    }

    #[test]
    fn color_table_drives_option_flags() {
        let html = fragment(&[
            header_row(1, "q.jpg"),
            option_row("green", "o1.jpg"),
            option_row("red", "o2.jpg"),
            option_row("yellow", "o3.jpg"),
            option_row("#ffffff", "o4.jpg"),
        ]);
        let scan = scan_fragment(&html, BASE);
        let flags: Vec<(bool, bool)> =
            scan.options.iter().map(|o| (o.is_selected, o.is_correct)).collect();
        assert_eq!(flags, vec![(true, true), (true, false), (false, true), (false, false)]);
    }

    #[test]
    fn bgcolor_is_found_inside_row_content_when_absent_on_the_row() {
        let html = fragment(&[
            header_row(1, "q.jpg"),
            "<tr><td bgcolor=\"LightGreen\"><img src=\"o1.jpg\"></td></tr>".to_string(),
        ]);
        let scan = scan_fragment(&html, BASE);
        assert!(scan.options[0].is_selected);
        assert!(scan.options[0].is_correct);
    }

    #[test]
    fn suffixed_images_fill_language_buckets() {
        let html = fragment(&[
            header_row(1, "q.jpg"),
            "<tr><td><img src=\"o1.jpg\"><img src=\"o1_HI.jpg\"><img src=\"o1_EN.jpg\"></td></tr>"
                .to_string(),
        ]);
        let scan = scan_fragment(&html, BASE);
        let option = &scan.options[0];
        assert_eq!(option.image_url, format!("{BASE}o1.jpg"));
        assert_eq!(option.image_url_hindi, format!("{BASE}o1_HI.jpg"));
        assert_eq!(option.image_url_english, format!("{BASE}o1_EN.jpg"));
    }

    #[test]
    fn lone_hindi_image_backfills_english() {
        let html = fragment(&[header_row(1, "q.jpg"), option_row("", "o1_HI.jpg")]);
        let scan = scan_fragment(&html, BASE);
        let option = &scan.options[0];
        assert_eq!(option.image_url_hindi, format!("{BASE}o1_HI.jpg"));
        assert_eq!(option.image_url_english, format!("{BASE}o1_HI.jpg"));
        assert_eq!(option.image_url, format!("{BASE}o1_HI.jpg"));
    }

    #[test]
    fn suffixless_image_derives_identity_variants() {
        let html = fragment(&[header_row(1, "q.jpg"), option_row("", "plain.png")]);
        let scan = scan_fragment(&html, BASE);
        let option = &scan.options[0];
        assert_eq!(option.image_url_hindi, format!("{BASE}plain.png"));
        assert_eq!(option.image_url_english, format!("{BASE}plain.png"));
    }

    #[test]
    fn unmatched_color_classifies_as_neither() {
        assert_eq!(classify_color("blue"), (false, false));
        assert_eq!(classify_color(""), (false, false));
        assert_eq!(classify_color("DarkGreen"), (true, true));
        assert_eq!(classify_color("RED"), (true, false));
        assert_eq!(classify_color("lightyellow"), (false, true));
    }
}
