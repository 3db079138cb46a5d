//! Derivation of sibling part URLs from a single response sheet URL.

use crate::core::registry::{ExamConfig, SubjectConfig};

/// One part of the response sheet to fetch, paired with the subject
/// configuration that scores it.
#[derive(Debug, Clone)]
pub(crate) struct PartReference {
    pub(crate) part: char,
    pub(crate) url: String,
    pub(crate) subject: SubjectConfig,
}

/// Portal file names per part letter. Parts beyond E have no known file name
/// and are silently dropped.
fn part_file_name(part: char) -> Option<&'static str> {
    match part {
        'A' => Some("ViewCandResponse.aspx"),
        'B' => Some("ViewCandResponse2.aspx"),
        'C' => Some("ViewCandResponse3.aspx"),
        'D' => Some("ViewCandResponse4.aspx"),
        'E' => Some("ViewCandResponse5.aspx"),
        _ => None,
    }
}

/// Generate one `PartReference` per configured subject, in config order.
///
/// The base directory is the input path up to its last `/`; the query string
/// (everything after the first `?`) is carried over to every sibling URL.
pub(crate) fn generate_part_urls(input_url: &str, config: &ExamConfig) -> Vec<PartReference> {
    let (base_path, query) = match input_url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (input_url, ""),
    };
    let base_dir = match base_path.rfind('/') {
        Some(index) => &base_path[..=index],
        None => "",
    };

    config
        .subjects
        .iter()
        .filter_map(|subject| {
            part_file_name(subject.part).map(|file_name| {
                let mut url = format!("{base_dir}{file_name}");
                if !query.is_empty() {
                    url.push('?');
                    url.push_str(query);
                }
                PartReference { part: subject.part, url, subject: subject.clone() }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::ExamRegistry;

    fn dp_config() -> ExamConfig {
        ExamRegistry::builtin().resolve("DELHI_POLICE_HEAD_CONSTABLE").clone()
    }

    #[test]
    fn generates_one_url_per_subject_in_config_order() {
        let parts = generate_part_urls(
            "https://portal.example.com/sheets/ViewCandResponse.aspx?digest=abc",
            &dp_config(),
        );

        let letters: Vec<char> = parts.iter().map(|p| p.part).collect();
        assert_eq!(letters, vec!['A', 'B', 'C', 'D', 'E']);
        assert_eq!(
            parts[2].url,
            "https://portal.example.com/sheets/ViewCandResponse3.aspx?digest=abc"
        );
        assert_eq!(parts[2].subject.name, "Reasoning");
    }

    #[test]
    fn query_string_is_optional() {
        let parts = generate_part_urls("/sheets/ViewCandResponse.aspx", &dp_config());
        assert_eq!(parts[4].url, "/sheets/ViewCandResponse5.aspx");
    }

    #[test]
    fn four_subject_exam_yields_four_parts() {
        let config = ExamRegistry::builtin().resolve("SSC_CGL_PRE").clone();
        let parts = generate_part_urls("/x/ViewCandResponse.aspx?d=1", &config);
        assert_eq!(parts.len(), 4);
    }

    #[test]
    fn parts_beyond_e_are_dropped() {
        let mut config = dp_config();
        config.subjects[4].part = 'F';
        let parts = generate_part_urls("/x/ViewCandResponse.aspx", &config);
        assert_eq!(parts.len(), 4);
        assert!(parts.iter().all(|p| p.part != 'F'));
    }

    #[test]
    fn url_without_separator_keeps_bare_file_names() {
        let parts = generate_part_urls("ViewCandResponse.aspx?d=1", &dp_config());
        assert_eq!(parts[0].url, "ViewCandResponse.aspx?d=1");
        assert_eq!(parts[1].url, "ViewCandResponse2.aspx?d=1");
    }
}
