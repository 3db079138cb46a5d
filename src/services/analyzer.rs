//! End-to-end analysis of one response sheet URL.
//!
//! Parts are fetched sequentially in config order; a failed fetch degrades
//! that part to zero questions and the analysis continues. Candidate
//! metadata comes from the first part in config order whose fetch succeeded.

use crate::core::registry::ExamConfig;
use crate::schemas::analysis::{AnalysisResult, Question, QuestionStatus};
use crate::services::candidate;
use crate::services::page_fetcher::PageFetcher;
use crate::services::part_urls::{self, PartReference};
use crate::services::question_assembly;
use crate::services::question_blocks;
use crate::services::scoring;

/// Directory prefix of the input URL, used to resolve relative image paths.
fn base_dir(input_url: &str) -> String {
    let path = input_url.split('?').next().unwrap_or(input_url);
    match path.rfind('/') {
        Some(index) => path[..=index].to_string(),
        None => String::new(),
    }
}

fn parse_part(html: &str, part: &PartReference, base_dir: &str) -> Vec<Question> {
    question_blocks::scan_question_blocks(html)
        .iter()
        .filter_map(|block| question_assembly::assemble_question(block, &part.subject, base_dir))
        .collect()
}

/// Pure assembly of the final result from already-fetched part bodies.
/// `fetched` pairs each part reference with its page HTML, `None` for parts
/// whose fetch failed.
pub(crate) fn build_result(
    config: &ExamConfig,
    exam_type: &str,
    language: &str,
    input_url: &str,
    fetched: &[(PartReference, Option<String>)],
) -> AnalysisResult {
    let base = base_dir(input_url);

    let candidate_info = fetched
        .iter()
        .find_map(|(_, html)| html.as_deref())
        .map(candidate::extract_candidate_info)
        .filter(|info| !info.roll_number.is_empty())
        .unwrap_or_else(|| candidate::fallback_candidate(config));

    let mut questions = Vec::new();
    for (part, html) in fetched {
        if let Some(html) = html {
            questions.extend(parse_part(html, part, &base));
        }
    }

    let questions = scoring::merge_and_number(questions, config);
    let sections = scoring::build_sections(&questions, config);
    let total_score = sections.iter().map(|section| section.score).sum();

    let correct_count =
        questions.iter().filter(|q| q.status == QuestionStatus::Correct).count() as u32;
    let wrong_count = questions.iter().filter(|q| q.status == QuestionStatus::Wrong).count() as u32;
    let unattempted_count =
        questions.iter().filter(|q| q.status == QuestionStatus::Unattempted).count() as u32;

    // The requested exam type is echoed verbatim even when it resolved to
    // the default config; the applied config is reported separately.
    AnalysisResult {
        candidate: candidate_info,
        exam_type: exam_type.to_string(),
        exam_config: config.clone(),
        language: language.to_string(),
        total_score,
        max_score: config.max_marks,
        total_questions: questions.len() as u32,
        correct_count,
        wrong_count,
        unattempted_count,
        sections,
        questions,
    }
}

/// Fetch every part of the sheet and build the scored result.
pub(crate) async fn analyze(
    fetcher: &PageFetcher,
    config: &ExamConfig,
    exam_type: &str,
    url: &str,
    language: &str,
) -> AnalysisResult {
    let parts = part_urls::generate_part_urls(url, config);

    let mut fetched = Vec::with_capacity(parts.len());
    for part in parts {
        let html = match fetcher.fetch_page(&part.url).await {
            Ok(body) => Some(body),
            Err(error) => {
                tracing::warn!(part = %part.part, url = %part.url, error = %error, "Part fetch failed, skipping");
                None
            }
        };
        fetched.push((part, html));
    }

    build_result(config, exam_type, language, url, &fetched)
}
