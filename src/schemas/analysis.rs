use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::registry::ExamConfig;

/// Body of `POST /analysis`. Field names mirror the portal frontend, which
/// sends camelCase keys.
#[derive(Debug, Deserialize, Validate)]
pub(crate) struct AnalyzeRequest {
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub(crate) url: String,
    #[serde(default, alias = "examType")]
    pub(crate) exam_type: Option<String>,
    #[serde(default)]
    pub(crate) language: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeResponse {
    pub(crate) success: bool,
    pub(crate) data: AnalysisResult,
}

/// Metadata scraped from the header table of a response sheet page.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CandidateInfo {
    pub(crate) roll_number: String,
    pub(crate) name: String,
    pub(crate) exam_level: String,
    pub(crate) test_date: String,
    pub(crate) shift: String,
    pub(crate) centre_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum QuestionStatus {
    Unattempted,
    Correct,
    Wrong,
}

/// One of the four answer cells of a question, classified from its
/// background color.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuestionOption {
    pub(crate) id: char,
    pub(crate) image_url: String,
    pub(crate) image_url_hindi: String,
    pub(crate) image_url_english: String,
    pub(crate) is_selected: bool,
    pub(crate) is_correct: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Question {
    /// Global 1-based number; holds the part-local number until the scoring
    /// engine applies the part offset.
    pub(crate) question_number: u32,
    pub(crate) part: char,
    pub(crate) subject: String,
    pub(crate) question_image_url: String,
    pub(crate) question_image_url_hindi: String,
    pub(crate) question_image_url_english: String,
    pub(crate) options: Vec<QuestionOption>,
    pub(crate) status: QuestionStatus,
    pub(crate) marks_awarded: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Section {
    pub(crate) part: char,
    pub(crate) subject: String,
    pub(crate) correct: u32,
    pub(crate) wrong: u32,
    pub(crate) unattempted: u32,
    pub(crate) score: f64,
    pub(crate) max_marks: f64,
    pub(crate) correct_marks: f64,
    pub(crate) negative_marks: f64,
    pub(crate) is_qualifying: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnalysisResult {
    pub(crate) candidate: CandidateInfo,
    pub(crate) exam_type: String,
    pub(crate) exam_config: ExamConfig,
    pub(crate) language: String,
    pub(crate) total_score: f64,
    pub(crate) max_score: f64,
    pub(crate) total_questions: u32,
    pub(crate) correct_count: u32,
    pub(crate) wrong_count: u32,
    pub(crate) unattempted_count: u32,
    pub(crate) sections: Vec<Section>,
    pub(crate) questions: Vec<Question>,
}
