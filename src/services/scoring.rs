//! Merging per-part question sequences into globally numbered, scored output.

use std::collections::HashMap;

use crate::core::registry::ExamConfig;
use crate::schemas::analysis::{Question, QuestionStatus, Section};

/// Cumulative question-count offset per part letter, walking subjects in
/// config order. Part A's offset is 0.
pub(crate) fn part_offsets(config: &ExamConfig) -> HashMap<char, u32> {
    let mut offsets = HashMap::with_capacity(config.subjects.len());
    let mut running = 0;
    for subject in &config.subjects {
        offsets.insert(subject.part, running);
        running += subject.total_questions;
    }
    offsets
}

/// Rewrite each question's number from part-local to global and sort the
/// merged sequence ascending by global number.
pub(crate) fn merge_and_number(mut questions: Vec<Question>, config: &ExamConfig) -> Vec<Question> {
    let offsets = part_offsets(config);
    for question in &mut questions {
        let offset = offsets.get(&question.part).copied().unwrap_or(0);
        question.question_number += offset;
    }
    questions.sort_by_key(|question| question.question_number);
    questions
}

/// One section per configured subject, in config order. Parts that
/// contributed no questions still get a section with zero counts.
pub(crate) fn build_sections(questions: &[Question], config: &ExamConfig) -> Vec<Section> {
    config
        .subjects
        .iter()
        .map(|subject| {
            let mut correct = 0;
            let mut wrong = 0;
            let mut unattempted = 0;
            for question in questions.iter().filter(|q| q.part == subject.part) {
                match question.status {
                    QuestionStatus::Correct => correct += 1,
                    QuestionStatus::Wrong => wrong += 1,
                    QuestionStatus::Unattempted => unattempted += 1,
                }
            }
            Section {
                part: subject.part,
                subject: subject.name.clone(),
                correct,
                wrong,
                unattempted,
                score: f64::from(correct) * subject.correct_marks
                    - f64::from(wrong) * subject.negative_marks,
                max_marks: subject.max_marks,
                correct_marks: subject.correct_marks,
                negative_marks: subject.negative_marks,
                is_qualifying: subject.is_qualifying,
            }
        })
        .collect()
}
