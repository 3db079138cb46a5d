//! Turning a scanned question fragment into a scored `Question`.

use crate::core::registry::SubjectConfig;
use crate::schemas::analysis::{Question, QuestionOption, QuestionStatus};
use crate::services::option_rows::{self, FragmentScan, OPTION_IDS, OPTION_SLOTS};
use crate::services::question_blocks::QuestionBlock;

/// Status is decided by the first selected option in row order. No selected
/// option means the question was left unattempted.
pub(crate) fn determine_status(options: &[QuestionOption]) -> QuestionStatus {
    match options.iter().find(|option| option.is_selected) {
        Some(option) if option.is_correct => QuestionStatus::Correct,
        Some(_) => QuestionStatus::Wrong,
        None => QuestionStatus::Unattempted,
    }
}

pub(crate) fn marks_for(status: QuestionStatus, subject: &SubjectConfig) -> f64 {
    match status {
        QuestionStatus::Correct => subject.correct_marks,
        QuestionStatus::Wrong => -subject.negative_marks,
        QuestionStatus::Unattempted => 0.0,
    }
}

fn blank_option(id: char) -> QuestionOption {
    QuestionOption {
        id,
        image_url: String::new(),
        image_url_hindi: String::new(),
        image_url_english: String::new(),
        is_selected: false,
        is_correct: false,
    }
}

/// Assemble one question from its fragment, or `None` when the fragment does
/// not carry at least two image-bearing option rows (instruction tables and
/// navigation chrome also match the block scanner).
///
/// The returned question number is part-local; global renumbering happens
/// during scoring.
pub(crate) fn assemble_question(
    block: &QuestionBlock<'_>,
    subject: &SubjectConfig,
    base_dir: &str,
) -> Option<Question> {
    let FragmentScan {
        question_image_url,
        question_image_url_hindi,
        question_image_url_english,
        mut options,
    } = option_rows::scan_fragment(block.fragment, base_dir);

    if options.len() < 2 {
        return None;
    }
    while options.len() < OPTION_SLOTS {
        options.push(blank_option(OPTION_IDS[options.len()]));
    }

    let status = determine_status(&options);
    Some(Question {
        question_number: block.local_number,
        part: subject.part,
        subject: subject.name.clone(),
        question_image_url,
        question_image_url_hindi,
        question_image_url_english,
        options,
        status,
        marks_awarded: marks_for(status, subject),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::ExamRegistry;

    fn subject() -> SubjectConfig {
        ExamRegistry::builtin().resolve("DELHI_POLICE_HEAD_CONSTABLE").subjects[0].clone()
    }

    fn fragment(option_rows: &str) -> String {
        format!(
            "<table><tr><td><font>Q.No:&nbsp;5</font></td>\
             <td align=left><img src=\"q5.jpg\"></td></tr>{option_rows}</table>"
        )
    }

    fn row(color: &str, image: &str) -> String {
        let bg = if color.is_empty() { String::new() } else { format!(" bgcolor=\"{color}\"") };
        format!("<tr{bg}><td><img src=\"{image}\"></td></tr>")
    }

    fn block(fragment: &str) -> QuestionBlock<'_> {
        QuestionBlock { local_number: 5, fragment }
    }

    #[test]
    fn fragment_with_one_option_is_dropped() {
        let html = fragment(&row("", "o1.jpg"));
        assert!(assemble_question(&block(&html), &subject(), "/base/").is_none());
    }

    #[test]
    fn fragment_without_options_is_dropped() {
        let html = fragment("");
        assert!(assemble_question(&block(&html), &subject(), "/base/").is_none());
    }

    #[test]
    fn two_options_pad_to_four_blank_slots() {
        let html = fragment(&[row("green", "o1.jpg"), row("", "o2.jpg")].concat());
        let question = assemble_question(&block(&html), &subject(), "/base/").unwrap();

        assert_eq!(question.options.len(), 4);
        assert_eq!(question.options[2].id, 'C');
        assert_eq!(question.options[3].id, 'D');
        assert_eq!(question.options[3].image_url, "");
        assert!(!question.options[3].is_selected);
        assert!(!question.options[3].is_correct);
    }

    #[test]
    fn green_option_scores_correct() {
        let html = fragment(
            &[row("green", "o1.jpg"), row("", "o2.jpg"), row("", "o3.jpg"), row("", "o4.jpg")]
                .concat(),
        );
        let question = assemble_question(&block(&html), &subject(), "/base/").unwrap();

        assert_eq!(question.status, QuestionStatus::Correct);
        assert_eq!(question.marks_awarded, subject().correct_marks);
        assert_eq!(question.question_number, 5);
        assert_eq!(question.part, 'A');
        assert_eq!(question.subject, "General Awareness");
    }

    #[test]
    fn red_option_scores_wrong_even_with_yellow_present() {
        let html = fragment(&[row("red", "o1.jpg"), row("yellow", "o2.jpg")].concat());
        let question = assemble_question(&block(&html), &subject(), "/base/").unwrap();

        assert_eq!(question.status, QuestionStatus::Wrong);
        assert_eq!(question.marks_awarded, -subject().negative_marks);
    }

    #[test]
    fn yellow_only_scores_unattempted() {
        let html = fragment(&[row("yellow", "o1.jpg"), row("", "o2.jpg")].concat());
        let question = assemble_question(&block(&html), &subject(), "/base/").unwrap();

        assert_eq!(question.status, QuestionStatus::Unattempted);
        assert_eq!(question.marks_awarded, 0.0);
    }

    #[test]
    fn first_selected_option_decides_status() {
        let html = fragment(&[row("green", "o1.jpg"), row("red", "o2.jpg")].concat());
        let question = assemble_question(&block(&html), &subject(), "/base/").unwrap();
        assert_eq!(question.status, QuestionStatus::Correct);
    }

    #[test]
    fn question_image_resolves_against_base_dir() {
        let html = fragment(&[row("", "o1.jpg"), row("", "o2.jpg")].concat());
        let question = assemble_question(&block(&html), &subject(), "/base/").unwrap();
        assert_eq!(question.question_image_url, "/base/q5.jpg");
    }
}
