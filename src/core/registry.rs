use std::collections::HashMap;

use serde::Serialize;

/// Marking scheme and question count for one part of an exam.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubjectConfig {
    pub(crate) name: String,
    pub(crate) part: char,
    pub(crate) total_questions: u32,
    pub(crate) max_marks: f64,
    pub(crate) correct_marks: f64,
    pub(crate) negative_marks: f64,
    pub(crate) is_qualifying: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExamConfig {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) subjects: Vec<SubjectConfig>,
    pub(crate) total_questions: u32,
    pub(crate) max_marks: f64,
}

impl ExamConfig {
    fn new(id: &str, name: &str, subjects: Vec<SubjectConfig>) -> Self {
        let total_questions = subjects.iter().map(|s| s.total_questions).sum();
        let max_marks = subjects.iter().map(|s| s.max_marks).sum();
        Self { id: id.to_string(), name: name.to_string(), subjects, total_questions, max_marks }
    }
}

fn subject(name: &str, part: char, total: u32, max: f64, correct: f64, negative: f64) -> SubjectConfig {
    SubjectConfig {
        name: name.to_string(),
        part,
        total_questions: total,
        max_marks: max,
        correct_marks: correct,
        negative_marks: negative,
        is_qualifying: false,
    }
}

/// Read-only mapping from exam type id to its configuration.
///
/// Built once at startup and shared through `AppState`; unknown ids resolve
/// to the default configuration instead of failing.
#[derive(Debug, Clone)]
pub(crate) struct ExamRegistry {
    configs: HashMap<String, ExamConfig>,
    default_id: String,
}

impl ExamRegistry {
    pub(crate) fn builtin() -> Self {
        let mut configs = HashMap::new();

        let ssc_cgl_pre = ExamConfig::new(
            "SSC_CGL_PRE",
            "SSC CGL PRE (Tier-I)",
            vec![
                subject("General Intelligence & Reasoning", 'A', 25, 50.0, 2.0, 0.50),
                subject("General Awareness", 'B', 25, 50.0, 2.0, 0.50),
                subject("Quantitative Aptitude", 'C', 25, 50.0, 2.0, 0.50),
                subject("English Comprehension", 'D', 25, 50.0, 2.0, 0.50),
            ],
        );
        configs.insert(ssc_cgl_pre.id.clone(), ssc_cgl_pre);

        let dp_head_constable = ExamConfig::new(
            "DELHI_POLICE_HEAD_CONSTABLE",
            "Delhi Police Head Constable (CBT)",
            vec![
                subject("General Awareness", 'A', 25, 25.0, 1.0, 0.25),
                subject("Quantitative Aptitude", 'B', 20, 20.0, 1.0, 0.25),
                subject("Reasoning", 'C', 25, 25.0, 1.0, 0.25),
                subject("English Language", 'D', 20, 20.0, 1.0, 0.25),
                subject("Computer Fundamentals", 'E', 10, 10.0, 1.0, 0.25),
            ],
        );
        let default_id = dp_head_constable.id.clone();
        configs.insert(dp_head_constable.id.clone(), dp_head_constable);

        Self { configs, default_id }
    }

    pub(crate) fn get(&self, exam_type: &str) -> Option<&ExamConfig> {
        self.configs.get(exam_type)
    }

    /// Resolve an exam type, falling back to the default for unknown ids.
    pub(crate) fn resolve(&self, exam_type: &str) -> &ExamConfig {
        self.configs.get(exam_type).unwrap_or_else(|| &self.configs[&self.default_id])
    }

    pub(crate) fn len(&self) -> usize {
        self.configs.len()
    }
}
