//! moodscope-instruments
//!
//! Questionnaire definitions and the scoring engine. Pure and synchronous:
//! answers go in, sub-scale scores, severity levels and a composite mood
//! come out. Nothing here performs I/O or logs.

pub mod classify;
pub mod error;
pub mod instruments;
pub mod narrative;
pub mod resolve;
pub mod scoring;

use moodscope_core::models::answers::{AnswerMap, QUESTION_COUNT, RawScores};
use moodscope_core::models::assessment::Scale;
use moodscope_core::models::mood::MoodResult;

use error::InstrumentError;
use scoring::{Domain, Question, ValidationError};

/// Trait implemented by each instrument that makes up the questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "swls", "dass21").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "DASS-21").
    fn name(&self) -> &str;

    /// The domains and questions this instrument covers.
    fn domains(&self) -> &[Domain];

    fn questions(&self) -> Vec<&Question> {
        self.domains().iter().flat_map(|d| &d.questions).collect()
    }

    /// Check every supplied answer that belongs to this instrument against
    /// its question's code range. Unanswered questions are not errors.
    fn validate_answers(&self, answers: &AnswerMap) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for question in self.questions() {
            if let Some(value) = answers.get(question.number)
                && !question.range.contains(value)
            {
                errors.push(ValidationError {
                    question: question.number,
                    value,
                    expected_range: Some(question.range),
                    message: format!(
                        "{}: question {} answer {} is outside range [{}, {}]",
                        self.name(),
                        question.number,
                        value,
                        question.range.min,
                        question.range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Render the answered questions as structured text, one section per
    /// domain. Unanswered questions are left out.
    fn to_structured_input(&self, answers: &AnswerMap) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for domain in self.domains() {
            output.push_str(&format!("### {}\n", domain.name));
            for question in &domain.questions {
                if let Some(value) = answers.get(question.number) {
                    output.push_str(&format!(
                        "- Q{} {}: {}\n",
                        question.number, question.text, value
                    ));
                }
            }
            output.push('\n');
        }
        output
    }
}

/// Return all registered instruments, in questionnaire order.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::swls::Swls),
        Box::new(instruments::dass21::Dass21),
        Box::new(instruments::demographics::Demographics),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Validate a whole answer map: out-of-range codes and ordinals that are not
/// part of the questionnaire.
pub fn validate_questionnaire(answers: &AnswerMap) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = answers
        .iter()
        .filter(|(question, _)| !(1..=QUESTION_COUNT).contains(question))
        .map(|(question, value)| ValidationError {
            question,
            value,
            expected_range: None,
            message: format!("question {question} is not part of the questionnaire"),
        })
        .collect();

    for instrument in all_instruments() {
        errors.extend(instrument.validate_answers(answers));
    }
    errors
}

/// Like [`validate_questionnaire`], folded into a single error.
pub fn check_answers(answers: &AnswerMap) -> Result<(), InstrumentError> {
    let errors = validate_questionnaire(answers);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(InstrumentError::InvalidAnswers(errors))
    }
}

/// Sub-scale calculator.
///
/// Each sub-scale is the score of the domain that feeds it (item sum times
/// the domain multiplier, so the DASS sums are doubled); the two demographic
/// answers are copied through. An absent answer counts as 0.
pub fn calculate_scores(answers: &AnswerMap) -> RawScores {
    use instruments::demographics;

    RawScores {
        depression: subscale_score(answers, Scale::Depression),
        anxiety: subscale_score(answers, Scale::Anxiety),
        stress: subscale_score(answers, Scale::Stress),
        life_satisfaction: subscale_score(answers, Scale::Satisfaction),
        is_parent: answers.get_or_zero(demographics::IS_PARENT),
        needs_help: answers.get_or_zero(demographics::NEEDS_HELP),
    }
}

fn subscale_score(answers: &AnswerMap, scale: Scale) -> i32 {
    use instruments::{dass21::Dass21, swls::Swls};

    Swls.domains()
        .iter()
        .chain(Dass21.domains())
        .filter(|d| d.scale == Some(scale))
        .map(|d| d.score(answers))
        .fold(0i32, i32::saturating_add)
}

/// Raw scores and the resolved mood for one completed questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub raw_scores: RawScores,
    pub result: MoodResult,
}

/// Run the whole pipeline: calculate, classify each sub-scale, resolve.
pub fn assess(answers: &AnswerMap, locale: &str) -> Assessment {
    let raw_scores = calculate_scores(answers);
    let result = resolve::resolve(
        &classify::classify(raw_scores.depression, Scale::Depression),
        &classify::classify(raw_scores.anxiety, Scale::Anxiety),
        &classify::classify(raw_scores.stress, Scale::Stress),
        &classify::classify(raw_scores.life_satisfaction, Scale::Satisfaction),
        raw_scores.is_parent,
        raw_scores.needs_help,
        locale,
    );

    Assessment { raw_scores, result }
}
