//! Composite mood resolver.
//!
//! The worst of the three DASS ranks and the life-satisfaction rank index
//! a fixed 5x5 table of mood statuses.

use moodscope_core::models::assessment::{AssessmentResult, Scale};
use moodscope_core::models::mood::MoodStatus::{
    Healthy, MediumToHighSubHealth as MedHigh, MediumToLowSubHealth as MedLow,
    ModerateSubHealth as Moderate, PsychologicalDisturbance as Disturbed,
};
use moodscope_core::models::mood::{MoodResult, MoodStatus, RESULT_REDIRECT_URL};

use crate::error::ScoringError;
use crate::narrative::generate_narrative;

/// `MOOD_TABLE[dass_rank - 1][ls_rank - 1]`.
///
/// Rows are the worst DASS rank (1 = normal .. 5 = very severe); columns the
/// life-satisfaction rank (1 = very dissatisfied .. 5 = very satisfied).
pub const MOOD_TABLE: [[MoodStatus; 5]; 5] = [
    [Moderate, Moderate, MedHigh, Healthy, Healthy],
    [MedLow, MedLow, Moderate, Moderate, Moderate],
    [Disturbed, Disturbed, MedLow, MedLow, MedLow],
    [Disturbed, Disturbed, Disturbed, Disturbed, Disturbed],
    [Disturbed, Disturbed, Disturbed, Disturbed, Disturbed],
];

/// Ranks outside 1..=5 cannot come out of the classifier; should a caller
/// build one by hand, this is what it resolves to.
pub const FALLBACK_MOOD: MoodStatus = MoodStatus::MediumToHighSubHealth;

/// Worst (highest) rank among the three clinical sub-scales.
pub fn dass_rank(
    depression: &AssessmentResult,
    anxiety: &AssessmentResult,
    stress: &AssessmentResult,
) -> u8 {
    depression.rank.max(anxiety.rank).max(stress.rank)
}

pub fn composite_mood(dass_rank: u8, ls_rank: u8) -> MoodStatus {
    let cell = |rank: u8| rank.checked_sub(1).map(usize::from);
    cell(dass_rank)
        .zip(cell(ls_rank))
        .and_then(|(row, col)| MOOD_TABLE.get(row)?.get(col).copied())
        .unwrap_or(FALLBACK_MOOD)
}

/// Combine the four sub-scale results into the final [`MoodResult`].
pub fn resolve(
    depression: &AssessmentResult,
    anxiety: &AssessmentResult,
    stress: &AssessmentResult,
    satisfaction: &AssessmentResult,
    is_parent: i32,
    needs_help: i32,
    locale: &str,
) -> MoodResult {
    let mood = composite_mood(dass_rank(depression, anxiety, stress), satisfaction.rank);

    let message = result_message(mood, [
        (Scale::Depression, depression),
        (Scale::Anxiety, anxiety),
        (Scale::Stress, stress),
        (Scale::Satisfaction, satisfaction),
    ]);

    let assessment_text = generate_narrative(
        mood,
        satisfaction.level,
        depression.level,
        anxiety.level,
        stress.level,
        locale,
    );

    MoodResult {
        mood,
        message,
        redirect_url: RESULT_REDIRECT_URL.to_string(),
        icon_type: mood.icon(),
        icon_color: mood.icon_color().to_string(),
        depression_result: depression.clone(),
        anxiety_result: anxiety.clone(),
        stress_result: stress.clone(),
        satisfaction_result: satisfaction.clone(),
        is_parent,
        needs_help,
        assessment_text,
    }
}

/// [`resolve`] for callers that assemble the sub-scale results themselves.
/// Every result must be present, carry a level from its scale's label set
/// and the rank that level implies.
pub fn try_resolve(
    depression: Option<&AssessmentResult>,
    anxiety: Option<&AssessmentResult>,
    stress: Option<&AssessmentResult>,
    satisfaction: Option<&AssessmentResult>,
    is_parent: i32,
    needs_help: i32,
    locale: &str,
) -> Result<MoodResult, ScoringError> {
    Ok(resolve(
        require(depression, Scale::Depression)?,
        require(anxiety, Scale::Anxiety)?,
        require(stress, Scale::Stress)?,
        require(satisfaction, Scale::Satisfaction)?,
        is_parent,
        needs_help,
        locale,
    ))
}

fn require(
    result: Option<&AssessmentResult>,
    scale: Scale,
) -> Result<&AssessmentResult, ScoringError> {
    let result = result.ok_or(ScoringError::MissingResult { scale })?;
    let inconsistent = |reason: String| ScoringError::InconsistentResult { scale, reason };

    if !(1..=5).contains(&result.rank) {
        return Err(inconsistent(format!(
            "rank {} is outside 1-5",
            result.rank
        )));
    }
    if result.level.is_satisfaction() != (scale == Scale::Satisfaction) {
        return Err(inconsistent(format!(
            "level {} does not belong to this scale",
            result.level
        )));
    }
    if result.rank != result.level.rank() {
        return Err(inconsistent(format!(
            "rank {} does not match level {} (rank {})",
            result.rank,
            result.level,
            result.level.rank()
        )));
    }
    Ok(result)
}

fn result_message(mood: MoodStatus, results: [(Scale, &AssessmentResult); 4]) -> String {
    let mut message = format!("Mental health status: {mood}\n{}\n", mood.summary());
    for (scale, result) in results {
        message.push_str(&format!(
            "\n{}: {} (score {})",
            scale.name(),
            result.level,
            result.score
        ));
    }
    message
}
