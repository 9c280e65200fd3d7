use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use moodscope_core::models::answers::AnswerMap;
use moodscope_core::models::assessment::AssessmentResult;
use moodscope_core::models::mood::MoodResult;
use moodscope_core::models::record::AssessmentRecord;
use moodscope_instruments::resolve::try_resolve;
use moodscope_instruments::{assess, check_answers};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub answers: AnswerMap,
    #[serde(default)]
    pub locale: Option<String>,
}

/// Sub-scale results assembled by the caller. Any of the four may be
/// missing from the body; resolving then fails with a 400.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    pub depression: Option<AssessmentResult>,
    pub anxiety: Option<AssessmentResult>,
    pub stress: Option<AssessmentResult>,
    pub satisfaction: Option<AssessmentResult>,
    #[serde(default)]
    pub is_parent: i32,
    #[serde(default)]
    pub needs_help: i32,
    #[serde(default)]
    pub locale: Option<String>,
}

/// Score a completed questionnaire and return the record to persist.
pub async fn score_assessment(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    if state.config.strict_answers {
        check_answers(&req.answers)?;
    }

    let locale = state.locale_or_default(req.locale);
    let assessment = assess(&req.answers, &locale);

    tracing::info!(
        mood = %assessment.result.mood,
        depression_rank = assessment.result.depression_result.rank,
        anxiety_rank = assessment.result.anxiety_result.rank,
        stress_rank = assessment.result.stress_result.rank,
        satisfaction_rank = assessment.result.satisfaction_result.rank,
        complete = req.answers.is_complete(),
        "assessment scored"
    );

    Ok(Json(AssessmentRecord::new(
        locale,
        req.answers,
        assessment.raw_scores,
        assessment.result,
    )))
}

/// Resolve a mood from sub-scale results the caller already holds.
pub async fn resolve_assessment(
    State(state): State<AppState>,
    Json(req): Json<ResolveRequest>,
) -> Result<Json<MoodResult>, ApiError> {
    let locale = state.locale_or_default(req.locale);
    let result = try_resolve(
        req.depression.as_ref(),
        req.anxiety.as_ref(),
        req.stress.as_ref(),
        req.satisfaction.as_ref(),
        req.is_parent,
        req.needs_help,
        &locale,
    )?;

    tracing::info!(mood = %result.mood, "assessment resolved");
    Ok(Json(result))
}
