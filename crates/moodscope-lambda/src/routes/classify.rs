use axum::Json;
use serde::Deserialize;

use moodscope_core::models::assessment::{AssessmentResult, Scale};
use moodscope_instruments::classify::classify;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    pub score: i32,
    pub scale_type: Scale,
}

/// Classify a single raw sub-scale score.
pub async fn classify_score(Json(req): Json<ClassifyRequest>) -> Json<AssessmentResult> {
    Json(classify(req.score, req.scale_type))
}
