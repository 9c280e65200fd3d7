use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

use super::answers::{AnswerMap, RawScores};
use super::assessment::SeverityLevel;
use super::mood::MoodResult;

/// The four level labels, stored alongside the full result so records can
/// be filtered without unpacking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleLevels {
    pub depression: SeverityLevel,
    pub anxiety: SeverityLevel,
    pub stress: SeverityLevel,
    pub satisfaction: SeverityLevel,
}

impl SubscaleLevels {
    pub fn from_result(result: &MoodResult) -> Self {
        Self {
            depression: result.depression_result.level,
            anxiety: result.anxiety_result.level,
            stress: result.stress_result.level,
            satisfaction: result.satisfaction_result.level,
        }
    }
}

/// What the persistence collaborator stores verbatim for a completed
/// assessment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub locale: String,
    pub answers: AnswerMap,
    pub raw_scores: RawScores,
    pub levels: SubscaleLevels,
    pub result: MoodResult,
    pub created_at: jiff::Timestamp,
}

impl AssessmentRecord {
    pub fn new(
        locale: impl Into<String>,
        answers: AnswerMap,
        raw_scores: RawScores,
        result: MoodResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            locale: locale.into(),
            answers,
            raw_scores,
            levels: SubscaleLevels::from_result(&result),
            result,
            created_at: jiff::Timestamp::now(),
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>, CoreError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
