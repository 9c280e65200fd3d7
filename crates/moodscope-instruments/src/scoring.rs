use moodscope_core::models::answers::AnswerMap;
use moodscope_core::models::assessment::Scale;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// How the question flow maps option position to response code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Encoding {
    /// First option encodes to the range minimum.
    PresentationOrder,
    /// First option encodes to the range maximum.
    ReversePresentationOrder,
}

/// Inclusive range of valid response codes for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseRange {
    pub min: i32,
    pub max: i32,
}

impl ResponseRange {
    pub fn contains(&self, code: i32) -> bool {
        (self.min..=self.max).contains(&code)
    }
}

/// A single questionnaire item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// 1-based ordinal within the full questionnaire.
    pub number: u32,
    pub text: String,
    pub range: ResponseRange,
    pub encoding: Encoding,
}

/// A group of questions scored together.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub name: String,
    /// The sub-scale this domain feeds, if any. Demographic items feed none.
    pub scale: Option<Scale>,
    pub questions: Vec<Question>,
    /// Applied to the item sum to get the raw sub-scale score.
    pub multiplier: i32,
    pub description: Option<String>,
}

impl Domain {
    pub fn question_numbers(&self) -> Vec<u32> {
        self.questions.iter().map(|q| q.number).collect()
    }

    /// Item sum times [`Domain::multiplier`], saturating at the `i32` bounds.
    pub fn score(&self, answers: &AnswerMap) -> i32 {
        answers
            .sum(&self.question_numbers())
            .saturating_mul(self.multiplier)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question: u32,
    pub value: i32,
    /// `None` when the question is not part of the questionnaire at all.
    pub expected_range: Option<ResponseRange>,
    pub message: String,
}
