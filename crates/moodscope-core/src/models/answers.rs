use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Number of questions in a complete assessment.
pub const QUESTION_COUNT: u32 = 28;

/// Question ordinal (1-based) → response code, as encoded by the question flow.
///
/// Life-satisfaction options encode to 1..=7 in presentation order, DASS
/// options to 0..=3 in reverse presentation order and the Yes/No
/// demographic items to 0/1. Keys need not be contiguous; a question that
/// has not been answered is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct AnswerMap(BTreeMap<u32, i32>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the answer to `question`.
    pub fn insert(&mut self, question: u32, code: i32) -> Option<i32> {
        self.0.insert(question, code)
    }

    /// Record an answer given by the question flow, rejecting ordinals that
    /// are not part of the questionnaire.
    pub fn answer(&mut self, question: u32, code: i32) -> Result<(), CoreError> {
        if !(1..=QUESTION_COUNT).contains(&question) {
            return Err(CoreError::InvalidQuestion(question));
        }
        self.0.insert(question, code);
        Ok(())
    }

    pub fn get(&self, question: u32) -> Option<i32> {
        self.0.get(&question).copied()
    }

    /// The answer to `question`, with an absent key counting as 0.
    pub fn get_or_zero(&self, question: u32) -> i32 {
        self.get(question).unwrap_or(0)
    }

    /// Sum of the answers at `questions`, absent keys counting as 0.
    /// Saturates at the `i32` bounds.
    pub fn sum(&self, questions: &[u32]) -> i32 {
        questions
            .iter()
            .map(|&q| self.get_or_zero(q))
            .fold(0i32, i32::saturating_add)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every question 1..=28 has an answer.
    pub fn is_complete(&self) -> bool {
        (1..=QUESTION_COUNT).all(|q| self.0.contains_key(&q))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, i32)> + '_ {
        self.0.iter().map(|(&q, &code)| (q, code))
    }
}

impl FromIterator<(u32, i32)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (u32, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<u32, i32>> for AnswerMap {
    fn from(map: BTreeMap<u32, i32>) -> Self {
        Self(map)
    }
}

/// The four raw sub-scale scores plus the two demographic flags.
///
/// Depression, anxiety and stress are doubled DASS sums (0..=42 for valid
/// input); life satisfaction is the plain sum of five 1..=7 items (5..=35).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RawScores {
    pub depression: i32,
    pub anxiety: i32,
    pub stress: i32,
    pub life_satisfaction: i32,
    pub is_parent: i32,
    pub needs_help: i32,
}
