use moodscope_core::models::assessment::Scale;
use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{} answer(s) failed validation: {}", .0.len(), join_messages(.0))]
    InvalidAnswers(Vec<ValidationError>),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("missing {scale} result: all four sub-scale results are required to resolve a mood")]
    MissingResult { scale: Scale },

    #[error("inconsistent {scale} result: {reason}")]
    InconsistentResult { scale: Scale, reason: String },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
