use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("question {0} is outside the questionnaire (1-28)")]
    InvalidQuestion(u32),
}
