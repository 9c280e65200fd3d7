//! moodscope-core
//!
//! Pure domain types for the Moodscope self-assessment: answer maps, raw
//! sub-scale scores, severity levels and the composite mood result.
//! No I/O — this is the shared vocabulary between the scoring engine and
//! the collaborators that present and persist its output.

pub mod error;
pub mod locale;
pub mod models;
