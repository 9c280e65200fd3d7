//! Severity classifier.
//!
//! Each sub-scale has four ascending, exclusive upper bounds. A score takes
//! the first tier whose bound it is below, or the top tier when it is below
//! none, so every integer lands in exactly one tier.

use moodscope_core::models::assessment::{AssessmentResult, Scale, SeverityLevel};

/// Upper bound (exclusive) of the "Satisfied" tier.
///
/// One of the two historical scoring paths used 25 here. 27 is applied
/// everywhere until the product owners settle it.
pub const SATISFIED_UPPER_BOUND: i32 = 27;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub scale: Scale,
    /// `(exclusive upper bound, level)` in ascending order.
    pub bounds: [(i32, SeverityLevel); 4],
    /// Level for scores at or above the last bound.
    pub top: SeverityLevel,
}

pub const DEPRESSION: Thresholds = Thresholds {
    scale: Scale::Depression,
    bounds: [
        (10, SeverityLevel::Normal),
        (14, SeverityLevel::Mild),
        (21, SeverityLevel::Moderate),
        (28, SeverityLevel::Severe),
    ],
    top: SeverityLevel::VerySevere,
};

pub const ANXIETY: Thresholds = Thresholds {
    scale: Scale::Anxiety,
    bounds: [
        (11, SeverityLevel::Normal),
        (14, SeverityLevel::Mild),
        (21, SeverityLevel::Moderate),
        (28, SeverityLevel::Severe),
    ],
    top: SeverityLevel::VerySevere,
};

pub const STRESS: Thresholds = Thresholds {
    scale: Scale::Stress,
    bounds: [
        (17, SeverityLevel::Normal),
        (21, SeverityLevel::Mild),
        (29, SeverityLevel::Moderate),
        (38, SeverityLevel::Severe),
    ],
    top: SeverityLevel::VerySevere,
};

/// "Very dissatisfied" is the bottom of the 5..=35 range, i.e. scores <= 5.
pub const SATISFACTION: Thresholds = Thresholds {
    scale: Scale::Satisfaction,
    bounds: [
        (6, SeverityLevel::VeryDissatisfied),
        (14, SeverityLevel::Dissatisfied),
        (20, SeverityLevel::Neutral),
        (SATISFIED_UPPER_BOUND, SeverityLevel::Satisfied),
    ],
    top: SeverityLevel::VerySatisfied,
};

impl Thresholds {
    pub fn for_scale(scale: Scale) -> &'static Thresholds {
        match scale {
            Scale::Depression => &DEPRESSION,
            Scale::Anxiety => &ANXIETY,
            Scale::Stress => &STRESS,
            Scale::Satisfaction => &SATISFACTION,
        }
    }

    pub fn level(&self, score: i32) -> SeverityLevel {
        self.bounds
            .iter()
            .find(|(bound, _)| score < *bound)
            .map(|&(_, level)| level)
            .unwrap_or(self.top)
    }
}

/// Classify a raw sub-scale score into its tier.
pub fn classify(score: i32, scale: Scale) -> AssessmentResult {
    AssessmentResult::new(score, Thresholds::for_scale(scale).level(score))
}
