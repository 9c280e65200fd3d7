use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the four measured sub-scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Scale {
    Depression,
    Anxiety,
    Stress,
    Satisfaction,
}

impl Scale {
    pub const ALL: [Scale; 4] = [
        Scale::Depression,
        Scale::Anxiety,
        Scale::Stress,
        Scale::Satisfaction,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Scale::Depression => "depression",
            Scale::Anxiety => "anxiety",
            Scale::Stress => "stress",
            Scale::Satisfaction => "satisfaction",
        }
    }

    /// Human-readable name used in result messages.
    pub fn name(self) -> &'static str {
        match self {
            Scale::Depression => "Depression",
            Scale::Anxiety => "Anxiety",
            Scale::Stress => "Stress",
            Scale::Satisfaction => "Life Satisfaction",
        }
    }

    /// True for the three DASS clinical scales.
    pub fn is_clinical(self) -> bool {
        !matches!(self, Scale::Satisfaction)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Named tier a raw score falls into.
///
/// The first five are the clinical tiers used by depression, anxiety and
/// stress; the last five are the life-satisfaction tiers. Serialized as the
/// display label, which is also what the persistence layer stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SeverityLevel {
    Normal,
    Mild,
    Moderate,
    Severe,
    #[serde(rename = "Very Severe")]
    VerySevere,
    #[serde(rename = "Very dissatisfied")]
    VeryDissatisfied,
    Dissatisfied,
    Neutral,
    Satisfied,
    #[serde(rename = "Very satisfied")]
    VerySatisfied,
}

impl SeverityLevel {
    pub fn label(self) -> &'static str {
        match self {
            SeverityLevel::Normal => "Normal",
            SeverityLevel::Mild => "Mild",
            SeverityLevel::Moderate => "Moderate",
            SeverityLevel::Severe => "Severe",
            SeverityLevel::VerySevere => "Very Severe",
            SeverityLevel::VeryDissatisfied => "Very dissatisfied",
            SeverityLevel::Dissatisfied => "Dissatisfied",
            SeverityLevel::Neutral => "Neutral",
            SeverityLevel::Satisfied => "Satisfied",
            SeverityLevel::VerySatisfied => "Very satisfied",
        }
    }

    /// Lowercase label, e.g. `"very severe"`.
    pub fn message(self) -> String {
        self.label().to_lowercase()
    }

    /// Position 1..=5 of this tier within its own label set.
    pub fn rank(self) -> u8 {
        match self {
            SeverityLevel::Normal | SeverityLevel::VeryDissatisfied => 1,
            SeverityLevel::Mild | SeverityLevel::Dissatisfied => 2,
            SeverityLevel::Moderate | SeverityLevel::Neutral => 3,
            SeverityLevel::Severe | SeverityLevel::Satisfied => 4,
            SeverityLevel::VerySevere | SeverityLevel::VerySatisfied => 5,
        }
    }

    /// True when this tier belongs to the life-satisfaction label set.
    pub fn is_satisfaction(self) -> bool {
        matches!(
            self,
            SeverityLevel::VeryDissatisfied
                | SeverityLevel::Dissatisfied
                | SeverityLevel::Neutral
                | SeverityLevel::Satisfied
                | SeverityLevel::VerySatisfied
        )
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of a single sub-scale score.
///
/// `rank` is the 1..=5 ordinal used to compare sub-scales with different
/// label sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub score: i32,
    pub level: SeverityLevel,
    pub message: String,
    pub rank: u8,
}

impl AssessmentResult {
    pub fn new(score: i32, level: SeverityLevel) -> Self {
        Self {
            score,
            level,
            message: level.message(),
            rank: level.rank(),
        }
    }
}
