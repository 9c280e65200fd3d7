use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::assessment::AssessmentResult;

/// Where the presentation layer navigates once a result is available.
pub const RESULT_REDIRECT_URL: &str = "/assessment/result";

/// Overall mental-health status derived from the four sub-scale ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MoodStatus {
    #[serde(rename = "Psychological Disturbance")]
    PsychologicalDisturbance,
    #[serde(rename = "Medium-to-Low Sub-Health Status")]
    MediumToLowSubHealth,
    #[serde(rename = "Moderate Sub-Health Status")]
    ModerateSubHealth,
    #[serde(rename = "Medium to High Sub-Health Status")]
    MediumToHighSubHealth,
    Healthy,
}

impl MoodStatus {
    pub const ALL: [MoodStatus; 5] = [
        MoodStatus::PsychologicalDisturbance,
        MoodStatus::MediumToLowSubHealth,
        MoodStatus::ModerateSubHealth,
        MoodStatus::MediumToHighSubHealth,
        MoodStatus::Healthy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MoodStatus::PsychologicalDisturbance => "Psychological Disturbance",
            MoodStatus::MediumToLowSubHealth => "Medium-to-Low Sub-Health Status",
            MoodStatus::ModerateSubHealth => "Moderate Sub-Health Status",
            MoodStatus::MediumToHighSubHealth => "Medium to High Sub-Health Status",
            MoodStatus::Healthy => "Healthy",
        }
    }

    pub fn icon(self) -> IconType {
        match self {
            MoodStatus::PsychologicalDisturbance | MoodStatus::MediumToLowSubHealth => {
                IconType::Frown
            }
            MoodStatus::ModerateSubHealth | MoodStatus::MediumToHighSubHealth => IconType::Meh,
            MoodStatus::Healthy => IconType::Smile,
        }
    }

    pub fn icon_color(self) -> &'static str {
        match self {
            MoodStatus::PsychologicalDisturbance => "red",
            MoodStatus::MediumToLowSubHealth => "orange",
            MoodStatus::ModerateSubHealth => "yellow",
            MoodStatus::MediumToHighSubHealth => "blue",
            MoodStatus::Healthy => "green",
        }
    }

    /// One-sentence guidance shown under the status headline.
    pub fn summary(self) -> &'static str {
        match self {
            MoodStatus::PsychologicalDisturbance => {
                "Your answers indicate significant psychological distress. \
                 Please consider speaking with a mental health professional."
            }
            MoodStatus::MediumToLowSubHealth => {
                "You are under considerable strain. Rest, support from people \
                 you trust, and professional advice may help."
            }
            MoodStatus::ModerateSubHealth => {
                "You are coping, but some areas of your wellbeing need attention."
            }
            MoodStatus::MediumToHighSubHealth => {
                "You are generally doing well, with room to grow your satisfaction with life."
            }
            MoodStatus::Healthy => {
                "You appear to be in good mental health. Keep up the habits that support you."
            }
        }
    }
}

impl fmt::Display for MoodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum IconType {
    Smile,
    Meh,
    Frown,
}

/// The complete outcome of one assessment, handed to the presentation and
/// persistence collaborators. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MoodResult {
    pub mood: MoodStatus,
    pub message: String,
    pub redirect_url: String,
    pub icon_type: IconType,
    pub icon_color: String,
    pub depression_result: AssessmentResult,
    pub anxiety_result: AssessmentResult,
    pub stress_result: AssessmentResult,
    pub satisfaction_result: AssessmentResult,
    pub is_parent: i32,
    pub needs_help: i32,
    /// Long-form Chinese explanation; empty for every other locale.
    pub assessment_text: String,
}
