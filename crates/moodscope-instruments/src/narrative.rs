//! Long-form Chinese explanation of a result.
//!
//! Purely categorical: one fixed fragment per input, appended in order.
//! A level from the wrong label set (e.g. a satisfaction tier passed as
//! depression) appends nothing.

use moodscope_core::locale::is_chinese;
use moodscope_core::models::assessment::SeverityLevel;
use moodscope_core::models::mood::MoodStatus;

pub const PREAMBLE: &str = "你開心嗎？以下是根據你的問卷回答而作出的整體分析。";

/// Build the narrative, or an empty string when `locale` is not Chinese.
pub fn generate_narrative(
    mood: MoodStatus,
    satisfaction: SeverityLevel,
    depression: SeverityLevel,
    anxiety: SeverityLevel,
    stress: SeverityLevel,
    locale: &str,
) -> String {
    if !is_chinese(locale) {
        return String::new();
    }

    let mut text = String::from(PREAMBLE);
    text.push_str(mood_fragment(mood));
    if let Some(fragment) = satisfaction_fragment(satisfaction) {
        text.push_str(fragment);
    }
    if let Some(fragment) = depression_fragment(depression) {
        text.push_str(fragment);
    }
    if let Some(fragment) = anxiety_fragment(anxiety) {
        text.push_str(fragment);
    }
    if let Some(fragment) = stress_fragment(stress) {
        text.push_str(fragment);
    }
    text
}

fn mood_fragment(mood: MoodStatus) -> &'static str {
    match mood {
        MoodStatus::PsychologicalDisturbance => {
            "你目前的整體精神健康狀況屬於「心理困擾」。你的情緒正承受相當大的壓力，建議盡快向專業人士尋求協助。"
        }
        MoodStatus::MediumToLowSubHealth => {
            "你目前的整體精神健康狀況屬於「中低度亞健康」。你的身心正承受不少壓力，需要多加留意及照顧自己。"
        }
        MoodStatus::ModerateSubHealth => {
            "你目前的整體精神健康狀況屬於「中度亞健康」。你大致能夠應付日常生活，但部分範疇值得關注。"
        }
        MoodStatus::MediumToHighSubHealth => {
            "你目前的整體精神健康狀況屬於「中高度亞健康」。你的情緒大致穩定，對生活的滿意程度仍有提升空間。"
        }
        MoodStatus::Healthy => {
            "你目前的整體精神健康狀況屬於「健康」。請繼續保持良好的生活習慣。"
        }
    }
}

fn satisfaction_fragment(level: SeverityLevel) -> Option<&'static str> {
    match level {
        SeverityLevel::VeryDissatisfied => Some("在生活滿意度方面，你對現時的生活感到非常不滿意。"),
        SeverityLevel::Dissatisfied => Some("在生活滿意度方面，你對現時的生活感到不滿意。"),
        SeverityLevel::Neutral => Some("在生活滿意度方面，你對現時的生活感覺一般。"),
        SeverityLevel::Satisfied => Some("在生活滿意度方面，你對現時的生活感到滿意。"),
        SeverityLevel::VerySatisfied => Some("在生活滿意度方面，你對現時的生活感到非常滿意。"),
        SeverityLevel::Normal
        | SeverityLevel::Mild
        | SeverityLevel::Moderate
        | SeverityLevel::Severe
        | SeverityLevel::VerySevere => None,
    }
}

fn depression_fragment(level: SeverityLevel) -> Option<&'static str> {
    match level {
        SeverityLevel::Normal => Some("在抑鬱方面，你的情況屬正常範圍。"),
        SeverityLevel::Mild => Some("在抑鬱方面，你有輕度的抑鬱情緒。"),
        SeverityLevel::Moderate => Some("在抑鬱方面，你有中度的抑鬱情緒。"),
        SeverityLevel::Severe => Some("在抑鬱方面，你有嚴重的抑鬱情緒。"),
        SeverityLevel::VerySevere => Some("在抑鬱方面，你有非常嚴重的抑鬱情緒。"),
        SeverityLevel::VeryDissatisfied
        | SeverityLevel::Dissatisfied
        | SeverityLevel::Neutral
        | SeverityLevel::Satisfied
        | SeverityLevel::VerySatisfied => None,
    }
}

fn anxiety_fragment(level: SeverityLevel) -> Option<&'static str> {
    match level {
        SeverityLevel::Normal => Some("在焦慮方面，你的情況屬正常範圍。"),
        SeverityLevel::Mild => Some("在焦慮方面，你有輕度的焦慮情緒。"),
        SeverityLevel::Moderate => Some("在焦慮方面，你有中度的焦慮情緒。"),
        SeverityLevel::Severe => Some("在焦慮方面，你有嚴重的焦慮情緒。"),
        SeverityLevel::VerySevere => Some("在焦慮方面，你有非常嚴重的焦慮情緒。"),
        SeverityLevel::VeryDissatisfied
        | SeverityLevel::Dissatisfied
        | SeverityLevel::Neutral
        | SeverityLevel::Satisfied
        | SeverityLevel::VerySatisfied => None,
    }
}

fn stress_fragment(level: SeverityLevel) -> Option<&'static str> {
    match level {
        SeverityLevel::Normal => Some("在壓力方面，你的情況屬正常範圍。"),
        SeverityLevel::Mild => Some("在壓力方面，你承受輕度的壓力。"),
        SeverityLevel::Moderate => Some("在壓力方面，你承受中度的壓力。"),
        SeverityLevel::Severe => Some("在壓力方面，你承受嚴重的壓力。"),
        SeverityLevel::VerySevere => Some("在壓力方面，你承受非常嚴重的壓力，請留意休息並尋求支援。"),
        SeverityLevel::VeryDissatisfied
        | SeverityLevel::Dissatisfied
        | SeverityLevel::Neutral
        | SeverityLevel::Satisfied
        | SeverityLevel::VerySatisfied => None,
    }
}
