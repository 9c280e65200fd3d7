use moodscope_core::models::assessment::{AssessmentResult, Scale, SeverityLevel};
use moodscope_core::models::mood::{IconType, MoodStatus, RESULT_REDIRECT_URL};
use moodscope_instruments::classify::classify;
use moodscope_instruments::error::ScoringError;
use moodscope_instruments::resolve::{
    FALLBACK_MOOD, composite_mood, dass_rank, resolve, try_resolve,
};

const CLINICAL: [SeverityLevel; 5] = [
    SeverityLevel::Normal,
    SeverityLevel::Mild,
    SeverityLevel::Moderate,
    SeverityLevel::Severe,
    SeverityLevel::VerySevere,
];

const SATISFACTION: [SeverityLevel; 5] = [
    SeverityLevel::VeryDissatisfied,
    SeverityLevel::Dissatisfied,
    SeverityLevel::Neutral,
    SeverityLevel::Satisfied,
    SeverityLevel::VerySatisfied,
];

fn clinical(rank: u8) -> AssessmentResult {
    AssessmentResult::new(0, CLINICAL[usize::from(rank - 1)])
}

fn satisfaction(rank: u8) -> AssessmentResult {
    AssessmentResult::new(0, SATISFACTION[usize::from(rank - 1)])
}

/// The combination rules written out as guards, first match wins.
fn expected_mood(dass: u8, ls: u8) -> MoodStatus {
    if dass >= 4 || (dass == 3 && ls <= 2) {
        MoodStatus::PsychologicalDisturbance
    } else if dass == 3 || (dass == 2 && ls <= 2) {
        MoodStatus::MediumToLowSubHealth
    } else if dass == 2 || (dass == 1 && ls <= 2) {
        MoodStatus::ModerateSubHealth
    } else if dass == 1 && ls == 3 {
        MoodStatus::MediumToHighSubHealth
    } else if dass == 1 && ls >= 4 {
        MoodStatus::Healthy
    } else {
        MoodStatus::MediumToHighSubHealth
    }
}

#[test]
fn table_matches_rules_for_all_25_cells() {
    for dass in 1..=5 {
        for ls in 1..=5 {
            assert_eq!(
                composite_mood(dass, ls),
                expected_mood(dass, ls),
                "dass {dass}, ls {ls}"
            );
        }
    }
}

#[test]
fn every_mood_is_reachable() {
    for mood in MoodStatus::ALL {
        let reachable = (1..=5).any(|d| (1..=5).any(|l| composite_mood(d, l) == mood));
        assert!(reachable, "{mood} unreachable");
    }
}

#[test]
fn resolve_uses_worst_clinical_rank() {
    for dass in 1..=5u8 {
        for ls in 1..=5u8 {
            // Put the worst rank on each clinical scale in turn.
            for worst in 0..3 {
                let ranks: Vec<u8> = (0..3).map(|i| if i == worst { dass } else { 1 }).collect();
                let result = resolve(
                    &clinical(ranks[0]),
                    &clinical(ranks[1]),
                    &clinical(ranks[2]),
                    &satisfaction(ls),
                    0,
                    0,
                    "en",
                );
                assert_eq!(result.mood, expected_mood(dass, ls));
            }
        }
    }
}

#[test]
fn dass_rank_is_max_of_three() {
    assert_eq!(dass_rank(&clinical(2), &clinical(4), &clinical(1)), 4);
    assert_eq!(dass_rank(&clinical(1), &clinical(1), &clinical(1)), 1);
    assert_eq!(dass_rank(&clinical(3), &clinical(2), &clinical(5)), 5);
}

#[test]
fn out_of_domain_ranks_fall_back() {
    assert_eq!(composite_mood(0, 3), FALLBACK_MOOD);
    assert_eq!(composite_mood(1, 0), FALLBACK_MOOD);
    assert_eq!(composite_mood(6, 1), FALLBACK_MOOD);
    assert_eq!(composite_mood(1, 9), FALLBACK_MOOD);
    assert_eq!(FALLBACK_MOOD, MoodStatus::MediumToHighSubHealth);
}

#[test]
fn healthy_scenario() {
    let result = resolve(
        &classify(5, Scale::Depression),
        &classify(5, Scale::Anxiety),
        &classify(10, Scale::Stress),
        &classify(34, Scale::Satisfaction),
        0,
        0,
        "en",
    );
    assert_eq!(result.depression_result.rank, 1);
    assert_eq!(result.anxiety_result.rank, 1);
    assert_eq!(result.stress_result.rank, 1);
    assert_eq!(result.satisfaction_result.rank, 5);
    assert_eq!(result.mood, MoodStatus::Healthy);
    assert_eq!(result.icon_type, IconType::Smile);
    assert_eq!(result.icon_color, "green");
}

#[test]
fn disturbance_scenario_ignores_satisfaction() {
    let result = resolve(
        &classify(40, Scale::Depression),
        &classify(40, Scale::Anxiety),
        &classify(40, Scale::Stress),
        &classify(5, Scale::Satisfaction),
        1,
        1,
        "en",
    );
    assert_eq!(result.satisfaction_result.rank, 1);
    assert_eq!(result.mood, MoodStatus::PsychologicalDisturbance);
    assert_eq!(result.icon_type, IconType::Frown);
    assert_eq!(result.icon_color, "red");

    let satisfied = resolve(
        &classify(40, Scale::Depression),
        &classify(40, Scale::Anxiety),
        &classify(40, Scale::Stress),
        &classify(35, Scale::Satisfaction),
        1,
        1,
        "en",
    );
    assert_eq!(satisfied.mood, MoodStatus::PsychologicalDisturbance);
}

#[test]
fn neutral_satisfaction_with_normal_dass() {
    let result = resolve(
        &clinical(1),
        &clinical(1),
        &clinical(1),
        &classify(16, Scale::Satisfaction),
        0,
        0,
        "en",
    );
    assert_eq!(result.satisfaction_result.level, SeverityLevel::Neutral);
    assert_eq!(result.mood.name(), "Medium to High Sub-Health Status");
    assert_eq!(result.icon_type, IconType::Meh);
    assert_eq!(result.icon_color, "blue");
}

#[test]
fn icon_table() {
    let expected = [
        (MoodStatus::PsychologicalDisturbance, IconType::Frown, "red"),
        (MoodStatus::MediumToLowSubHealth, IconType::Frown, "orange"),
        (MoodStatus::ModerateSubHealth, IconType::Meh, "yellow"),
        (MoodStatus::MediumToHighSubHealth, IconType::Meh, "blue"),
        (MoodStatus::Healthy, IconType::Smile, "green"),
    ];
    for (mood, icon, color) in expected {
        assert_eq!(mood.icon(), icon, "{mood}");
        assert_eq!(mood.icon_color(), color, "{mood}");
    }
}

#[test]
fn message_embeds_status_and_all_four_scales() {
    let result = resolve(
        &classify(12, Scale::Depression),
        &classify(4, Scale::Anxiety),
        &classify(22, Scale::Stress),
        &classify(22, Scale::Satisfaction),
        0,
        0,
        "en",
    );
    assert_eq!(result.mood, MoodStatus::MediumToLowSubHealth);
    assert!(result.message.starts_with("Mental health status: Medium-to-Low Sub-Health Status\n"));
    assert!(result.message.contains(MoodStatus::MediumToLowSubHealth.summary()));
    assert!(result.message.contains("Depression: Mild (score 12)"));
    assert!(result.message.contains("Anxiety: Normal (score 4)"));
    assert!(result.message.contains("Stress: Moderate (score 22)"));
    assert!(result.message.contains("Life Satisfaction: Satisfied (score 22)"));
}

#[test]
fn carries_flags_and_redirect() {
    let result = resolve(&clinical(1), &clinical(1), &clinical(1), &satisfaction(4), 1, 0, "en");
    assert_eq!(result.is_parent, 1);
    assert_eq!(result.needs_help, 0);
    assert_eq!(result.redirect_url, RESULT_REDIRECT_URL);
    assert_eq!(result.assessment_text, "");
}

#[test]
fn chinese_locale_fills_assessment_text() {
    let result = resolve(&clinical(1), &clinical(1), &clinical(1), &satisfaction(4), 0, 0, "zh-HK");
    assert!(result.assessment_text.starts_with("你開心嗎？"));
}

#[test]
fn try_resolve_requires_every_result() {
    let d = clinical(1);
    let s = satisfaction(5);

    let err = try_resolve(Some(&d), None, Some(&d), Some(&s), 0, 0, "en").unwrap_err();
    assert_eq!(err, ScoringError::MissingResult { scale: Scale::Anxiety });
    assert!(err.to_string().contains("anxiety"));

    let err = try_resolve(Some(&d), Some(&d), Some(&d), None, 0, 0, "en").unwrap_err();
    assert_eq!(err, ScoringError::MissingResult { scale: Scale::Satisfaction });

    let err = try_resolve(None, None, None, None, 0, 0, "en").unwrap_err();
    assert_eq!(err, ScoringError::MissingResult { scale: Scale::Depression });

    let ok = try_resolve(Some(&d), Some(&d), Some(&d), Some(&s), 0, 0, "en").unwrap();
    assert_eq!(ok.mood, MoodStatus::Healthy);
}

#[test]
fn try_resolve_rejects_rank_outside_domain() {
    let bad = AssessmentResult {
        rank: 9,
        ..clinical(5)
    };
    let err = try_resolve(
        Some(&bad),
        Some(&clinical(1)),
        Some(&clinical(1)),
        Some(&satisfaction(5)),
        0,
        0,
        "en",
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ScoringError::InconsistentResult { scale: Scale::Depression, .. }
    ));
    assert!(err.to_string().contains("outside 1-5"));
}

#[test]
fn try_resolve_rejects_rank_that_disagrees_with_level() {
    let bad = AssessmentResult {
        rank: 1,
        ..clinical(5)
    };
    let err = try_resolve(
        Some(&clinical(1)),
        Some(&clinical(1)),
        Some(&bad),
        Some(&satisfaction(5)),
        0,
        0,
        "en",
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ScoringError::InconsistentResult { scale: Scale::Stress, .. }
    ));
    assert!(err.to_string().contains("does not match level Very Severe"));
}

#[test]
fn try_resolve_rejects_level_from_other_label_set() {
    let normal = clinical(1);
    let err = try_resolve(
        Some(&normal),
        Some(&normal),
        Some(&normal),
        Some(&normal),
        0,
        0,
        "en",
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ScoringError::InconsistentResult { scale: Scale::Satisfaction, .. }
    ));

    let satisfied = satisfaction(4);
    let err = try_resolve(
        Some(&normal),
        Some(&satisfied),
        Some(&normal),
        Some(&satisfied),
        0,
        0,
        "en",
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ScoringError::InconsistentResult { scale: Scale::Anxiety, .. }
    ));
}

#[test]
fn try_resolve_accepts_classifier_output() {
    for score in 0..=60 {
        let result = try_resolve(
            Some(&classify(score, Scale::Depression)),
            Some(&classify(score, Scale::Anxiety)),
            Some(&classify(score, Scale::Stress)),
            Some(&classify(score, Scale::Satisfaction)),
            0,
            0,
            "en",
        );
        assert!(result.is_ok(), "score {score}: {result:?}");
    }
}
