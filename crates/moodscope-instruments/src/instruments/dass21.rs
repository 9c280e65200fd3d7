use moodscope_core::models::assessment::Scale;

use crate::scoring::{Domain, Encoding, Question, ResponseRange};
use crate::Instrument;

/// Questionnaire ordinals of the DASS items, by sub-scale.
pub const DEPRESSION_ITEMS: [u32; 7] = [8, 10, 15, 18, 21, 22, 26];
pub const ANXIETY_ITEMS: [u32; 7] = [7, 9, 12, 14, 20, 24, 25];
pub const STRESS_ITEMS: [u32; 7] = [6, 11, 13, 16, 17, 19, 23];

/// Item sums are doubled so the DASS-42 severity cutoffs apply.
pub const SCORE_MULTIPLIER: i32 = 2;

/// First DASS item sits at questionnaire ordinal 6.
const FIRST_QUESTION: u32 = 6;

/// DASS-21: Depression Anxiety Stress Scales, 21-item form.
/// Each item rated 0 (did not apply to me) to 3 (applied very much). Sub-scale
/// sums are doubled, giving 0–42 per sub-scale.
pub struct Dass21;

impl Instrument for Dass21 {
    fn id(&self) -> &str {
        "dass21"
    }

    fn name(&self) -> &str {
        "DASS-21"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![
                domain(
                    Scale::Depression,
                    &DEPRESSION_ITEMS,
                    "0-9: normal, 10-13: mild, 14-20: moderate, 21-27: severe, 28+: very severe",
                ),
                domain(
                    Scale::Anxiety,
                    &ANXIETY_ITEMS,
                    "0-10: normal, 11-13: mild, 14-20: moderate, 21-27: severe, 28+: very severe",
                ),
                domain(
                    Scale::Stress,
                    &STRESS_ITEMS,
                    "0-16: normal, 17-20: mild, 21-28: moderate, 29-37: severe, 38+: very severe",
                ),
            ]
        });
        &DOMAINS
    }
}

const STATEMENTS: [&str; 21] = [
    "I found it hard to wind down.",
    "I was aware of dryness of my mouth.",
    "I couldn't seem to experience any positive feeling at all.",
    "I experienced breathing difficulty (e.g. excessively rapid breathing, \
     breathlessness in the absence of physical exertion).",
    "I found it difficult to work up the initiative to do things.",
    "I tended to over-react to situations.",
    "I experienced trembling (e.g. in the hands).",
    "I felt that I was using a lot of nervous energy.",
    "I was worried about situations in which I might panic and make a fool of myself.",
    "I felt that I had nothing to look forward to.",
    "I found myself getting agitated.",
    "I found it difficult to relax.",
    "I felt down-hearted and blue.",
    "I was intolerant of anything that kept me from getting on with what I was doing.",
    "I felt I was close to panic.",
    "I was unable to become enthusiastic about anything.",
    "I felt I wasn't worth much as a person.",
    "I felt that I was rather touchy.",
    "I was aware of the action of my heart in the absence of physical exertion.",
    "I felt scared without any good reason.",
    "I felt that life was meaningless.",
];

fn domain(scale: Scale, items: &[u32], cutoffs: &str) -> Domain {
    let questions = items
        .iter()
        .map(|&number| Question {
            number,
            text: STATEMENTS[(number - FIRST_QUESTION) as usize].to_string(),
            range: ResponseRange { min: 0, max: 3 },
            encoding: Encoding::ReversePresentationOrder,
        })
        .collect();

    Domain {
        id: scale.id().to_string(),
        name: scale.name().to_string(),
        scale: Some(scale),
        questions,
        multiplier: SCORE_MULTIPLIER,
        description: Some(format!("Doubled item sum. {cutoffs}")),
    }
}
