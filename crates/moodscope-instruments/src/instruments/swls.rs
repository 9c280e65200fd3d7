use moodscope_core::models::assessment::Scale;

use crate::scoring::{Domain, Encoding, Question, ResponseRange};
use crate::Instrument;

/// Questions 1-5: the life-satisfaction items.
pub const ITEMS: [u32; 5] = [1, 2, 3, 4, 5];

/// SWLS: Satisfaction With Life Scale.
/// Five statements rated 1 (strongly disagree) to 7 (strongly agree). Total 5–35.
pub struct Swls;

impl Instrument for Swls {
    fn id(&self) -> &str {
        "swls"
    }

    fn name(&self) -> &str {
        "Satisfaction With Life Scale"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let statements = [
                "In most ways my life is close to my ideal.",
                "The conditions of my life are excellent.",
                "I am satisfied with my life.",
                "So far I have gotten the important things I want in life.",
                "If I could live my life over, I would change almost nothing.",
            ];

            let questions = ITEMS
                .iter()
                .zip(statements)
                .map(|(&number, text)| Question {
                    number,
                    text: text.to_string(),
                    range: ResponseRange { min: 1, max: 7 },
                    encoding: Encoding::PresentationOrder,
                })
                .collect();

            vec![Domain {
                id: "life_satisfaction".to_string(),
                name: "Life Satisfaction".to_string(),
                scale: Some(Scale::Satisfaction),
                questions,
                multiplier: 1,
                description: Some(
                    "5: very dissatisfied, 6-13: dissatisfied, 14-19: neutral, \
                     20-26: satisfied, 27+: very satisfied"
                        .to_string(),
                ),
            }]
        });
        &DOMAINS
    }
}
