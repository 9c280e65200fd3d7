use crate::scoring::{Domain, Encoding, Question, ResponseRange};
use crate::Instrument;

pub const IS_PARENT: u32 = 27;
pub const NEEDS_HELP: u32 = 28;

/// Two Yes/No items carried through to the result verbatim.
pub struct Demographics;

impl Instrument for Demographics {
    fn id(&self) -> &str {
        "demographics"
    }

    fn name(&self) -> &str {
        "Demographics"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let yes_no = ResponseRange { min: 0, max: 1 };

            vec![Domain {
                id: "demographics".to_string(),
                name: "Demographics".to_string(),
                scale: None,
                questions: vec![
                    Question {
                        number: IS_PARENT,
                        text: "Are you a parent?".to_string(),
                        range: yes_no,
                        encoding: Encoding::PresentationOrder,
                    },
                    Question {
                        number: NEEDS_HELP,
                        text: "Would you like someone to contact you for support?".to_string(),
                        range: yes_no,
                        encoding: Encoding::PresentationOrder,
                    },
                ],
                multiplier: 1,
                description: None,
            }]
        });
        &DOMAINS
    }
}
