use moodscope_core::locale::DEFAULT_LOCALE;

pub const DEFAULT_LOCALE_VAR: &str = "MOODSCOPE_DEFAULT_LOCALE";
pub const STRICT_ANSWERS_VAR: &str = "MOODSCOPE_STRICT_ANSWERS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Locale used when a request does not name one.
    pub default_locale: String,
    /// Reject out-of-range or unknown answers instead of scoring them as given.
    pub strict_answers: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            strict_answers: true,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key → value source. Unset keys take their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let defaults = Self::default();

        let default_locale = lookup(DEFAULT_LOCALE_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.default_locale);

        let strict_answers = match lookup(STRICT_ANSWERS_VAR) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                eyre::eyre!("{STRICT_ANSWERS_VAR} must be true or false, got {raw:?}")
            })?,
            None => defaults.strict_answers,
        };

        Ok(Self {
            default_locale,
            strict_answers,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
