//! Locale gating.
//!
//! The core only cares about one thing a locale tag can tell it: whether
//! the Chinese narrative should be generated.

/// Default locale when the caller supplies none.
pub const DEFAULT_LOCALE: &str = "en";

/// True for any tag whose language subtag is `zh` (`zh`, `zh-CN`, `zh-HK`, ...).
pub fn is_chinese(locale: &str) -> bool {
    locale
        .get(..2)
        .is_some_and(|lang| lang.eq_ignore_ascii_case("zh"))
}
