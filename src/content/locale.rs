//! Language selection and localized-field fallback resolution.
//!
//! Every localized entity stores EN/RU/TK variants of its text fields. The
//! resolver fills gaps with a fixed fallback chain so the public API never
//! serves an empty display field while any translation exists.

use serde::{Deserialize, Serialize};

/// Content languages served by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ru,
    Tk,
}

/// Fallback priority after the requested language: en, then ru, then tk.
pub const FALLBACK_ORDER: [Lang; 3] = [Lang::En, Lang::Ru, Lang::Tk];

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ru => "ru",
            Lang::Tk => "tk",
        }
    }

    /// Case-insensitive parse of a bare language code. Unknown codes are None.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "ru" => Some(Lang::Ru),
            "tk" => Some(Lang::Tk),
            _ => None,
        }
    }
}

/// Best-available value for a localized field triple.
///
/// The requested language wins when its field is non-empty; otherwise the
/// first non-empty field in [`FALLBACK_ORDER`] is used. Returns an empty
/// string when every variant is missing. Never errors.
pub fn resolve(requested: Lang, en: Option<&str>, ru: Option<&str>, tk: Option<&str>) -> String {
    let field = |lang: Lang| match lang {
        Lang::En => en,
        Lang::Ru => ru,
        Lang::Tk => tk,
    };
    fn non_empty(v: Option<&str>) -> Option<&str> {
        v.filter(|s| !s.trim().is_empty())
    }

    if let Some(v) = non_empty(field(requested)) {
        return v.to_string();
    }
    for lang in FALLBACK_ORDER {
        if lang == requested {
            continue;
        }
        if let Some(v) = non_empty(field(lang)) {
            return v.to_string();
        }
    }
    String::new()
}

/// Effective request language: session preference, then explicit query
/// parameter, then Accept-Language, in that priority order. Defaults to
/// English when nothing matches.
pub fn select_language(
    session_pref: Option<&str>,
    query_param: Option<&str>,
    accept_header: Option<&str>,
) -> Lang {
    session_pref
        .and_then(Lang::parse)
        .or_else(|| query_param.and_then(Lang::parse))
        .or_else(|| accept_header.and_then(best_accepted))
        .unwrap_or(Lang::En)
}

/// Highest-weighted supported language in an Accept-Language header value.
fn best_accepted(header: &str) -> Option<Lang> {
    let mut best: Option<(Lang, f32)> = None;
    for part in header.split(',') {
        let mut pieces = part.trim().split(';');
        let tag = pieces.next().unwrap_or("").trim();
        let q = pieces
            .find_map(|p| p.trim().strip_prefix("q="))
            .and_then(|v| v.trim().parse::<f32>().ok())
            .unwrap_or(1.0);
        // Region subtags ("ru-RU") match on the primary tag.
        let primary = tag.split('-').next().unwrap_or("");
        if let Some(lang) = Lang::parse(primary) {
            if q > 0.0 && best.map_or(true, |(_, best_q)| q > best_q) {
                best = Some((lang, q));
            }
        }
    }
    best.map(|(lang, _)| lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_language_wins_when_present() {
        let got = resolve(Lang::Ru, Some("Milk"), Some("Молоко"), Some("Süýt"));
        assert_eq!(got, "Молоко");
    }

    #[test]
    fn falls_back_in_fixed_order() {
        // tk requested but empty: en comes before ru in the chain.
        let got = resolve(Lang::Tk, Some("Milk"), Some("Молоко"), None);
        assert_eq!(got, "Milk");
        let got = resolve(Lang::Tk, None, Some("Молоко"), Some(""));
        assert_eq!(got, "Молоко");
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let got = resolve(Lang::En, Some("   "), Some("Молоко"), None);
        assert_eq!(got, "Молоко");
    }

    #[test]
    fn all_empty_yields_empty_string() {
        assert_eq!(resolve(Lang::En, None, Some(""), Some("  ")), "");
    }

    #[test]
    fn session_preference_beats_query_and_header() {
        let lang = select_language(Some("tk"), Some("ru"), Some("en"));
        assert_eq!(lang, Lang::Tk);
    }

    #[test]
    fn query_param_beats_header() {
        let lang = select_language(None, Some("ru"), Some("tk"));
        assert_eq!(lang, Lang::Ru);
    }

    #[test]
    fn accept_language_weights_are_honored() {
        let lang = select_language(None, None, Some("tk;q=0.4, ru;q=0.9, fr;q=1.0"));
        assert_eq!(lang, Lang::Ru);
    }

    #[test]
    fn accept_language_region_subtags_match() {
        let lang = select_language(None, None, Some("ru-RU,en;q=0.5"));
        assert_eq!(lang, Lang::Ru);
    }

    #[test]
    fn unknown_everything_defaults_to_english() {
        assert_eq!(select_language(Some("de"), Some("fr"), Some("pl")), Lang::En);
        assert_eq!(select_language(None, None, None), Lang::En);
    }
}
