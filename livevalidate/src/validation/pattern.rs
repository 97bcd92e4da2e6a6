//! Rule resolution: a field's declared kind and format hint select the
//! pattern its value must satisfy.

use std::sync::LazyLock;

use formdom::{Field, FieldKind};
use regex::Regex;

/// Loose `token@token.token` shape. Deliberately permissive, not RFC 5322.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S\S+").expect("email pattern"));

/// `http(s)://` or bare `www.` forms with a two-character minimum suffix.
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://[^\s.]+\.[^\s]{2,}|www\.[^\s]+\.[^\s]{2,})").expect("url pattern")
});

/// Month-first date, `19xx`/`20xx` years.
static DATE_MDY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[012])[- /.](0[1-9]|[12][0-9]|3[01])[- /.](19|20)\d\d$")
        .expect("date pattern")
});

/// Day-first date, selected by a `dd/mm/yyyy` or `dd-mm-yyyy` format hint.
static DATE_DMY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])[- /.](0[1-9]|1[012])[- /.](19|20)\d\d$")
        .expect("date pattern")
});

/// 24-hour clock, `HH:MM`.
static TIME_24: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(([0-1][0-9]|[2][0-3])):([0-5]\d)$").expect("time pattern"));

/// 12-hour clock bounded to hours 00-12, selected by a `hh:mm`/`hh:MM` hint.
static TIME_12: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-1][0-2]):([0-5]\d)$").expect("time pattern"));

/// Generic token of 2-10 word characters. Unanchored: a partial match
/// inside a longer value still validates.
static FALLBACK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w{2,10}\b").expect("fallback pattern"));

/// The rule a field's value must satisfy.
///
/// The password rule requires four simultaneous character-class conditions,
/// which a single non-backtracking regex cannot express; it is a structural
/// variant instead.
#[derive(Debug, Clone)]
pub enum Pattern {
    Regex(Regex),
    /// Minimum length 8, at least one lowercase, one uppercase, one digit,
    /// one non-word character.
    Password,
}

impl Pattern {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Regex(re) => re.is_match(value),
            Self::Password => {
                value.chars().count() >= 8
                    && value.chars().any(|c| c.is_ascii_lowercase())
                    && value.chars().any(|c| c.is_ascii_uppercase())
                    && value.chars().any(|c| c.is_ascii_digit())
                    && value.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_'))
            }
        }
    }
}

/// Resolve the pattern for a field.
///
/// An explicit pre-compiled override wins unconditionally. Otherwise the
/// declared kind dispatches to a built-in rule; kinds without a dedicated
/// rule fall back to the generic token pattern. Pure and deterministic.
pub fn resolve(field: &Field) -> Pattern {
    if let Some(re) = field.pattern_override() {
        return Pattern::Regex(re);
    }

    match field.kind() {
        FieldKind::Password => Pattern::Password,
        FieldKind::Email => Pattern::Regex(EMAIL.clone()),
        FieldKind::Url => Pattern::Regex(URL.clone()),
        FieldKind::Date => match field.format_hint().as_deref() {
            Some("dd/mm/yyyy") | Some("dd-mm-yyyy") => Pattern::Regex(DATE_DMY.clone()),
            _ => Pattern::Regex(DATE_MDY.clone()),
        },
        FieldKind::Time => match field.format_hint().as_deref() {
            Some("hh:mm") | Some("hh:MM") => Pattern::Regex(TIME_12.clone()),
            _ => Pattern::Regex(TIME_24.clone()),
        },
        _ => Pattern::Regex(FALLBACK.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(field: &Field, value: &str) -> bool {
        resolve(field).matches(value)
    }

    #[test]
    fn email_is_loose() {
        let field = Field::email();
        assert!(matches(&field, "a@b.co"));
        assert!(!matches(&field, "not-an-email"));
        assert!(!matches(&field, "a@b"));
    }

    #[test]
    fn url_accepts_scheme_and_bare_www() {
        let field = Field::url();
        assert!(matches(&field, "https://example.com"));
        assert!(matches(&field, "http://example.org/path"));
        assert!(matches(&field, "www.example.com"));
        assert!(!matches(&field, "example.com"));
        assert!(!matches(&field, "https://nodots"));
    }

    #[test]
    fn date_defaults_to_month_first() {
        let field = Field::date();
        assert!(matches(&field, "12/31/2020"));
        assert!(matches(&field, "01-09-1999"));
        assert!(matches(&field, "01.09.2021"));
        assert!(!matches(&field, "31/12/2020"));
        assert!(!matches(&field, "13/01/2020"));
    }

    #[test]
    fn date_hint_swaps_day_and_month() {
        let field = Field::date().format("dd/mm/yyyy");
        assert!(matches(&field, "31/12/2020"));
        assert!(!matches(&field, "12/31/2020"));

        let dashed = Field::date().format("dd-mm-yyyy");
        assert!(matches(&dashed, "31-12-2020"));
    }

    #[test]
    fn unknown_date_hint_falls_back() {
        let field = Field::date().format("yyyy/mm/dd");
        assert!(matches(&field, "12/31/2020"));
        assert!(!matches(&field, "2020/12/31"));
    }

    #[test]
    fn time_defaults_to_24_hour() {
        let field = Field::time();
        assert!(matches(&field, "23:59"));
        assert!(matches(&field, "00:00"));
        assert!(!matches(&field, "24:00"));
        assert!(!matches(&field, "9:30"));
    }

    #[test]
    fn time_hint_selects_12_hour_clock() {
        let field = Field::time().format("hh:mm");
        assert!(matches(&field, "12:30"));
        assert!(!matches(&field, "13:30"));

        let upper = Field::time().format("HH:MM");
        assert!(matches(&upper, "13:30"));
    }

    #[test]
    fn password_needs_all_four_classes_and_length() {
        let field = Field::password();
        assert!(matches(&field, "Abcdef1!"));
        assert!(!matches(&field, "Abcde1!")); // too short
        assert!(!matches(&field, "abcdef1!")); // no uppercase
        assert!(!matches(&field, "ABCDEF1!")); // no lowercase
        assert!(!matches(&field, "Abcdefg!")); // no digit
        assert!(!matches(&field, "Abcdefg1")); // no symbol
    }

    #[test]
    fn fallback_is_unanchored() {
        let field = Field::text();
        assert!(matches(&field, "ok"));
        assert!(!matches(&field, "x"));
        // Partial match inside a longer value still validates.
        assert!(matches(&field, "ab !!!!!"));
    }

    #[test]
    fn explicit_override_wins() {
        let field = Field::email().pattern(regex::Regex::new(r"^\d{4}$").unwrap());
        assert!(matches(&field, "1234"));
        assert!(!matches(&field, "a@b.co"));
    }

    #[test]
    fn resolve_is_deterministic() {
        let field = Field::date().format("dd/mm/yyyy");
        for _ in 0..3 {
            assert!(resolve(&field).matches("31/12/2020"));
        }
    }
}
