//! Bilingual (English/Spanish) string catalog for the tienda dashboard.
//!
//! Resolution is a pure three-level fallback over two static tables: the
//! requested language, then English, then the key itself. [`resolve`] is
//! total and stateless; it never fails, even for unknown keys. Values are
//! flat strings with no interpolation; callers concatenate dynamic data
//! after resolution.

use std::{fmt, str::FromStr};

mod catalog;

/// Supported interface languages. English is the fallback superset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    /// The other language; the UI toggle is a pure enum flip.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }

    /// Parses a language tag; unknown tags map to `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    /// The tag this language resolves under.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

/// Error for unrecognized language tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError(String);

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language tag: {:?} (expected en or es)", self.0)
    }
}

impl std::error::Error for ParseLanguageError {}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_tag(s).ok_or_else(|| ParseLanguageError(s.to_owned()))
    }
}

/// Resolves `key` for `language`.
///
/// Lookup order: the language's own table, then the English table, then the
/// raw key as a last resort.
///
/// # Examples
///
/// ```
/// # use tienda_i18n::{Language, resolve};
/// assert_eq!(resolve(Language::Es, "label_cluster"), "Grupo");
/// assert_eq!(resolve(Language::En, "label_cluster"), "Cluster");
/// assert_eq!(resolve(Language::Es, "no_such_key"), "no_such_key");
/// ```
#[must_use]
pub fn resolve<'a>(language: Language, key: &'a str) -> &'a str {
    let hit = match language {
        Language::En => catalog::english(key),
        Language::Es => catalog::spanish(key).or_else(|| catalog::english(key)),
    };
    hit.unwrap_or(key)
}

/// Resolves `key` for a raw language tag; unsupported tags fall back to
/// English.
#[must_use]
pub fn resolve_tag<'a>(tag: &str, key: &'a str) -> &'a str {
    resolve(Language::from_tag(tag).unwrap_or_default(), key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_hit_returns_spanish_text() {
        assert_eq!(resolve(Language::Es, "nav_title"), "Panel de Análisis de Compras");
        assert_eq!(resolve(Language::Es, "label_male"), "Masculino");
    }

    #[test]
    fn english_is_the_default_table() {
        assert_eq!(resolve(Language::En, "nav_title"), "Shopping Analytics Dashboard");
    }

    #[test]
    fn unsupported_tag_falls_back_to_english() {
        assert_eq!(resolve_tag("fr", "label_income"), "Monthly Income (MXN)");
    }

    #[test]
    fn unknown_key_returns_the_key_itself() {
        assert_eq!(resolve(Language::En, "nonexistent_key"), "nonexistent_key");
        assert_eq!(resolve(Language::Es, "nonexistent_key"), "nonexistent_key");
    }

    #[test]
    fn toggle_flips_between_the_two_languages() {
        assert_eq!(Language::En.toggled(), Language::Es);
        assert_eq!(Language::Es.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn tags_round_trip() {
        for language in [Language::En, Language::Es] {
            assert_eq!(Language::from_tag(language.tag()), Some(language));
            assert_eq!(language.tag().parse::<Language>(), Ok(language));
        }
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn every_spanish_key_exists_in_english() {
        // English is the fallback superset; a Spanish-only key would make
        // the fallback chain asymmetric.
        for key in catalog::ALL_KEYS {
            assert!(
                catalog::english(key).is_some(),
                "key {key:?} missing from the English table"
            );
        }
    }

    #[test]
    fn resolver_is_stateless_and_deterministic() {
        let first = resolve(Language::Es, "kpi_avg_income");
        let second = resolve(Language::Es, "kpi_avg_income");
        assert_eq!(first, second);
    }
}
