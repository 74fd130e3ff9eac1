use std::fmt;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Parse a supported locale code. Only the exact strings `en` and `fr`
    /// are accepted; `FR` or ` fr ` are rejected like any other value.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "fr" => Some(Locale::Fr),
            _ => None,
        }
    }

    /// `fr`, `fr-FR`, `fr-CA` map to French; every other tag to English.
    pub fn from_browser_language(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("fr") {
            Locale::Fr
        } else {
            Locale::En
        }
    }

    pub fn switch_label(self) -> &'static str {
        match self {
            Locale::En => "Switch to English",
            Locale::Fr => "Passer au français",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Which hint decided the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    Url,
    Stored,
    Browser,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub locale: Locale,
    pub source: LocaleSource,
}

/// Raw locale hints gathered from the page: the `lang` query parameter,
/// the stored preference and `navigator.language`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleHints {
    pub url: Option<String>,
    pub stored: Option<String>,
    pub browser: Option<String>,
}

impl LocaleHints {
    /// First present hint wins, then the winner is validated. An unsupported
    /// winner falls back to English rather than to the next hint.
    pub fn resolve(&self) -> Resolution {
        let candidate = present(&self.url)
            .map(|code| (code.to_string(), LocaleSource::Url))
            .or_else(|| present(&self.stored).map(|code| (code.to_string(), LocaleSource::Stored)))
            .or_else(|| {
                present(&self.browser).map(|tag| {
                    (
                        Locale::from_browser_language(tag).code().to_string(),
                        LocaleSource::Browser,
                    )
                })
            });

        match candidate {
            Some((code, source)) => Resolution {
                locale: Locale::from_code(&code).unwrap_or_default(),
                source,
            },
            None => Resolution {
                locale: Locale::default(),
                source: LocaleSource::Default,
            },
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints(url: Option<&str>, stored: Option<&str>, browser: Option<&str>) -> LocaleHints {
        LocaleHints {
            url: url.map(str::to_string),
            stored: stored.map(str::to_string),
            browser: browser.map(str::to_string),
        }
    }

    #[test]
    fn unsupported_codes_are_rejected() {
        for code in ["de", "es", "", "english", "fr-FR", "e n", "FR", "Fr", " en ", "fr\n"] {
            assert_eq!(Locale::from_code(code), None, "{code:?}");
        }
        assert_eq!(Locale::from_code("fr"), Some(Locale::Fr));
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
    }

    #[test]
    fn non_canonical_spellings_resolve_to_english() {
        let r = hints(Some("FR"), Some("fr"), Some("fr-FR")).resolve();
        assert_eq!(r, Resolution { locale: Locale::En, source: LocaleSource::Url });

        let r = hints(None, Some("Fr"), Some("fr")).resolve();
        assert_eq!(r, Resolution { locale: Locale::En, source: LocaleSource::Stored });

        let r = hints(Some(" fr "), None, None).resolve();
        assert_eq!(r.locale, Locale::En);
    }

    #[test]
    fn browser_tags_reduce_to_two_locales() {
        assert_eq!(Locale::from_browser_language("fr-CA"), Locale::Fr);
        assert_eq!(Locale::from_browser_language("FR"), Locale::Fr);
        assert_eq!(Locale::from_browser_language("en-US"), Locale::En);
        assert_eq!(Locale::from_browser_language("de-DE"), Locale::En);
        assert_eq!(Locale::from_browser_language(""), Locale::En);
    }

    #[test]
    fn invalid_inputs_resolve_to_english() {
        for bad in ["de", "it", "xx", "zh-CN"] {
            assert_eq!(hints(Some(bad), None, None).resolve().locale, Locale::En);
            assert_eq!(hints(None, Some(bad), None).resolve().locale, Locale::En);
        }
        assert_eq!(hints(None, None, Some("ja")).resolve().locale, Locale::En);
    }

    #[test]
    fn url_parameter_wins() {
        let r = hints(Some("fr"), Some("en"), Some("en-US")).resolve();
        assert_eq!(r, Resolution { locale: Locale::Fr, source: LocaleSource::Url });

        let r = hints(Some("en"), Some("fr"), Some("fr-FR")).resolve();
        assert_eq!(r, Resolution { locale: Locale::En, source: LocaleSource::Url });
    }

    #[test]
    fn invalid_url_parameter_still_wins_over_stored() {
        let r = hints(Some("de"), Some("fr"), Some("fr")).resolve();
        assert_eq!(r.locale, Locale::En);
        assert_eq!(r.source, LocaleSource::Url);
    }

    #[test]
    fn stored_then_browser_then_default() {
        let r = hints(None, Some("fr"), Some("en-GB")).resolve();
        assert_eq!(r, Resolution { locale: Locale::Fr, source: LocaleSource::Stored });

        let r = hints(Some(""), None, Some("fr-BE")).resolve();
        assert_eq!(r, Resolution { locale: Locale::Fr, source: LocaleSource::Browser });

        let r = hints(None, None, None).resolve();
        assert_eq!(r, Resolution { locale: Locale::En, source: LocaleSource::Default });
    }
}
