use std::time::Duration;

/// Runtime settings shared by the language and theme components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub language_storage_key: String,
    pub theme_storage_key: String,
    /// Path (relative to the page URL) holding `<code>.json` translation files.
    pub translations_path: String,
    pub lang_query_param: String,
    pub language_event: String,
    pub fallback_reveal_delay: Duration,
    pub announce_delay: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            language_storage_key: "foody-language".to_string(),
            theme_storage_key: "foody-theme".to_string(),
            translations_path: "/assets/i18n".to_string(),
            lang_query_param: "lang".to_string(),
            language_event: "languageChanged".to_string(),
            fallback_reveal_delay: Duration::from_millis(2000),
            announce_delay: Duration::from_millis(1500),
        }
    }
}

impl SiteConfig {
    /// Read overrides from the process environment. In the browser there is
    /// no environment, so this yields the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = non_empty(lookup("SITE_LANGUAGE_KEY")) {
            config.language_storage_key = v;
        }
        if let Some(v) = non_empty(lookup("SITE_THEME_KEY")) {
            config.theme_storage_key = v;
        }
        if let Some(v) = non_empty(lookup("SITE_I18N_PATH")) {
            config.translations_path = v;
        }
        if let Some(v) = non_empty(lookup("SITE_LANG_PARAM")) {
            config.lang_query_param = v;
        }
        if let Some(ms) = millis(lookup("SITE_REDIRECT_FALLBACK_MS")) {
            config.fallback_reveal_delay = ms;
        }
        if let Some(ms) = millis(lookup("SITE_REDIRECT_ANNOUNCE_MS")) {
            config.announce_delay = ms;
        }

        config
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn millis(value: Option<String>) -> Option<Duration> {
    let raw = non_empty(value)?;
    match raw.parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(_) => {
            tracing::warn!("config: ignoring non-numeric delay {raw:?}");
            None
        }
    }
}
