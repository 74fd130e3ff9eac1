use crate::config::SiteConfig;
use crate::locale::Locale;
use std::time::Duration;

/// How the entry page sends visitors to their locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectMode {
    /// Replace navigation right away; reveal fallback links if still here later.
    #[default]
    Instant,
    /// Show a short message first, then navigate.
    Announced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectPlan {
    pub locale: Locale,
    pub target: String,
    pub navigate_after: Duration,
    pub reveal_fallback_after: Option<Duration>,
    pub message: Option<&'static str>,
}

/// Only the primary subtag counts: `fr-CA` is French, `frr` is not.
pub fn redirect_locale(browser_language: Option<&str>) -> Locale {
    let primary = browser_language
        .unwrap_or_default()
        .split('-')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    if primary == "fr" {
        Locale::Fr
    } else {
        Locale::En
    }
}

pub fn target_path(locale: Locale) -> String {
    format!("./{}", locale.code())
}

pub fn announcement(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Taking you to the English site…",
        Locale::Fr => "Redirection vers le site en français…",
    }
}

pub fn plan(mode: RedirectMode, browser_language: Option<&str>, config: &SiteConfig) -> RedirectPlan {
    let locale = redirect_locale(browser_language);
    let target = target_path(locale);
    match mode {
        RedirectMode::Instant => RedirectPlan {
            locale,
            target,
            navigate_after: Duration::ZERO,
            reveal_fallback_after: Some(config.fallback_reveal_delay),
            message: None,
        },
        RedirectMode::Announced => RedirectPlan {
            locale,
            target,
            navigate_after: config.announce_delay,
            reveal_fallback_after: None,
            message: Some(announcement(locale)),
        },
    }
}
