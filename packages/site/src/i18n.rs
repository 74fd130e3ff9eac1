use crate::config::SiteConfig;
use crate::loader::{load_with_fallback, TranslationSource};
use crate::locale::{Locale, LocaleHints, LocaleSource};
use crate::storage::PreferenceStore;
use crate::translations::TranslationMap;
use crate::url::with_query_param;

/// The active locale and the translations currently shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct I18nState {
    pub locale: Locale,
    pub translations: TranslationMap,
}

impl I18nState {
    pub fn text(&self, key: &str) -> Option<&str> {
        self.translations.get(key)
    }

    /// Replace the locale. Without a freshly loaded map the previous
    /// translations stay in place.
    pub fn with_locale(self, locale: Locale, loaded: Option<TranslationMap>) -> Self {
        Self {
            locale,
            translations: loaded.unwrap_or(self.translations),
        }
    }
}

/// A completed locale transition, before it reaches the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleChange {
    pub locale: Locale,
    pub rewrite_url: bool,
}

/// One step the browser layer performs on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEffect {
    /// Re-apply the current map to the head and to `[data-i18n]` elements.
    ApplyTranslations,
    /// Set `<html lang>`.
    SetLang(Locale),
    /// `history.replaceState` to this URL, without navigating.
    ReplaceUrl(String),
    /// Fire a `CustomEvent` named `event` with `detail.lang`.
    Dispatch { event: String, locale: Locale },
}

impl LocaleChange {
    /// Effects for this change, in execution order. `href` is the current
    /// page URL; a rewrite is skipped when it is unknown or unparsable.
    pub fn effects(&self, config: &SiteConfig, href: Option<&str>) -> Vec<DocumentEffect> {
        let mut effects = vec![
            DocumentEffect::ApplyTranslations,
            DocumentEffect::SetLang(self.locale),
        ];

        if self.rewrite_url {
            match href.map(|h| with_query_param(h, &config.lang_query_param, self.locale.code())) {
                Some(Ok(url)) => effects.push(DocumentEffect::ReplaceUrl(url)),
                Some(Err(err)) => tracing::debug!("i18n: not rewriting url: {err:#}"),
                None => {}
            }
        }

        effects.push(DocumentEffect::Dispatch {
            event: config.language_event.clone(),
            locale: self.locale,
        });
        effects
    }
}

/// Tracks manual switch requests so that only the latest one is applied.
/// A request is registered before its translations load; when several
/// loads overlap, earlier ones are discarded on completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchRequests {
    latest: u64,
    pending: Option<Locale>,
}

/// Receipt for one registered switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchTicket {
    id: u64,
    pub target: Locale,
}

impl SwitchRequests {
    /// Register a switch to `target`. `None` when `target` is already what
    /// the page will end up showing: the pending target if a load is in
    /// flight, otherwise `active`.
    pub fn request(&mut self, active: Locale, target: Locale) -> Option<SwitchTicket> {
        if self.pending.unwrap_or(active) == target {
            return None;
        }
        self.latest += 1;
        self.pending = Some(target);
        Some(SwitchTicket {
            id: self.latest,
            target,
        })
    }

    /// Whether the finished request should be applied. Only the latest
    /// ticket is accepted; accepting it clears the pending target.
    pub fn settle(&mut self, ticket: SwitchTicket) -> bool {
        if ticket.id != self.latest {
            return false;
        }
        self.pending = None;
        true
    }

    pub fn pending(&self) -> Option<Locale> {
        self.pending
    }
}

/// Computes locale transitions. Holds no page state itself; callers own
/// the `I18nState` and replace it with what these methods return.
pub struct LanguageController<St, Src> {
    store: St,
    source: Src,
    config: SiteConfig,
}

impl<St, Src> LanguageController<St, Src>
where
    St: PreferenceStore,
    Src: TranslationSource,
{
    pub fn new(store: St, source: Src, config: SiteConfig) -> Self {
        Self {
            store,
            source,
            config,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn stored_locale(&self) -> Option<String> {
        self.store.get(&self.config.language_storage_key)
    }

    /// Page-load resolution: URL parameter, then stored preference, then
    /// browser language.
    pub async fn initialize(
        &self,
        url_lang: Option<String>,
        browser_language: Option<String>,
    ) -> (I18nState, LocaleChange) {
        let hints = LocaleHints {
            url: url_lang,
            stored: self.stored_locale(),
            browser: browser_language,
        };
        let resolution = hints.resolve();
        tracing::debug!(
            "i18n: resolved {} from {:?}",
            resolution.locale,
            resolution.source
        );

        let loaded = load_with_fallback(&self.source, resolution.locale).await;
        let state = I18nState::default().with_locale(resolution.locale, loaded.map(|l| l.map));
        self.persist(resolution.locale);

        let change = LocaleChange {
            locale: resolution.locale,
            rewrite_url: resolution.source == LocaleSource::Url,
        };
        (state, change)
    }

    /// Manual switch. `None` when `target` is already active.
    pub async fn switch(
        &self,
        current: &I18nState,
        target: Locale,
    ) -> Option<(I18nState, LocaleChange)> {
        let next = self.prepare_switch(current, target).await?;
        self.persist(target);
        Some(next)
    }

    /// Load `target` without touching the stored preference, so a caller
    /// can still discard the result. `None` when `target` is already active.
    pub async fn prepare_switch(
        &self,
        current: &I18nState,
        target: Locale,
    ) -> Option<(I18nState, LocaleChange)> {
        if current.locale == target {
            return None;
        }

        let loaded = load_with_fallback(&self.source, target).await;
        let state = current.clone().with_locale(target, loaded.map(|l| l.map));
        tracing::debug!("i18n: prepared switch to {target}");

        Some((
            state,
            LocaleChange {
                locale: target,
                rewrite_url: true,
            },
        ))
    }

    pub fn persist(&self, locale: Locale) {
        self.store
            .set(&self.config.language_storage_key, locale.code());
    }
}
