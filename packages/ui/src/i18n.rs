use crate::browser::{self, BrowserStore};
use crate::source::HttpSource;
use dioxus::prelude::*;
use site::{
    DocumentEffect, I18nState, LanguageController, Locale, LocaleChange, SiteConfig,
    SwitchRequests,
};
use std::rc::Rc;

type Controller = LanguageController<BrowserStore, HttpSource>;

/// Handle to the page's language state. Cheap to clone; all clones share
/// the same signal.
#[derive(Clone)]
pub struct I18n {
    state: Signal<I18nState>,
    requests: Signal<SwitchRequests>,
    controller: Rc<Controller>,
}

impl I18n {
    pub fn locale(&self) -> Locale {
        self.state.read().locale
    }

    /// Locale whose translations are still loading, if any.
    pub fn pending(&self) -> Option<Locale> {
        self.requests.read().pending()
    }

    pub fn text_or(&self, key: &str, fallback: &str) -> String {
        text_or(&self.state.read(), key, fallback)
    }

    /// Load and show `target`. Does nothing if it is already active or
    /// already loading. When clicks overlap, only the last one is applied.
    pub fn switch(&self, target: Locale) {
        let active = self.state.peek().locale;
        let mut requests = self.requests;
        let Some(ticket) = requests.write().request(active, target) else {
            return;
        };

        let this = self.clone();
        spawn(async move {
            let current = this.state.peek().clone();
            let prepared = this.controller.prepare_switch(&current, ticket.target).await;
            let mut requests = this.requests;
            if !requests.write().settle(ticket) {
                tracing::debug!("i18n: dropping superseded switch to {}", ticket.target);
                return;
            }
            if let Some((next, change)) = prepared {
                this.controller.persist(ticket.target);
                let mut state = this.state;
                state.set(next);
                this.publish(change);
            }
        });
    }

    async fn initialize(&self) {
        let param = &self.controller.config().lang_query_param;
        let url_lang = browser::location_href().and_then(|href| site::url::query_param(&href, param));

        let (next, change) = self
            .controller
            .initialize(url_lang, browser::browser_language())
            .await;
        let mut state = self.state;
        state.set(next);
        self.publish(change);
    }

    fn publish(&self, change: LocaleChange) {
        let href = browser::location_href();
        for effect in change.effects(self.controller.config(), href.as_deref()) {
            match effect {
                DocumentEffect::ApplyTranslations => {
                    browser::apply_translations(&self.state.peek().translations)
                }
                DocumentEffect::SetLang(locale) => browser::set_root_attribute("lang", locale.code()),
                DocumentEffect::ReplaceUrl(url) => browser::replace_url(&url),
                DocumentEffect::Dispatch { event, locale } => {
                    browser::dispatch_locale_event(&event, locale)
                }
            }
        }
    }
}

/// Translated text for `key`, or `fallback` when the loaded map lacks it.
pub fn text_or(state: &I18nState, key: &str, fallback: &str) -> String {
    state.text(key).unwrap_or(fallback).to_string()
}

/// Provide the `I18n` handle to the component tree and resolve the locale
/// once after mount.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let config = try_use_context::<SiteConfig>().unwrap_or_default();
    let state = use_signal(I18nState::default);
    let requests = use_signal(SwitchRequests::default);

    let i18n = use_context_provider(move || I18n {
        state,
        requests,
        controller: Rc::new(LanguageController::new(
            BrowserStore,
            HttpSource::new(browser::location_href(), &config.translations_path),
            config,
        )),
    });

    use_effect(move || {
        let i18n = i18n.clone();
        spawn(async move {
            i18n.initialize().await;
        });
    });

    rsx! { {children} }
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>()
}

/// Translated fragment. Translations may contain inline markup, so the
/// text is rendered as HTML. Without a translation the fallback stays.
#[component]
pub fn Tr(path: String, #[props(default)] fallback: String) -> Element {
    let html = use_i18n().text_or(&path, &fallback);
    rsx! {
        span { dangerous_inner_html: "{html}" }
    }
}
