use super::BrowserStore;
use site::{Locale, PreferenceStore, TranslationMap};

impl PreferenceStore for BrowserStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

pub fn location_href() -> Option<String> {
    None
}

pub fn browser_language() -> Option<String> {
    None
}

pub fn prefers_dark() -> bool {
    false
}

pub fn on_color_scheme_change(_on_change: impl FnMut(bool) + 'static) {}

pub fn set_root_attribute(_name: &str, _value: &str) {}

pub fn replace_url(_url: &str) {}

pub fn navigate_replace(url: &str) {
    tracing::debug!("redirect: no browser, not navigating to {url}");
}

pub fn dispatch_locale_event(_name: &str, _locale: Locale) {}

pub fn apply_translations(_map: &TranslationMap) {}

pub fn scroll_to(_selector: &str) -> bool {
    false
}
