use super::BrowserStore;
use site::apply::{self, Patch};
use site::{Locale, PreferenceStore, TranslationMap};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MediaQueryListEvent, Storage};

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            tracing::debug!("storage: localStorage unavailable, not saving {key}");
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            tracing::debug!("storage: setItem({key}) failed: {err:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

pub fn location_href() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

pub fn browser_language() -> Option<String> {
    web_sys::window()?.navigator().language()
}

pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(site::theme::DARK_SCHEME_QUERY).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Call `on_change(prefers_dark)` whenever the OS colour scheme flips.
/// The listener lives as long as the page.
pub fn on_color_scheme_change(mut on_change: impl FnMut(bool) + 'static) {
    let Some(mql) = web_sys::window()
        .and_then(|w| w.match_media(site::theme::DARK_SCHEME_QUERY).ok().flatten())
    else {
        return;
    };

    let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |evt: MediaQueryListEvent| {
        on_change(evt.matches());
    });
    if mql
        .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
        .is_ok()
    {
        listener.forget();
    }
}

pub fn set_root_attribute(name: &str, value: &str) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute(name, value);
    }
}

/// Rewrite the address bar without navigating.
pub fn replace_url(url: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(err) = history.replace_state_with_url(&js_sys::Object::new(), "", Some(url)) {
        tracing::debug!("history: replaceState failed: {err:?}");
    }
}

pub fn navigate_replace(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().replace(url) {
            tracing::warn!("redirect: location.replace({url}) failed: {err:?}");
        }
    }
}

/// Dispatch `CustomEvent(name, { detail: { lang } })` on `window`.
pub fn dispatch_locale_event(name: &str, locale: Locale) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let detail = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&detail, &JsValue::from_str("lang"), &JsValue::from_str(locale.code()));

    let init = web_sys::CustomEventInit::new();
    init.set_detail(&detail);
    match web_sys::CustomEvent::new_with_event_init_dict(name, &init) {
        Ok(event) => {
            let _ = window.dispatch_event(&event);
        }
        Err(err) => tracing::debug!("i18n: could not build {name} event: {err:?}"),
    }
}

/// Apply `map` to the document head and every `[data-i18n]` element.
pub fn apply_translations(map: &TranslationMap) {
    let Some(doc) = document() else {
        return;
    };

    let head = apply::document_patch(map);
    if let Some(title) = head.title {
        doc.set_title(&title);
    }
    if let Some(description) = head.description {
        if let Ok(Some(meta)) = doc.query_selector(r#"meta[name="description"]"#) {
            let _ = meta.set_attribute("content", &description);
        }
    }

    let Ok(nodes) = doc.query_selector_all(apply::SELECTOR) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(key) = element.get_attribute(apply::KEY_ATTR) else {
            continue;
        };
        let target = element.get_attribute(apply::TARGET_ATTR);
        match apply::patch_for(map, &key, target.as_deref()) {
            Some(Patch::Attribute { name, value }) => {
                let _ = element.set_attribute(&name, &value);
            }
            Some(Patch::Content(html)) => element.set_inner_html(&html),
            None => {}
        }
    }
}

/// Smooth-scroll the element matching `selector` to the top of the viewport.
pub fn scroll_to(selector: &str) -> bool {
    let Some(target) = document()
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
