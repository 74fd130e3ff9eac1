use crate::browser::{self, BrowserStore};
use dioxus::prelude::*;
use site::theme::THEME_ATTR;
use site::{SiteConfig, ThemeController, ThemeState};
use std::rc::Rc;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

#[derive(Clone)]
pub struct ThemeHandle {
    state: Signal<ThemeState>,
    controller: Rc<ThemeController<BrowserStore>>,
}

impl ThemeHandle {
    pub fn state(&self) -> ThemeState {
        *self.state.read()
    }

    pub fn toggle(&self) {
        let mut state = self.state;
        let next = self.controller.toggle(*state.peek());
        state.set(next);
    }
}

pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
}

/// Theme stylesheet plus the light/dark state. The root element's
/// `data-theme` attribute follows the state.
#[component]
pub fn SiteTheme(children: Element) -> Element {
    let config = try_use_context::<SiteConfig>().unwrap_or_default();
    let controller = use_hook(|| Rc::new(ThemeController::new(BrowserStore, &config)));
    let mut state = use_signal(ThemeState::default);
    use_context_provider({
        let controller = controller.clone();
        move || ThemeHandle { state, controller }
    });

    // Runs once after mount: read storage / OS preference, then follow OS
    // changes for as long as the user has not picked a theme.
    use_effect(move || {
        state.set(controller.initialize(browser::prefers_dark()));

        let controller = controller.clone();
        browser::on_color_scheme_change(move |dark| {
            let next = controller.system_changed(*state.peek(), dark);
            state.set(next);
        });
    });

    use_effect(move || {
        let theme = state.read().theme;
        browser::set_root_attribute(THEME_ATTR, theme.code());
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        {children}
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let current = theme.state().theme;

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            "aria-label": current.toggle_label(),
            onclick: move |_| theme.toggle(),
            {current.toggle_icon()}
        }
    }
}
