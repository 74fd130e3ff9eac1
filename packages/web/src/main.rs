use dioxus::prelude::*;
use site::SiteConfig;

use views::{English, Entry, French};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Entry {},
    #[layout(SiteLayout)]
        #[route("/en")]
        English {},
        #[route("/fr")]
        French {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}

#[component]
fn App() -> Element {
    let config = use_context_provider(SiteConfig::from_env);
    use_hook(move || {
        tracing::debug!(
            "startup: i18n path={} language key={} theme key={}",
            config.translations_path,
            config.language_storage_key,
            config.theme_storage_key
        );
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "description", content: "Foody POS, the point of sale built for restaurants." }
        ui::SiteTheme {
            Router::<Route> {}
        }
    }
}

/// Locale pages share the header, the language state and the footer. The
/// entry route stays outside so it never loads translations.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        ui::I18nProvider {
            ui::SiteHeader {}
            main { class: "site_container", Outlet::<Route> {} }
            footer { class: "site_footer hint",
                ui::Tr { path: "footer.rights", fallback: "© Foody POS. All rights reserved." }
            }
        }
    }
}
