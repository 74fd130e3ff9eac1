use crate::browser;
use dioxus::prelude::*;
use site::redirect::{self, RedirectMode, RedirectPlan};
use site::{Locale, SiteConfig};

/// Entry page body: sends the visitor to `./en` or `./fr` based on the
/// browser language.
#[component]
pub fn EntryRedirect(#[props(default)] mode: RedirectMode) -> Element {
    let config = try_use_context::<SiteConfig>().unwrap_or_default();
    let plan = use_hook(|| redirect::plan(mode, browser::browser_language().as_deref(), &config));
    let mut fallback_visible = use_signal(|| false);

    use_effect({
        let plan = plan.clone();
        move || {
            let plan = plan.clone();
            spawn(async move {
                run(plan, move || fallback_visible.set(true)).await;
            });
        }
    });

    rsx! {
        div { id: "auto-redirect", class: "auto_redirect",
            if let Some(message) = plan.message {
                p { class: "redirect_message", "{message}" }
            }
            div {
                id: "language-fallback",
                class: "language_fallback",
                style: if fallback_visible() { "display: block;" } else { "display: none;" },
                for locale in Locale::ALL {
                    a {
                        key: "{locale}",
                        class: "btn",
                        href: redirect::target_path(locale),
                        hreflang: locale.code(),
                        {fallback_label(locale)}
                    }
                }
            }
        }
    }
}

async fn run(plan: RedirectPlan, reveal_fallback: impl FnOnce()) {
    if !plan.navigate_after.is_zero() {
        gloo_timers::future::sleep(plan.navigate_after).await;
    }
    tracing::debug!("redirect: {} -> {}", plan.locale, plan.target);
    browser::navigate_replace(&plan.target);

    // Still running means navigation did not happen (yet).
    if let Some(delay) = plan.reveal_fallback_after {
        gloo_timers::future::sleep(delay).await;
        reveal_fallback();
    }
}

fn fallback_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "English",
        Locale::Fr => "Français",
    }
}
