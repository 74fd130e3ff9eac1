use dioxus::prelude::*;
use site::Locale;

/// EN/FR buttons; the active locale is marked `active` and `aria-current`,
/// a locale still loading is `aria-busy`.
#[component]
pub fn LanguageSwitcher() -> Element {
    let i18n = crate::use_i18n();
    let active = i18n.locale();
    let pending = i18n.pending();

    rsx! {
        div { id: "language-switcher", class: "language_switcher",
            for locale in Locale::ALL {
                button {
                    key: "{locale}",
                    class: if locale == active { "lang-btn active" } else { "lang-btn" },
                    "data-lang": locale.code(),
                    "aria-label": locale.switch_label(),
                    "aria-current": (locale == active).then_some("true"),
                    "aria-busy": (pending == Some(locale)).then_some("true"),
                    onclick: {
                        let i18n = i18n.clone();
                        move |evt: MouseEvent| {
                            evt.prevent_default();
                            i18n.switch(locale);
                        }
                    },
                    {locale.code().to_ascii_uppercase()}
                }
            }
        }
    }
}
