use dioxus::prelude::*;
use ui::{Features, Hero, Tr};

#[component]
pub fn English() -> Element {
    rsx! { Landing {} }
}

#[component]
pub fn French() -> Element {
    rsx! { Landing {} }
}

/// The marketing page. The contact block is plain markup tagged with
/// `data-i18n`, translated in place whenever the locale changes.
#[component]
pub fn Landing() -> Element {
    rsx! {
        Hero {}
        Features {}
        section { id: "contact", class: "panel",
            h2 { Tr { path: "contact.title", fallback: "Get in touch" } }
            p { class: "hint", "data-i18n": "contact.note",
                "Leave your email and we will set up a demo for your restaurant."
            }
            form { class: "contact_form", onsubmit: move |evt: FormEvent| evt.prevent_default(),
                input {
                    r#type: "email",
                    name: "email",
                    placeholder: "you@restaurant.com",
                    "data-i18n": "contact.email_ph",
                    "data-i18n-attr": "placeholder",
                }
                button { class: "btn primary", r#type: "submit", "data-i18n": "contact.submit",
                    "Request a demo"
                }
            }
        }
    }
}
