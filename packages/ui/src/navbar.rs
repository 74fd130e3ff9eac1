use crate::{AnchorLink, LanguageSwitcher, ThemeToggle, Tr};
use dioxus::prelude::*;

#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header { class: "site_nav",
            div { class: "site_nav_inner",
                a { class: "brand", href: "#hero",
                    span { class: "brand_mark" }
                    span { class: "brand_name", "Foody POS" }
                }
                nav { class: "nav_links",
                    AnchorLink { class: "nav_link", href: "#features",
                        Tr { path: "nav.features", fallback: "Features" }
                    }
                    AnchorLink { class: "nav_link", href: "#contact",
                        Tr { path: "nav.contact", fallback: "Contact" }
                    }
                }
                div { class: "nav_controls",
                    LanguageSwitcher {}
                    ThemeToggle {}
                }
            }
        }
    }
}
