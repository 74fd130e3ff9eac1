use crate::{AnchorLink, Tr};
use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { id: "hero",
            div { class: "hero_inner",
                h1 { Tr { path: "hero.title", fallback: "The point of sale built for restaurants" } }
                p { class: "hero_subtitle",
                    Tr { path: "hero.subtitle", fallback: "Take orders, run the kitchen and get paid from one simple app." }
                }
                div { class: "cta_row",
                    AnchorLink { class: "btn primary", href: "#contact",
                        Tr { path: "hero.cta.primary", fallback: "Request a demo" }
                    }
                    AnchorLink { class: "btn", href: "#features",
                        Tr { path: "hero.cta.secondary", fallback: "See features" }
                    }
                }
            }
        }
    }
}

/// One feature card per `features.items.<id>.{title,body}` entry.
#[component]
pub fn Features() -> Element {
    const ITEMS: [(&str, &str, &str); 3] = [
        ("orders", "Fast ordering", "Tableside and counter orders in a few taps."),
        ("kitchen", "Kitchen display", "Tickets reach the kitchen the moment they are placed."),
        ("reports", "Clear reports", "Daily sales and best sellers at a glance."),
    ];

    rsx! {
        section { id: "features", class: "panel",
            h2 { Tr { path: "features.title", fallback: "Everything your floor needs" } }
            div { class: "feature_grid",
                for (id, title, body) in ITEMS {
                    div { key: "{id}", class: "feature_card",
                        h3 { Tr { path: "features.items.{id}.title", fallback: "{title}" } }
                        p { Tr { path: "features.items.{id}.body", fallback: "{body}" } }
                    }
                }
            }
        }
    }
}
