use dioxus::prelude::*;

/// In-page link that scrolls smoothly to its `#fragment` target. A bare `#`
/// or a missing target falls back to the browser's default behaviour.
#[component]
pub fn AnchorLink(href: String, #[props(default)] class: String, children: Element) -> Element {
    let target = href.clone();
    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                if is_fragment(&target) && crate::browser::scroll_to(&target) {
                    evt.prevent_default();
                }
            },
            {children}
        }
    }
}

fn is_fragment(href: &str) -> bool {
    href.starts_with('#') && href.len() > 1
}
