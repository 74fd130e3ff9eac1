use dioxus::prelude::*;
use site::RedirectMode;

/// Root page: only forwards the visitor to `/en` or `/fr`.
#[component]
pub fn Entry() -> Element {
    rsx! { ui::EntryRedirect { mode: RedirectMode::Instant } }
}
