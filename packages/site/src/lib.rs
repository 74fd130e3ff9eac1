//! This crate contains the platform-independent logic of the site:
//! locale resolution, translation lookup, theme state and redirect planning.
//! The `ui` crate executes these decisions against the browser.

pub mod apply;
pub mod config;
pub mod i18n;
pub mod loader;
pub mod locale;
pub mod redirect;
pub mod storage;
pub mod theme;
pub mod translations;
pub mod url;

pub use config::SiteConfig;
pub use i18n::{
    DocumentEffect, I18nState, LanguageController, LocaleChange, SwitchRequests, SwitchTicket,
};
pub use loader::{load_with_fallback, Loaded, StaticSource, TranslationSource};
pub use locale::{Locale, LocaleHints, LocaleSource, Resolution};
pub use redirect::{RedirectMode, RedirectPlan};
pub use storage::{MemoryStore, PreferenceStore};
pub use theme::{Theme, ThemeController, ThemeState};
pub use translations::TranslationMap;
