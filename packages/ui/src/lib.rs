//! This crate contains all shared UI for the workspace.

pub mod browser;

mod source;
pub use source::HttpSource;

mod hero;
pub use hero::{Features, Hero};

mod navbar;
pub use navbar::SiteHeader;

mod scroll;
pub use scroll::AnchorLink;

mod theme;
pub use theme::{use_theme, SiteTheme, ThemeHandle, ThemeToggle};

mod redirect;
pub use redirect::EntryRedirect;

mod language_switcher;
pub use language_switcher::LanguageSwitcher;

mod i18n;
pub use i18n::{use_i18n, I18n, I18nProvider, Tr};
