use crate::config::SiteConfig;
use crate::storage::PreferenceStore;

pub const THEME_ATTR: &str = "data-theme";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn code(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon of the toggle button: what clicking it will switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

/// Current theme, and whether it came from the user rather than the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub theme: Theme,
    pub explicit: bool,
}

impl ThemeState {
    pub fn initial(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.and_then(Theme::from_code) {
            Some(theme) => Self {
                theme,
                explicit: true,
            },
            None => Self {
                theme: Theme::from_prefers_dark(prefers_dark),
                explicit: false,
            },
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            theme: self.theme.toggled(),
            explicit: true,
        }
    }

    /// OS colour-scheme changes only apply while the user has not chosen.
    pub fn on_system_change(self, prefers_dark: bool) -> Self {
        if self.explicit {
            self
        } else {
            Self {
                theme: Theme::from_prefers_dark(prefers_dark),
                explicit: false,
            }
        }
    }
}

pub struct ThemeController<St> {
    store: St,
    key: String,
}

impl<St: PreferenceStore> ThemeController<St> {
    pub fn new(store: St, config: &SiteConfig) -> Self {
        Self {
            store,
            key: config.theme_storage_key.clone(),
        }
    }

    pub fn initialize(&self, prefers_dark: bool) -> ThemeState {
        let state = ThemeState::initial(self.store.get(&self.key).as_deref(), prefers_dark);
        tracing::debug!("theme: initial {:?}", state);
        state
    }

    pub fn toggle(&self, state: ThemeState) -> ThemeState {
        let next = state.toggled();
        self.store.set(&self.key, next.theme.code());
        next
    }

    pub fn system_changed(&self, state: ThemeState, prefers_dark: bool) -> ThemeState {
        let next = state.on_system_change(prefers_dark);
        if next != state {
            tracing::debug!("theme: following system preference -> {}", next.theme.code());
        }
        next
    }
}
