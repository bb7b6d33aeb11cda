use super::error::AppError;
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// User's theme preference.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
    /// Follow the system colour scheme.
    Auto,
}

impl Theme {
    /// Resolves `Auto` against the system preference.
    pub const fn resolve(self, system: Self) -> Self {
        match self {
            Self::Auto => match system {
                Self::Dark => Self::Dark,
                _ => Self::Light,
            },
            other => other,
        }
    }

    /// Next theme for the toggle button, based on what is currently shown.
    pub const fn toggled(self, system: Self) -> Self {
        match self.resolve(system) {
            Self::Dark => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Icon and label for the toggle button while `self` is the theme on
    /// screen. `Auto` never reaches the screen unresolved.
    pub const fn toggle_hint(self) -> (&'static str, &'static str) {
        match self {
            Self::Dark => ("☀️", "Switch to light mode"),
            Self::Light | Self::Auto => ("🌙", "Switch to dark mode"),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }
}

/// Persistence for the theme preference. Injected into the theme provider so
/// the preference never lives in global state.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme) -> Result<(), AppError>;
}

/// Non-persistent store, used in tests and when storage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    theme: Cell<Option<Theme>>,
}

impl MemoryThemeStore {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme: Cell::new(Some(theme)),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        self.theme.get()
    }

    fn save(&self, theme: Theme) -> Result<(), AppError> {
        self.theme.set(Some(theme));
        Ok(())
    }
}

/// Initial preference: whatever the store holds, otherwise the default.
pub fn initial_theme(store: &dyn ThemeStore) -> Theme {
    store.load().unwrap_or_default()
}
