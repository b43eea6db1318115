//! Theme preference toggle

use crate::config::ThemeDefault;

/// The two display themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl From<ThemeDefault> for Theme {
    fn from(value: ThemeDefault) -> Self {
        match value {
            ThemeDefault::Light => Theme::Light,
            ThemeDefault::Dark => Theme::Dark,
        }
    }
}

/// Persistence for the visitor's explicit theme choice.
pub trait PreferenceStore {
    fn load(&self) -> Option<Theme>;
    fn save(&mut self, theme: Theme);
}

/// Simple in-memory store, used in tests and anywhere without real
/// persistence.
#[derive(Debug, Default)]
pub struct InMemoryPreferences(Option<Theme>);

impl PreferenceStore for InMemoryPreferences {
    fn load(&self) -> Option<Theme> {
        self.0
    }

    fn save(&mut self, theme: Theme) {
        self.0 = Some(theme);
    }
}

/// Displayed theme state.
///
/// Initialized from the persisted choice when there is one, otherwise
/// from the platform preference. The displayed theme follows later
/// platform changes only until the visitor makes one explicit toggle;
/// from then on the persisted choice wins permanently.
#[derive(Debug)]
pub struct ThemeState {
    current: Theme,
    /// True once a persisted choice exists
    explicit: bool,
}

impl ThemeState {
    /// Initialize from the store, falling back to the platform
    /// preference, then to the configured default.
    pub fn init(store: &dyn PreferenceStore, platform: Option<Theme>, fallback: Theme) -> Self {
        match store.load() {
            Some(saved) => Self {
                current: saved,
                explicit: true,
            },
            None => Self {
                current: platform.unwrap_or(fallback),
                explicit: false,
            },
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Explicit user action: flip the theme and persist it immediately.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> Theme {
        self.current = self.current.flipped();
        self.explicit = true;
        store.save(self.current);
        self.current
    }

    /// The platform preference changed. Followed only while no
    /// explicit choice exists.
    pub fn platform_changed(&mut self, theme: Theme) {
        if !self.explicit {
            self.current = theme;
        }
    }
}
