use log::{info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::error::{body, UiError};
use crate::storage::{BrowserStorage, KeyValueStore};

const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Only an explicit `"dark"` turns dark mode on.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

pub struct ThemePreference<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Theme {
        Theme::from_stored(self.store.get(config::THEME_KEY).as_deref())
    }

    pub fn save(&self, theme: Theme) {
        self.store.set(config::THEME_KEY, theme.as_str());
    }

    /// Flips `current`, persists the result and returns it.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.save(next);
        next
    }
}

fn apply_theme(theme: Theme) -> Result<(), UiError> {
    body()?
        .class_list()
        .toggle_with_force(DARK_MODE_CLASS, theme.is_dark())?;
    Ok(())
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(|| {
        let saved = ThemePreference::new(BrowserStorage::local()).load();
        if saved.is_dark() {
            info!("Restoring saved dark mode");
        }
        saved
    });

    use_effect_with_deps(
        move |theme| {
            if let Err(err) = apply_theme(*theme) {
                warn!("Could not apply {} theme: {}", theme.as_str(), err);
            }
            || ()
        },
        *theme,
    );

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = ThemePreference::new(BrowserStorage::local()).toggle(*theme);
            theme.set(next);
        })
    };

    html! {
        <button id="theme-toggle" class="theme-toggle" aria-label="Cambiar tema" {onclick}>
            { if theme.is_dark() { "☀" } else { "☾" } }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    #[test]
    fn only_dark_restores_dark() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn toggle_persists_matching_value() {
        let store = MemoryStore::default();
        let preference = ThemePreference::new(store.clone());

        let theme = preference.toggle(preference.load());
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));

        let theme = preference.toggle(theme);
        assert_eq!(theme, Theme::Light);
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn two_toggles_restore_the_stored_preference() {
        let store = MemoryStore::default();
        store.set("theme", "dark");
        let preference = ThemePreference::new(store.clone());

        let start = preference.load();
        let end = preference.toggle(preference.toggle(start));
        assert_eq!(end, start);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn persisted_value_tracks_dark_state() {
        let store = MemoryStore::default();
        let preference = ThemePreference::new(store.clone());
        let mut theme = preference.load();
        for _ in 0..5 {
            theme = preference.toggle(theme);
            assert_eq!(store.get("theme").as_deref() == Some("dark"), theme.is_dark());
            assert_eq!(preference.load(), theme);
        }
    }
}
