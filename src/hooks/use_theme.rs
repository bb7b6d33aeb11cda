use gloo::events::EventListener;
use gloo_storage::Storage;
use std::rc::Rc;
use web_sys::wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::models::theme::{Theme, ThemeStore, initial_theme};

const STORAGE_KEY: &str = "nem-dashboard-theme";

/// Theme preference persisted in the browser's localStorage.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<Theme> {
        match gloo_storage::LocalStorage::get(STORAGE_KEY) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::debug!(error = %e, "no stored theme, using default");
                None
            }
        }
    }

    fn save(&self, theme: Theme) -> Result<(), AppError> {
        gloo_storage::LocalStorage::set(STORAGE_KEY, theme)
            .map_err(|e| AppError::ConfigError(format!("Failed to save theme: {e}")))
    }
}

/// Store injected into the theme provider.
#[derive(Clone)]
pub struct ThemeStoreHandle(pub Rc<dyn ThemeStore>);

impl ThemeStoreHandle {
    pub fn new(store: impl ThemeStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl PartialEq for ThemeStoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Value published by the theme provider
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,           // User's preference
    pub effective_theme: Theme, // Resolved theme
    pub toggle: Callback<()>,
    pub set_theme: Callback<Theme>,
}

impl Default for ThemeHandle {
    /// What consumers see outside a provider: dark, with inert callbacks.
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            effective_theme: Theme::default(),
            toggle: Callback::from(|()| ()),
            set_theme: Callback::from(|_| ()),
        }
    }
}

/// Owns the theme state for a provider backed by `store`.
#[hook]
pub fn use_theme_state(store: ThemeStoreHandle) -> ThemeHandle {
    let theme = {
        let store = store.clone();
        use_state(move || initial_theme(store.0.as_ref()))
    };

    // Detect system preference
    let system_preference = use_state(detect_system_preference);

    let effective_theme = theme.resolve(*system_preference);

    // Effect: Apply theme to DOM
    use_effect_with(effective_theme, move |theme| {
        apply_theme_to_dom(*theme);
        || ()
    });

    // Effect: Listen to system preference changes
    {
        let system_preference = system_preference.clone();
        use_effect_with((), move |()| {
            let listener = setup_media_query_listener(system_preference.setter());
            move || drop(listener)
        });
    }

    // Effect: Persist theme
    use_effect_with(*theme, move |theme| {
        if let Err(e) = store.0.save(*theme) {
            tracing::warn!(error = %e, "theme not persisted");
        }
        || ()
    });

    let toggle = {
        let theme = theme.clone();
        let system = *system_preference;
        Callback::from(move |()| theme.set(theme.toggled(system)))
    };

    let set_theme = {
        let theme = theme.clone();
        Callback::from(move |new_theme| theme.set(new_theme))
    };

    ThemeHandle {
        theme: *theme,
        effective_theme,
        toggle,
        set_theme,
    }
}

/// Reads the theme published by the nearest provider.
#[hook]
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>().unwrap_or_default()
}

/// Detect system's preferred color scheme
fn detect_system_preference() -> Theme {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(Theme::Dark, |mq| {
            if mq.matches() { Theme::Dark } else { Theme::Light }
        })
}

/// Apply theme to DOM by setting data-theme attribute on <html>
fn apply_theme_to_dom(theme: Theme) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = html.set_attribute("data-theme", theme.resolve(Theme::Light).as_str());
    }
}

fn setup_media_query_listener(setter: UseStateSetter<Theme>) -> Option<EventListener> {
    let mq = web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    let target = mq.dyn_into::<web_sys::EventTarget>().ok()?;
    Some(EventListener::new(&target, "change", move |_event| {
        setter.set(detect_system_preference());
    }))
}
