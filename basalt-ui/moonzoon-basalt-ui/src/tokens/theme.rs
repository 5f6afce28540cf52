// Theme Management System
// User preference (light/dark/system) resolved against the OS color-scheme
// signal into an effective light/dark theme that all color tokens react to.

use std::cell::{Cell, RefCell};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use zoon::*;

/// Local storage key holding the persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// User-chosen display mode. `System` defers to the OS color-scheme signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

/// Concrete rendering mode after resolving `System`. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl ThemePreference {
    /// Parse a persisted storage value. Non-conforming values fall back
    /// to `System`.
    pub fn from_storage_value(value: &str) -> Self {
        match value {
            "light" => ThemePreference::Light,
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::System,
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Cycle order used by the theme toggle: system -> light -> dark -> system.
    pub fn next(self) -> Self {
        match self {
            ThemePreference::System => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::System,
        }
    }
}

impl Theme {
    pub fn attr_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Resolve the effective theme from a preference and the OS dark-mode signal.
pub fn resolve_theme(preference: ThemePreference, os_prefers_dark: bool) -> Theme {
    match preference {
        ThemePreference::Light => Theme::Light,
        ThemePreference::Dark => Theme::Dark,
        ThemePreference::System => {
            if os_prefers_dark {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
    }
}

static THEME_PREFERENCE: Lazy<Mutable<ThemePreference>> =
    Lazy::new(|| Mutable::new(ThemePreference::System));

static EFFECTIVE_THEME: Lazy<Mutable<Theme>> = Lazy::new(|| Mutable::new(Theme::Light));

// False until `init_theme` has read storage. Controls render placeholders
// so controls never show a wrong preference before hydration.
static THEME_HYDRATED: Lazy<Mutable<bool>> = Lazy::new(|| Mutable::new(false));

struct MediaListener {
    query: web_sys::MediaQueryList,
    callback: Closure<dyn FnMut()>,
}

thread_local! {
    static MEDIA_LISTENER: RefCell<Option<MediaListener>> = const { RefCell::new(None) };
    static LAST_APPLIED: Cell<Option<(Theme, ThemePreference)>> = const { Cell::new(None) };
    static LAST_PERSISTED: Cell<Option<ThemePreference>> = const { Cell::new(None) };
}

/// Initialize the theme system: hydrate the preference from local storage,
/// publish the effective theme, bridge it to the document root, and register
/// the OS color-scheme listener. Safe to call again after `teardown_theme`;
/// the listener is never registered twice.
pub fn init_theme() {
    let stored = local_storage()
        .get(THEME_STORAGE_KEY)
        .unwrap_or(Ok(String::new()))
        .unwrap_or_default();

    let preference = ThemePreference::from_storage_value(&stored);
    if preference.storage_value() == stored {
        LAST_PERSISTED.with(|last| last.set(Some(preference)));
    }
    THEME_PREFERENCE.set_neq(preference);
    sync_effective_theme();
    register_media_listener();
    THEME_HYDRATED.set_neq(true);
}

/// Deregister the OS color-scheme listener. Paired 1:1 with `init_theme`.
pub fn teardown_theme() {
    MEDIA_LISTENER.with(|listener| {
        if let Some(listener) = listener.borrow_mut().take() {
            let _ = listener.query.remove_event_listener_with_callback(
                "change",
                listener.callback.as_ref().unchecked_ref(),
            );
        }
    });
    THEME_HYDRATED.set_neq(false);
}

/// Effective theme as a signal for reactive color tokens and UI.
pub fn theme() -> impl Signal<Item = Theme> {
    EFFECTIVE_THEME.signal()
}

/// Raw preference as a signal, for controls that display it.
pub fn theme_preference() -> impl Signal<Item = ThemePreference> {
    THEME_PREFERENCE.signal()
}

/// False until the persisted preference has been read.
pub fn theme_hydrated() -> impl Signal<Item = bool> {
    THEME_HYDRATED.signal()
}

/// Current effective theme (non-reactive, for event handlers).
pub fn current_theme() -> Theme {
    EFFECTIVE_THEME.get()
}

/// Current preference (non-reactive, for event handlers).
pub fn current_preference() -> ThemePreference {
    THEME_PREFERENCE.get()
}

/// Set and persist the preference, then recompute the effective theme and
/// notify subscribers. Repeating the same value writes storage at most once
/// and leaves the document root untouched.
pub fn set_theme_preference(new_preference: ThemePreference) {
    THEME_PREFERENCE.set_neq(new_preference);

    let already_persisted = LAST_PERSISTED.with(|last| last.get() == Some(new_preference));
    if !already_persisted {
        let _ = local_storage().insert(THEME_STORAGE_KEY, new_preference.storage_value());
        LAST_PERSISTED.with(|last| last.set(Some(new_preference)));
    }

    sync_effective_theme();
}

/// Advance the preference one step in the cycle order.
pub fn cycle_theme_preference() {
    set_theme_preference(current_preference().next());
}

/// Whether the OS currently prefers a dark color scheme.
/// Without a browsing context this reports false (light).
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

fn sync_effective_theme() {
    let preference = THEME_PREFERENCE.get();
    let effective = resolve_theme(preference, system_prefers_dark());
    EFFECTIVE_THEME.set_neq(effective);
    apply_theme_to_document(effective, preference);
}

// The sole bridge to CSS: `dark` marker class, `data-theme` with the
// effective theme, `data-theme-preference` mirroring the raw preference.
fn apply_theme_to_document(effective: Theme, preference: ThemePreference) {
    let unchanged = LAST_APPLIED.with(|last| last.get() == Some((effective, preference)));
    if unchanged {
        return;
    }
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };
    let _ = root
        .class_list()
        .toggle_with_force("dark", effective == Theme::Dark);
    let _ = root.set_attribute("data-theme", effective.attr_value());
    let _ = root.set_attribute("data-theme-preference", preference.storage_value());
    LAST_APPLIED.with(|last| last.set(Some((effective, preference))));
}

fn register_media_listener() {
    let already_registered = MEDIA_LISTENER.with(|listener| listener.borrow().is_some());
    if already_registered {
        return;
    }
    let Some(query) = web_sys::window().and_then(|window| window.match_media(DARK_SCHEME_QUERY).ok().flatten())
    else {
        return;
    };
    let callback: Closure<dyn FnMut()> = Closure::new(|| {
        // Only the `System` preference tracks the OS signal.
        if current_preference() == ThemePreference::System {
            sync_effective_theme();
        }
    });
    if query
        .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
        .is_ok()
    {
        MEDIA_LISTENER.with(|listener| {
            *listener.borrow_mut() = Some(MediaListener { query, callback });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conforming_storage_values_parse_verbatim() {
        assert_eq!(
            ThemePreference::from_storage_value("light"),
            ThemePreference::Light
        );
        assert_eq!(
            ThemePreference::from_storage_value("dark"),
            ThemePreference::Dark
        );
        assert_eq!(
            ThemePreference::from_storage_value("system"),
            ThemePreference::System
        );
    }

    #[test]
    fn non_conforming_storage_values_fall_back_to_system() {
        for value in ["", "DARK", "auto", "0", "darkmode"] {
            assert_eq!(
                ThemePreference::from_storage_value(value),
                ThemePreference::System,
                "expected fallback for {value:?}"
            );
        }
    }

    #[test]
    fn storage_values_round_trip() {
        for preference in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            assert_eq!(
                ThemePreference::from_storage_value(preference.storage_value()),
                preference
            );
        }
    }

    #[test]
    fn fixed_preferences_resolve_verbatim() {
        for os_prefers_dark in [false, true] {
            assert_eq!(
                resolve_theme(ThemePreference::Light, os_prefers_dark),
                Theme::Light
            );
            assert_eq!(
                resolve_theme(ThemePreference::Dark, os_prefers_dark),
                Theme::Dark
            );
        }
    }

    #[test]
    fn system_preference_follows_os_signal() {
        assert_eq!(resolve_theme(ThemePreference::System, false), Theme::Light);
        assert_eq!(resolve_theme(ThemePreference::System, true), Theme::Dark);
    }

    #[test]
    fn cycle_visits_every_preference_once() {
        let start = ThemePreference::System;
        assert_eq!(start.next(), ThemePreference::Light);
        assert_eq!(start.next().next(), ThemePreference::Dark);
        assert_eq!(start.next().next().next(), start);
    }
}
