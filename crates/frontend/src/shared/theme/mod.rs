//! Light/dark colour scheme.
//!
//! Dark mode is the `dark` class on `<html>` (Tailwind `darkMode: "class"`).
//! The choice is persisted in localStorage; without a stored choice the
//! system `prefers-color-scheme` decides.

use crate::shared::config::use_site_config;
use contracts::enums::ColorTheme;
use leptos::prelude::*;
use web_sys::window;

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Load the stored theme value from localStorage.
fn load_stored_theme(storage_key: &str) -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(storage_key).ok().flatten())
}

/// Save theme to localStorage.
fn save_theme_to_storage(storage_key: &str, theme: ColorTheme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if storage.set_item(storage_key, theme.as_str()).is_err() {
            log::warn!("Could not persist theme '{}'", theme.as_str());
        }
    }
}

/// Set or clear the `dark` class on the root element.
fn apply_theme_class(theme: ColorTheme) {
    let root = match window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    {
        Some(root) => root,
        None => return,
    };
    let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<ColorTheme>,
    storage_key: StoredValue<String>,
}

impl ThemeContext {
    pub fn set_theme(&self, theme: ColorTheme) {
        self.theme.set(theme);
        self.storage_key
            .with_value(|key| save_theme_to_storage(key, theme));
        apply_theme_class(theme);
        log::debug!("Theme set to {}", theme.as_str());
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Resolves the initial theme and provides [`ThemeContext`] to children.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let config = use_site_config();
    let storage_key = config.theme.storage_key.clone();

    let stored = load_stored_theme(&storage_key);
    let initial = ColorTheme::initial(stored.as_deref(), prefers_dark());
    apply_theme_class(initial);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial),
        storage_key: StoredValue::new(storage_key),
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Header button flipping between light and dark.
///
/// The light icon is visible while dark mode is active and vice versa.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let is_dark = move || ctx.theme.get().is_dark();

    view! {
        <button
            id="theme-toggle"
            type="button"
            class="theme-toggle"
            aria-label="Toggle dark mode"
            on:click=move |_| ctx.toggle()
        >
            <svg
                id="theme-toggle-dark-icon"
                class=move || if is_dark() { "w-5 h-5 hidden" } else { "w-5 h-5" }
                fill="currentColor"
                viewBox="0 0 20 20"
            >
                <path d="M17.293 13.293A8 8 0 016.707 2.707a8.001 8.001 0 1010.586 10.586z"></path>
            </svg>
            <svg
                id="theme-toggle-light-icon"
                class=move || if is_dark() { "w-5 h-5" } else { "w-5 h-5 hidden" }
                fill="currentColor"
                viewBox="0 0 20 20"
            >
                <path d="M10 2a1 1 0 011 1v1a1 1 0 11-2 0V3a1 1 0 011-1zm0 12a4 4 0 100-8 4 4 0 000 8z"></path>
            </svg>
        </button>
    }
}
