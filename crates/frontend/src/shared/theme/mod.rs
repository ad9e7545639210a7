//! Theme management module for the application.
//!
//! Provides a context-based light/dark theme with persistence in
//! localStorage. When no preference is stored, the initial theme follows the
//! host's `prefers-color-scheme` media query.

mod theme_switcher;

pub use theme_switcher::ThemeSwitcher;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for the `data-theme`
    /// attribute).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

const THEME_STORAGE_KEY: &str = "theme";

/// Load theme from localStorage, falling back to the host color-scheme
/// preference.
fn load_theme_from_storage() -> Theme {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|s| serde_json::from_str(&s).ok());
    match stored {
        Some(theme) => theme,
        None => {
            if prefers_dark() {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
    }
}

/// Save theme to localStorage.
fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Ok(encoded) = serde_json::to_string(&theme) {
            let _ = storage.set_item(THEME_STORAGE_KEY, &encoded);
        }
    }
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Apply theme by setting the `data-theme` attribute on the document
/// element; the stylesheet keys all colors off it.
fn apply_theme(theme: Theme) {
    let root = match window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    {
        Some(root) => root,
        None => return,
    };
    let _ = root.set_attribute("data-theme", theme.as_str());
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }

    /// Flip between light and dark.
    pub fn toggle_theme(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    // Load theme from storage on initial render
    let initial_theme = load_theme_from_storage();
    let theme = RwSignal::new(initial_theme);

    apply_theme(initial_theme);

    let context = ThemeContext { theme };
    provide_context(context);

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}
