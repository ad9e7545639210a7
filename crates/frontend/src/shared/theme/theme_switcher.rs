use leptos::prelude::*;

use super::{use_theme, Theme};
use crate::shared::icons::icon;

/// Light/dark toggle button shown in the navigation bar.
#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="navbar__icon-btn"
            on:click=move |_| ctx.toggle_theme()
            title="Przełącz motyw"
            aria-label="Przełącz motyw"
        >
            {move || match ctx.theme.get() {
                Theme::Light => icon("moon"),
                Theme::Dark => icon("sun"),
            }}
        </button>
    }
}
