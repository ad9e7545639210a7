use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::shared::theme::ThemeSwitcher;
use crate::system::admin::use_admin;

/// Switch exposing the admin gate; enabling it prompts for the password.
#[component]
fn AdminToggle() -> impl IntoView {
    let admin = use_admin();

    view! {
        <div class="navbar__admin">
            <span class="navbar__admin-label">"Tryb Admina"</span>
            <button
                class=move || {
                    if admin.is_admin.get() {
                        "admin-switch admin-switch--on"
                    } else {
                        "admin-switch"
                    }
                }
                on:click=move |_| admin.toggle()
                role="switch"
                aria-checked=move || admin.is_admin.get().to_string()
            >
                <span class="admin-switch__knob" aria-hidden="true"></span>
            </button>
        </div>
    }
}

#[component]
pub fn NavigationBar() -> impl IntoView {
    view! {
        <header class="navbar">
            <nav class="navbar__nav">
                <div class="navbar__spacer"></div>
                <ul class="navbar__links">
                    <li class="navbar__link">
                        <A href="/">
                            {icon("kebab")}
                            <span>"Zamówienia"</span>
                        </A>
                    </li>
                    <li class="navbar__link">
                        <A href="/statistics">
                            {icon("chart")}
                            <span>"Statystyki"</span>
                        </A>
                    </li>
                </ul>
                <div class="navbar__actions">
                    <ThemeSwitcher />
                    <AdminToggle />
                </div>
            </nav>
        </header>
    }
}
