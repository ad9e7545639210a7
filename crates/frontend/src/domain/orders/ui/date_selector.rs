use chrono::Utc;
use leptos::prelude::*;

use crate::domain::orders::store::{today_string, use_orders};
use crate::shared::date_utils::display_day_label;
use crate::shared::icons::icon;

/// Day picker for the order journal. Selection is capped at today;
/// selecting a day re-fetches it from the backend.
#[component]
pub fn DateSelector() -> impl IntoView {
    let store = use_orders();

    let label = move || {
        let selected = store.selected_day.get();
        display_day_label(&selected, Utc::now().date_naive())
    };

    view! {
        <div class="date-selector">
            <div>
                <h2 class="date-selector__title">"Dziennik Zamówień"</h2>
                <p class="date-selector__subtitle">
                    "Zamówienia na dzień: "
                    <span class="date-selector__day">{label}</span>
                </p>
            </div>
            <div class="date-selector__picker">
                <label for="date-picker" class="sr-only">"Wybierz datę"</label>
                {icon("calendar")}
                <input
                    id="date-picker"
                    type="date"
                    prop:value=move || store.selected_day.get()
                    max=today_string()
                    on:change=move |ev| store.select_day(event_target_value(&ev))
                />
            </div>
        </div>
    }
}
