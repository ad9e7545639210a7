use contracts::domain::orders::import::{parse_import, ImportError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::item::OrderItem;
use crate::domain::orders::store::use_orders;
use crate::shared::export::export_orders_pdf;
use crate::shared::icons::icon;
use crate::system::admin::use_admin;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// The selected day's order list with PDF export and, for admins, bulk JSON
/// import.
#[component]
pub fn OrderList() -> impl IntoView {
    let store = use_orders();
    let admin = use_admin();

    let orders = Memo::new(move |_| store.orders_for_selected_day());

    let (is_generating_pdf, set_is_generating_pdf) = signal(false);
    let (is_importing, set_is_importing) = signal(false);

    let handle_pdf = move |_| {
        if is_generating_pdf.get_untracked() {
            return;
        }
        let day_orders = orders.get_untracked();
        if day_orders.is_empty() {
            return;
        }
        set_is_generating_pdf.set(true);
        if let Err(e) = export_orders_pdf(&day_orders, &store.selected_day.get_untracked()) {
            log::error!("Failed to generate PDF: {}", e);
            alert("Wystąpił błąd podczas generowania PDF. Spróbuj ponownie.");
        }
        set_is_generating_pdf.set(false);
    };

    // Bulk import: parse the whole file first, then push every entry
    // through the normal create path. A rejected file applies nothing; the
    // cache itself only changes when the live channel echoes the creations.
    let handle_file_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(input) = input else { return };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        set_is_importing.set(true);
        spawn_local(async move {
            match read_file_text(&file).await {
                Ok(text) => match parse_import(&text) {
                    Ok(entries) => {
                        let mut failed = 0usize;
                        for entry in entries {
                            // add_order resolves a missing date to the
                            // selected day.
                            if store.add_order(entry).await.is_err() {
                                failed += 1;
                            }
                        }
                        if failed > 0 {
                            alert(&format!("Nie udało się zaimportować {} zamówień.", failed));
                        }
                    }
                    Err(ImportError::Json(e)) => {
                        log::error!("Import parse error: {}", e);
                        alert("Błąd podczas importu pliku. Upewnij się, że to poprawny plik JSON.");
                    }
                    Err(ImportError::UnrecognizedShape) | Err(ImportError::Empty) => {
                        alert("Nieprawidłowy plik lub brak zamówień w pliku.");
                    }
                },
                Err(e) => {
                    log::error!("Failed to read import file: {}", e);
                    alert("Błąd podczas importu pliku. Upewnij się, że to poprawny plik JSON.");
                }
            }
            // Allow re-selecting the same file.
            input.set_value("");
            set_is_importing.set(false);
        });
    };

    view! {
        <div class="card order-list">
            <div class="order-list__header">
                <h2 class="card__title">"Aktualna lista zamówień"</h2>
                <div class="order-list__toolbar">
                    <Show when=move || !orders.get().is_empty()>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=handle_pdf
                            disabled=Signal::derive(move || is_generating_pdf.get())
                        >
                            {icon("pdf")}
                            {move || if is_generating_pdf.get() { " Generowanie..." } else { " Generuj PDF" }}
                        </Button>
                    </Show>
                    <Show when=move || admin.is_admin.get()>
                        <label
                            class="button button--primary order-list__import-btn"
                            for="order-import-input"
                        >
                            {icon("upload")}
                            {move || if is_importing.get() { " Importowanie..." } else { " Importuj JSON" }}
                        </label>
                        <input
                            id="order-import-input"
                            type="file"
                            accept="application/json"
                            on:change=handle_file_change
                            class="hidden"
                            aria-label="Wybierz plik JSON z zamówieniami"
                        />
                    </Show>
                </div>
            </div>

            {move || {
                let day_orders = orders.get();
                if day_orders.is_empty() {
                    view! {
                        <div class="order-list__empty">
                            {icon("empty")}
                            <p class="order-list__empty-title">"Brak zamówień na ten dzień."</p>
                            <p class="order-list__empty-hint">"Dodaj zamówienie, aby je tutaj zobaczyć!"</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="order-list__items">
                            {day_orders
                                .into_iter()
                                .map(|order| view! { <OrderItem order=order /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

async fn read_file_text(file: &web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("{:?}", e))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}
