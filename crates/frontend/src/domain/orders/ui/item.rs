use contracts::domain::orders::{Order, OrderData};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::orders::store::use_orders;
use crate::shared::icons::icon;
use crate::system::admin::use_admin;

#[component]
fn Detail(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="order-item__detail">
            <span class="order-item__detail-label">{label}</span>
            <p class="order-item__detail-value">{value}</p>
        </div>
    }
}

#[component]
fn EditInput(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="order-item__edit-field">
            <label>{label}</label>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// One order row: read-only details, plus an inline editor and a delete
/// button for admins.
#[component]
pub fn OrderItem(order: Order) -> impl IntoView {
    let store = use_orders();
    let admin = use_admin();

    let id = order.id;
    let (is_editing, set_is_editing) = signal(false);

    let edited_name = RwSignal::new(order.customer_name.clone());
    let edited_type = RwSignal::new(order.kebab_type.clone());
    let edited_size = RwSignal::new(order.size.clone());
    let edited_sauce = RwSignal::new(order.sauce.clone());
    let edited_meat = RwSignal::new(order.meat_type.clone());

    let handle_save = move |_| {
        let data = OrderData {
            customer_name: edited_name.get_untracked(),
            kebab_type: edited_type.get_untracked(),
            size: edited_size.get_untracked(),
            sauce: edited_sauce.get_untracked(),
            meat_type: edited_meat.get_untracked(),
            date: None,
        };
        if !data.is_complete() {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("Wszystkie pola muszą być wypełnione.");
            }
            return;
        }
        spawn_local(async move {
            if store.edit_order(id, data).await.is_ok() {
                set_is_editing.set(false);
            }
        });
    };

    let handle_delete = move |_| {
        spawn_local(async move {
            let _ = store.delete_order(id).await;
        });
    };

    let order_view = order.clone();
    move || {
        if is_editing.get() {
            view! {
                <div class="order-item order-item--editing">
                    <h3 class="order-item__edit-title">
                        {format!("Edytowanie zamówienia dla: {}", order_view.customer_name)}
                    </h3>
                    <div class="order-item__edit-grid">
                        <EditInput label="Twoje imię" placeholder="np. Jan" value=edited_name />
                        <EditInput label="Typ kebaba" placeholder="np. Pita, Bułka" value=edited_type />
                        <EditInput label="Wielkość" placeholder="np. Standard, XL" value=edited_size />
                        <EditInput label="Sos" placeholder="np. Mieszany, Ostry" value=edited_sauce />
                        <EditInput label="Mięso" placeholder="np. Wołowina, Kurczak" value=edited_meat />
                    </div>
                    <div class="order-item__edit-actions">
                        <button class="btn btn--ghost" on:click=move |_| set_is_editing.set(false)>
                            "Anuluj"
                        </button>
                        <button class="btn btn--primary" on:click=handle_save>
                            "Zapisz zmiany"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="order-item">
                    <div class="order-item__head">
                        <h3 class="order-item__customer">{order_view.customer_name.clone()}</h3>
                        <Show when=move || admin.is_admin.get()>
                            <div class="order-item__actions">
                                <button
                                    class="order-item__icon-btn order-item__icon-btn--edit"
                                    on:click=move |_| set_is_editing.set(true)
                                    aria-label="Edytuj zamówienie"
                                >
                                    {icon("edit")}
                                </button>
                                <button
                                    class="order-item__icon-btn order-item__icon-btn--delete"
                                    on:click=handle_delete
                                    aria-label="Usuń zamówienie"
                                >
                                    {icon("trash")}
                                </button>
                            </div>
                        </Show>
                    </div>
                    <div class="order-item__details">
                        <Detail label="Typ" value=order_view.kebab_type.clone() />
                        <Detail label="Rozmiar" value=order_view.size.clone() />
                        <Detail label="Sos" value=order_view.sauce.clone() />
                        <Detail label="Mięso" value=order_view.meat_type.clone() />
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
