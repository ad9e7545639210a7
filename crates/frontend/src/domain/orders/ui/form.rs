use contracts::domain::orders::OrderData;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::orders::store::use_orders;

#[component]
fn InputField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="order-form__field">
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Submission form for a new order on the selected day.
///
/// Submission is rejected client-side while any field is blank, and the
/// fields are cleared only after the backend accepts the order; a failed
/// request must not eat the user's input.
#[component]
pub fn OrderForm() -> impl IntoView {
    let store = use_orders();

    let (customer_name, set_customer_name) = signal(String::new());
    let (kebab_type, set_kebab_type) = signal(String::new());
    let (size, set_size) = signal(String::new());
    let (sauce, set_sauce) = signal(String::new());
    let (meat_type, set_meat_type) = signal(String::new());

    let current_data = move || OrderData {
        customer_name: customer_name.get(),
        kebab_type: kebab_type.get(),
        size: size.get(),
        sauce: sauce.get(),
        meat_type: meat_type.get(),
        date: None,
    };

    let is_form_valid = Memo::new(move |_| current_data().is_complete());

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !is_form_valid.get_untracked() || store.is_adding.get_untracked() {
            return;
        }
        let data = OrderData {
            customer_name: customer_name.get_untracked(),
            kebab_type: kebab_type.get_untracked(),
            size: size.get_untracked(),
            sauce: sauce.get_untracked(),
            meat_type: meat_type.get_untracked(),
            date: None,
        };
        spawn_local(async move {
            if store.add_order(data).await.is_ok() {
                // Reset form fields only on success.
                set_customer_name.set(String::new());
                set_kebab_type.set(String::new());
                set_size.set(String::new());
                set_sauce.set(String::new());
                set_meat_type.set(String::new());
            }
        });
    };

    view! {
        <div class="card order-form">
            <h2 class="card__title">"Dodaj nowe zamówienie"</h2>
            <form on:submit=handle_submit>
                <InputField
                    id="customerName"
                    label="Twoje imię"
                    placeholder="np. Jan"
                    value=customer_name
                    set_value=set_customer_name
                />
                <InputField
                    id="kebabType"
                    label="Typ kebaba"
                    placeholder="np. Pita, Bułka, Tortilla"
                    value=kebab_type
                    set_value=set_kebab_type
                />
                <InputField
                    id="size"
                    label="Wielkość kebaba"
                    placeholder="np. Standard, XL, XXL"
                    value=size
                    set_value=set_size
                />
                <InputField
                    id="sauce"
                    label="Sos"
                    placeholder="np. Mieszany, Ostry, Łagodny"
                    value=sauce
                    set_value=set_sauce
                />
                <InputField
                    id="meatType"
                    label="Typ mięsa"
                    placeholder="np. Wołowina, Kurczak, Mieszane"
                    value=meat_type
                    set_value=set_meat_type
                />
                <button
                    type="submit"
                    class="order-form__submit"
                    disabled=move || !is_form_valid.get() || store.is_adding.get()
                >
                    {move || if store.is_adding.get() { "Dodawanie..." } else { "Dodaj do listy" }}
                </button>
            </form>
        </div>
    }
}
