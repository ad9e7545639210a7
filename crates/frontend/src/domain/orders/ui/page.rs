use leptos::prelude::*;

use super::date_selector::DateSelector;
use super::form::OrderForm;
use super::list::OrderList;

/// The main ordering view: day picker, submission form and the day's list.
#[component]
pub fn OrdersPage() -> impl IntoView {
    view! {
        <DateSelector />
        <div class="orders-grid">
            <div class="orders-grid__form">
                <OrderForm />
            </div>
            <div class="orders-grid__list">
                <OrderList />
            </div>
        </div>
    }
}
