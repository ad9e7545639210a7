//! Reactive order store: signals over the day-keyed cache plus the remote
//! operations that keep it consistent with the backend.
//!
//! Mutations never patch the cache directly: the live channel (or the next
//! day fetch) is the only writer besides [`OrdersStore::load_day`]. Every
//! remote operation reports success or failure to its caller instead of
//! throwing, so the UI decides what the user sees.

use chrono::Utc;
use contracts::domain::orders::{cache, resolve_date, Order, OrderCache, OrderData, OrderStreamEvent};
use leptos::prelude::*;
use uuid::Uuid;

use super::api;

/// Today's calendar day, UTC-normalized like the backend's dates.
pub fn today_string() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[derive(Clone, Copy)]
pub struct OrdersStore {
    pub all_orders: RwSignal<OrderCache>,
    pub selected_day: RwSignal<String>,
    pub is_adding: RwSignal<bool>,
}

impl OrdersStore {
    pub fn new() -> Self {
        Self {
            all_orders: RwSignal::new(OrderCache::new()),
            selected_day: RwSignal::new(today_string()),
            is_adding: RwSignal::new(false),
        }
    }

    /// Make `day` the active day. The day-fetch effect reacts to the signal
    /// change and refreshes the cache entry.
    pub fn select_day(&self, day: String) {
        self.selected_day.set(day);
    }

    /// Fetch a day from the backend and replace its cache entry wholesale.
    /// On failure the previous entry stays untouched and the error is only
    /// logged; the user retries by re-selecting the day.
    pub async fn load_day(&self, day: &str) {
        match api::fetch_orders(day).await {
            Ok(orders) => {
                self.all_orders
                    .update(|cache| cache::replace_day(cache, day, orders));
            }
            Err(e) => log::error!("Failed to fetch orders for {}: {}", day, e),
        }
    }

    /// Submit a new order for the selected day (or the payload's own day,
    /// if it carries one). The cache is not touched: the created order
    /// arrives through the live channel.
    pub async fn add_order(&self, mut data: OrderData) -> Result<(), String> {
        data.date = Some(resolve_date(
            data.date.as_deref(),
            &self.selected_day.get_untracked(),
        ));
        self.is_adding.set(true);
        let result = api::create_order(&data).await;
        self.is_adding.set(false);
        if let Err(e) = &result {
            log::error!("Failed to add order: {}", e);
        }
        result
    }

    /// Submit an edit for an existing order. Like creation, the visible
    /// change comes back over the live channel.
    pub async fn edit_order(&self, id: Uuid, data: OrderData) -> Result<(), String> {
        let result = api::update_order(id, &data).await;
        if let Err(e) = &result {
            log::error!("Failed to edit order {}: {}", id, e);
        }
        result
    }

    /// Request deletion of an order; removal is reflected by the live
    /// channel or by the day's next fetch.
    pub async fn delete_order(&self, id: Uuid) -> Result<(), String> {
        let result = api::delete_order(id).await;
        if let Err(e) = &result {
            log::error!("Failed to delete order {}: {}", id, e);
        }
        result
    }

    /// Reconcile one push event into the cache. Events are handled in
    /// arrival order, synchronously.
    pub fn apply(&self, event: OrderStreamEvent) {
        let today = today_string();
        self.all_orders
            .update(|cache| cache::apply_event(cache, event, &today));
    }

    /// The selected day's orders (tracked).
    pub fn orders_for_selected_day(&self) -> Vec<Order> {
        let day = self.selected_day.get();
        self.all_orders
            .with(|cache| cache.get(&day).cloned().unwrap_or_default())
    }
}

impl Default for OrdersStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the order store.
pub fn use_orders() -> OrdersStore {
    use_context::<OrdersStore>().expect("OrdersStore not found in component tree")
}
