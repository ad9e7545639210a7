//! Day-keyed order cache and its reconciliation rules.
//!
//! The cache is the client's single source of truth: a map from calendar day
//! to that day's order list. A fetch replaces a day's entry wholesale; live
//! push events merge into it. Both paths are pure functions over the map so
//! they can be exercised without a browser or a network.

use std::collections::BTreeMap;

use super::aggregate::{resolve_date, Order};
use super::events::OrderStreamEvent;

/// Map from `YYYY-MM-DD` to that day's orders. Entries are created lazily on
/// first fetch or first event referencing the day and never evicted.
pub type OrderCache = BTreeMap<String, Vec<Order>>;

/// Applies a completed day fetch: the day's entry is replaced as a whole,
/// keeping the server-provided order. A fetch that lands after a live event
/// for the same day intentionally discards that event's effect.
pub fn replace_day(cache: &mut OrderCache, day: &str, orders: Vec<Order>) {
    cache.insert(day.to_string(), orders);
}

/// Merges one push event into the cache. Events without a date are
/// attributed to `today`, not the selected day, so that same-day orders stay
/// visible when the two coincide.
pub fn apply_event(cache: &mut OrderCache, event: OrderStreamEvent, today: &str) {
    match event {
        OrderStreamEvent::NewOrder(order) => {
            let day = resolve_date(order.date.as_deref(), today);
            let entry = cache.entry(day).or_default();
            entry.push(order);
            sort_by_customer(entry);
        }
        OrderStreamEvent::UpdateOrder(order) => {
            let day = resolve_date(order.date.as_deref(), today);
            let entry = cache.entry(day).or_default();
            if let Some(slot) = entry.iter_mut().find(|o| o.id == order.id) {
                *slot = order;
            }
            sort_by_customer(entry);
        }
        OrderStreamEvent::DeleteOrder(removed) => {
            let day = resolve_date(removed.date.as_deref(), today);
            let entry = cache.entry(day).or_default();
            entry.retain(|o| o.id != removed.id);
        }
    }
}

/// Case-insensitive ordering by customer name. Stable, so equal names keep
/// their relative order.
fn sort_by_customer(orders: &mut [Order]) {
    orders.sort_by(|a, b| {
        a.customer_name
            .to_lowercase()
            .cmp(&b.customer_name.to_lowercase())
    });
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::super::events::OrderRemoved;
    use super::*;

    fn order(name: &str, date: Option<&str>) -> Order {
        Order {
            id: Uuid::new_v4(),
            customer_name: name.into(),
            kebab_type: "Pita".into(),
            size: "Standard".into(),
            sauce: "Mieszany".into(),
            meat_type: "Kurczak".into(),
            date: date.map(str::to_string),
        }
    }

    fn names(cache: &OrderCache, day: &str) -> Vec<String> {
        cache[day].iter().map(|o| o.customer_name.clone()).collect()
    }

    #[test]
    fn new_order_keeps_day_sorted_by_customer() {
        let mut cache = OrderCache::new();
        for name in ["zofia", "Adam", "Marek"] {
            apply_event(
                &mut cache,
                OrderStreamEvent::NewOrder(order(name, Some("2024-01-05"))),
                "2024-01-05",
            );
        }
        assert_eq!(names(&cache, "2024-01-05"), ["Adam", "Marek", "zofia"]);
    }

    #[test]
    fn update_replaces_matching_id_and_resorts() {
        let mut cache = OrderCache::new();
        let mut target = order("Adam", Some("2024-01-05"));
        replace_day(
            &mut cache,
            "2024-01-05",
            vec![target.clone(), order("Marek", Some("2024-01-05"))],
        );

        target.customer_name = "Zofia".into();
        target.sauce = "Ostry".into();
        apply_event(
            &mut cache,
            OrderStreamEvent::UpdateOrder(target.clone()),
            "2024-01-05",
        );

        assert_eq!(names(&cache, "2024-01-05"), ["Marek", "Zofia"]);
        assert_eq!(cache["2024-01-05"][1].sauce, "Ostry");
    }

    #[test]
    fn update_for_unknown_id_is_a_noop_apart_from_sorting() {
        let mut cache = OrderCache::new();
        replace_day(
            &mut cache,
            "2024-01-05",
            vec![order("Marek", Some("2024-01-05")), order("Adam", Some("2024-01-05"))],
        );
        apply_event(
            &mut cache,
            OrderStreamEvent::UpdateOrder(order("Ktoś", Some("2024-01-05"))),
            "2024-01-05",
        );
        assert_eq!(names(&cache, "2024-01-05"), ["Adam", "Marek"]);
    }

    #[test]
    fn delete_removes_matching_id() {
        let mut cache = OrderCache::new();
        let victim = order("Adam", Some("2024-01-05"));
        replace_day(
            &mut cache,
            "2024-01-05",
            vec![victim.clone(), order("Marek", Some("2024-01-05"))],
        );
        apply_event(
            &mut cache,
            OrderStreamEvent::DeleteOrder(OrderRemoved {
                id: victim.id,
                date: Some("2024-01-05".into()),
            }),
            "2024-01-05",
        );
        assert_eq!(names(&cache, "2024-01-05"), ["Marek"]);
    }

    #[test]
    fn delete_of_absent_id_leaves_sequence_unchanged() {
        let mut cache = OrderCache::new();
        replace_day(
            &mut cache,
            "2024-01-05",
            vec![order("Adam", Some("2024-01-05")), order("Marek", Some("2024-01-05"))],
        );
        let before = cache.clone();
        apply_event(
            &mut cache,
            OrderStreamEvent::DeleteOrder(OrderRemoved {
                id: Uuid::new_v4(),
                date: Some("2024-01-05".into()),
            }),
            "2024-01-05",
        );
        assert_eq!(cache, before);
    }

    #[test]
    fn event_without_date_lands_on_today() {
        let mut cache = OrderCache::new();
        apply_event(
            &mut cache,
            OrderStreamEvent::NewOrder(order("Adam", None)),
            "2024-03-01",
        );
        assert_eq!(names(&cache, "2024-03-01"), ["Adam"]);
    }

    #[test]
    fn fetch_replaces_wholesale_while_events_merge() {
        let mut cache = OrderCache::new();
        let a = order("Adam", Some("2024-01-05"));
        let b = order("Marek", Some("2024-01-05"));

        replace_day(&mut cache, "2024-01-05", vec![a.clone(), b.clone()]);

        let c = order("Basia", Some("2024-01-05"));
        apply_event(
            &mut cache,
            OrderStreamEvent::NewOrder(c.clone()),
            "2024-01-05",
        );
        assert_eq!(names(&cache, "2024-01-05"), ["Adam", "Basia", "Marek"]);

        // A later fetch wins over previously merged events.
        replace_day(&mut cache, "2024-01-05", vec![a.clone()]);
        assert_eq!(names(&cache, "2024-01-05"), ["Adam"]);
    }

    #[test]
    fn initial_fetch_preserves_server_order() {
        let mut cache = OrderCache::new();
        replace_day(
            &mut cache,
            "2024-01-05",
            vec![order("zofia", Some("2024-01-05")), order("Adam", Some("2024-01-05"))],
        );
        assert_eq!(names(&cache, "2024-01-05"), ["zofia", "Adam"]);
    }
}
