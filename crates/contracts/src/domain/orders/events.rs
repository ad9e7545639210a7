use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::aggregate::Order;

/// SSE event names emitted by the backend on `/api/orders/stream`.
pub const NEW_ORDER: &str = "new_order";
pub const UPDATE_ORDER: &str = "update_order";
pub const DELETE_ORDER: &str = "delete_order";

/// Payload of a `delete_order` push event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRemoved {
    pub id: Uuid,
    #[serde(default)]
    pub date: Option<String>,
}

/// One notification from the live order channel.
///
/// The discriminator is the SSE event name, not a field inside the JSON
/// payload, so variants are constructed from `(event_name, payload)` pairs
/// via [`OrderStreamEvent::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStreamEvent {
    NewOrder(Order),
    UpdateOrder(Order),
    DeleteOrder(OrderRemoved),
}

impl OrderStreamEvent {
    /// Decodes a named push event. Returns `None` for unknown event names;
    /// payloads that do not match the expected shape are an error.
    pub fn parse(event_name: &str, payload: &str) -> Option<Result<Self, serde_json::Error>> {
        match event_name {
            NEW_ORDER => Some(serde_json::from_str(payload).map(Self::NewOrder)),
            UPDATE_ORDER => Some(serde_json::from_str(payload).map(Self::UpdateOrder)),
            DELETE_ORDER => Some(serde_json::from_str(payload).map(Self::DeleteOrder)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_new_order_payload() {
        let payload = r#"{
            "id": "8f2fbe7e-9175-4a8a-b9e5-74e2f5d3a111",
            "customerName": "Jan",
            "kebabType": "Pita",
            "size": "XL",
            "sauce": "Ostry",
            "meatType": "Kurczak",
            "date": "2024-01-05"
        }"#;
        match OrderStreamEvent::parse(NEW_ORDER, payload) {
            Some(Ok(OrderStreamEvent::NewOrder(order))) => {
                assert_eq!(order.customer_name, "Jan")
            }
            other => panic!("unexpected parse result: {other:?}"),
        }
    }

    #[test]
    fn parses_delete_payload_with_null_date() {
        let payload = r#"{"id": "8f2fbe7e-9175-4a8a-b9e5-74e2f5d3a111", "date": null}"#;
        match OrderStreamEvent::parse(DELETE_ORDER, payload) {
            Some(Ok(OrderStreamEvent::DeleteOrder(removed))) => assert_eq!(removed.date, None),
            other => panic!("unexpected parse result: {other:?}"),
        }
    }

    #[test]
    fn unknown_event_name_is_ignored() {
        assert!(OrderStreamEvent::parse("heartbeat", "{}").is_none());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let result = OrderStreamEvent::parse(NEW_ORDER, "not json").unwrap();
        assert!(result.is_err());
    }
}
