use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single kebab order as stored by the backend.
///
/// The wire format is camelCase JSON; `id` is assigned by the backend and
/// immutable afterwards. `date` is the calendar day (`YYYY-MM-DD`) the order
/// belongs to; a missing date is resolved by the receiving context via
/// [`resolve_date`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub kebab_type: String,
    pub size: String,
    pub sauce: String,
    pub meat_type: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// Order payload without an id, used for creation, edits and bulk import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    pub customer_name: String,
    pub kebab_type: String,
    pub size: String,
    pub sauce: String,
    pub meat_type: String,
    #[serde(default)]
    pub date: Option<String>,
}

impl OrderData {
    /// All five text fields are filled in (whitespace-only counts as blank).
    pub fn is_complete(&self) -> bool {
        !(self.customer_name.trim().is_empty()
            || self.kebab_type.trim().is_empty()
            || self.size.trim().is_empty()
            || self.sauce.trim().is_empty()
            || self.meat_type.trim().is_empty())
    }
}

impl Order {
    /// The editable part of the order.
    pub fn data(&self) -> OrderData {
        OrderData {
            customer_name: self.customer_name.clone(),
            kebab_type: self.kebab_type.clone(),
            size: self.size.clone(),
            sauce: self.sauce.clone(),
            meat_type: self.meat_type.clone(),
            date: self.date.clone(),
        }
    }
}

/// Resolves an optional order date against the context's fallback day.
///
/// Both call sites (event ingestion falling back to "today", submissions
/// falling back to the selected day) go through here so the rule cannot
/// diverge between them. An empty string counts as absent.
pub fn resolve_date(raw: Option<&str>, fallback: &str) -> String {
    match raw {
        Some(day) if !day.is_empty() => day.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> OrderData {
        OrderData {
            customer_name: "Jan".into(),
            kebab_type: "Pita".into(),
            size: "XL".into(),
            sauce: "Ostry".into(),
            meat_type: "Kurczak".into(),
            date: None,
        }
    }

    #[test]
    fn complete_data_passes_validation() {
        assert!(data().is_complete());
    }

    #[test]
    fn blank_field_fails_validation() {
        let mut d = data();
        d.sauce = "   ".into();
        assert!(!d.is_complete());
    }

    #[test]
    fn resolve_date_prefers_explicit_day() {
        assert_eq!(resolve_date(Some("2024-01-05"), "2024-02-01"), "2024-01-05");
        assert_eq!(resolve_date(None, "2024-02-01"), "2024-02-01");
        assert_eq!(resolve_date(Some(""), "2024-02-01"), "2024-02-01");
    }

    #[test]
    fn order_uses_camel_case_on_the_wire() {
        let json = r#"{
            "id": "8f2fbe7e-9175-4a8a-b9e5-74e2f5d3a111",
            "customerName": "Ania",
            "kebabType": "Tortilla",
            "size": "Standard",
            "sauce": "Mieszany",
            "meatType": "Wołowina",
            "date": "2024-01-05"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.customer_name, "Ania");
        assert_eq!(order.date.as_deref(), Some("2024-01-05"));

        let back = serde_json::to_value(&order).unwrap();
        assert!(back.get("customerName").is_some());
        assert!(back.get("customer_name").is_none());
    }

    #[test]
    fn missing_date_deserializes_as_none() {
        let json = r#"{
            "id": "8f2fbe7e-9175-4a8a-b9e5-74e2f5d3a111",
            "customerName": "Ania",
            "kebabType": "Tortilla",
            "size": "Standard",
            "sauce": "Mieszany",
            "meatType": "Wołowina"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.date, None);
    }
}
