//! Parsing and validation for admin JSON imports.
//!
//! An import document is either a bare array of order payloads or an object
//! with an `orders` array. Anything else is rejected before any entry is
//! applied; there is no partial import.

use serde_json::Value;
use thiserror::Error;

use super::aggregate::OrderData;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("document has no recognizable order array")]
    UnrecognizedShape,
    #[error("document contains no orders")]
    Empty,
}

/// Parses an import document into order payloads.
///
/// Every entry must carry all five order fields; the `date` is optional and
/// is resolved against the selected day by the caller.
pub fn parse_import(text: &str) -> Result<Vec<OrderData>, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("orders") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(ImportError::UnrecognizedShape),
        },
        _ => return Err(ImportError::UnrecognizedShape),
    };
    if entries.is_empty() {
        return Err(ImportError::Empty);
    }
    entries
        .into_iter()
        .map(|entry| serde_json::from_value::<OrderData>(entry).map_err(ImportError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = r#"{
        "customerName": "Jan",
        "kebabType": "Pita",
        "size": "XL",
        "sauce": "Ostry",
        "meatType": "Kurczak"
    }"#;

    #[test]
    fn accepts_bare_array() {
        let orders = parse_import(&format!("[{ENTRY}]")).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].customer_name, "Jan");
        assert_eq!(orders[0].date, None);
    }

    #[test]
    fn accepts_object_with_orders_array() {
        let orders = parse_import(&format!(r#"{{"orders": [{ENTRY}]}}"#)).unwrap();
        assert_eq!(orders.len(), 1);
    }

    #[test]
    fn rejects_empty_order_list() {
        assert!(matches!(
            parse_import(r#"{"orders": []}"#),
            Err(ImportError::Empty)
        ));
        assert!(matches!(parse_import("[]"), Err(ImportError::Empty)));
    }

    #[test]
    fn rejects_unrecognized_shapes() {
        assert!(matches!(
            parse_import("42"),
            Err(ImportError::UnrecognizedShape)
        ));
        assert!(matches!(
            parse_import(r#"{"items": []}"#),
            Err(ImportError::UnrecognizedShape)
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(parse_import("{nope"), Err(ImportError::Json(_))));
    }

    #[test]
    fn rejects_entries_missing_required_fields() {
        let result = parse_import(r#"[{"customerName": "Jan"}]"#);
        assert!(matches!(result, Err(ImportError::Json(_))));
    }

    #[test]
    fn keeps_per_entry_dates() {
        let entry = r#"{
            "customerName": "Jan",
            "kebabType": "Pita",
            "size": "XL",
            "sauce": "Ostry",
            "meatType": "Kurczak",
            "date": "2024-01-05"
        }"#;
        let orders = parse_import(&format!("[{entry}]")).unwrap();
        assert_eq!(orders[0].date.as_deref(), Some("2024-01-05"));
    }
}
