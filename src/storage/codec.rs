//! Collection codec
//!
//! Converts a collection of records to a list document and back. Field names
//! come from the serde attributes on the models (camelCase). Decoding is
//! strict: a missing key or a wrong primitive type fails the whole document.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::TrackerError;

/// Encode records as a JSON list document, preserving order
pub fn encode_collection<T: Serialize>(records: &[T]) -> Result<Value, TrackerError> {
    records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
        .map_err(|e| TrackerError::Json(format!("Failed to encode records: {}", e)))
}

/// Decode a JSON list document into records, preserving order
pub fn decode_collection<T: DeserializeOwned>(document: Value) -> Result<Vec<T>, TrackerError> {
    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(TrackerError::Json(format!(
                "Expected a list document, found {}",
                kind_of(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|e| TrackerError::Json(format!("Record {}: {}", index, e)))
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Category, CategoryId, Transaction, TransactionId};
    use serde_json::json;

    #[test]
    fn test_transaction_field_names() {
        let txn = Transaction::with_id(
            TransactionId::new(1),
            "2025-05-08",
            45.67,
            "Weekly groceries",
            CategoryId::new(1),
            false,
        );
        let doc = encode_collection(&[txn]).unwrap();
        assert_eq!(
            doc,
            json!([{
                "id": 1,
                "date": "2025-05-08",
                "amount": 45.67,
                "description": "Weekly groceries",
                "categoryId": 1,
                "isIncome": false
            }])
        );
    }

    #[test]
    fn test_category_and_budget_field_names() {
        let cat = Category::with_id(CategoryId::new(3), "Fun", "Movies", "#F44336");
        assert_eq!(
            encode_collection(&[cat]).unwrap(),
            json!([{"id": 3, "name": "Fun", "description": "Movies", "color": "#F44336"}])
        );

        let budget = Budget::new(CategoryId::new(3), "2025-05", 200.0);
        assert_eq!(
            encode_collection(&[budget]).unwrap(),
            json!([{"categoryId": 3, "monthYear": "2025-05", "allocatedAmount": 200.0}])
        );
    }

    #[test]
    fn test_decode_ignores_key_order() {
        let doc = json!([{"color": "#fff", "name": "A", "id": 9, "description": ""}]);
        let cats: Vec<Category> = decode_collection(doc).unwrap();
        assert_eq!(cats[0].id, CategoryId::new(9));
        assert_eq!(cats[0].name, "A");
    }

    #[test]
    fn test_decode_missing_key_fails() {
        let doc = json!([{"id": 1, "name": "A", "description": ""}]);
        let err = decode_collection::<Category>(doc).unwrap_err();
        assert!(err.to_string().contains("color"));
    }

    #[test]
    fn test_decode_wrong_type_fails() {
        let doc = json!([{"categoryId": "2", "monthYear": "2025-05", "allocatedAmount": 1.0}]);
        assert!(decode_collection::<Budget>(doc).is_err());

        let doc = json!([{
            "id": 1, "date": "2025-05-01", "amount": 1.0,
            "description": "", "categoryId": 1, "isIncome": "yes"
        }]);
        assert!(decode_collection::<Transaction>(doc).is_err());
    }

    #[test]
    fn test_decode_integer_amount() {
        let doc = json!([{"categoryId": 2, "monthYear": "2025-05", "allocatedAmount": 300}]);
        let budgets: Vec<Budget> = decode_collection(doc).unwrap();
        assert_eq!(budgets[0].allocated_amount, 300.0);
    }

    #[test]
    fn test_decode_non_list_fails() {
        let err = decode_collection::<Budget>(json!({"a": 1})).unwrap_err();
        assert!(err.to_string().contains("an object"));
    }
}
