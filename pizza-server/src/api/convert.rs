//! 类型转换模块
//!
//! Stored documents carry their key under `_id`; clients see it as `id`.

use serde_json::Value;

use crate::db::{Document, ID_FIELD};

/// Rename `_id` to a string `id`; `None` stays `None`
pub fn to_serializable(doc: Option<Document>) -> Option<Value> {
    doc.map(|mut doc| {
        if let Some(id) = doc.remove(ID_FIELD) {
            let id = match id {
                Value::String(s) => Value::String(s),
                other => Value::String(other.to_string()),
            };
            doc.insert("id".to_string(), id);
        }
        Value::Object(doc)
    })
}

pub fn to_serializable_all(docs: Vec<Document>) -> Vec<Value> {
    docs.into_iter()
        .filter_map(|doc| to_serializable(Some(doc)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_id_renamed() {
        let out = to_serializable(Some(doc(json!({ "_id": "abc", "name": "x" })))).unwrap();
        assert_eq!(out, json!({ "id": "abc", "name": "x" }));
    }

    #[test]
    fn test_none_passthrough() {
        assert!(to_serializable(None).is_none());
    }

    #[test]
    fn test_non_string_id_stringified() {
        let out = to_serializable(Some(doc(json!({ "_id": 42 })))).unwrap();
        assert_eq!(out["id"], json!("42"));
    }

    #[test]
    fn test_document_without_id_untouched() {
        let out = to_serializable(Some(doc(json!({ "name": "x" })))).unwrap();
        assert_eq!(out, json!({ "name": "x" }));
    }
}
