//! Validating JSON extractor
//!
//! Body rejections and schema violations both surface as [`AppError`], so a
//! client always receives the standard error envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use shared::error::AppError;

/// `Json<T>` that also runs `T::validate()`
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        if let Err(errors) = value.validate() {
            let fields = field_errors(&errors);
            tracing::debug!(?fields, "Request body failed validation");
            return Err(AppError::validation("Request body failed validation")
                .with_detail("fields", Value::Array(fields)));
        }
        Ok(Self(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(e) => AppError::validation(e.body_text()),
        JsonRejection::JsonSyntaxError(e) => AppError::validation(e.body_text()),
        other => AppError::invalid_request(other.body_text()),
    }
}

/// Flatten nested validator output into `{field, code}` entries
fn field_errors(errors: &ValidationErrors) -> Vec<Value> {
    let mut out = Vec::new();
    collect(errors, "", &mut out);
    out
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<Value>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                for err in list {
                    out.push(json!({ "field": path, "code": err.code }));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Order;

    #[test]
    fn test_nested_paths() {
        let order: Order = serde_json::from_value(json!({
            "customer": { "name": "Ada", "phone": "555-0100", "address": "1 Loop Rd" },
            "items": [{
                "pizza_id": "p",
                "name": "Margherita",
                "size": "Large",
                "unit_price": -1.0,
                "quantity": 0
            }],
            "subtotal": 25.0,
            "delivery_fee": 2.5,
            "total": -27.5
        }))
        .unwrap();

        let errors = order.validate().unwrap_err();
        let fields: Vec<String> = field_errors(&errors)
            .iter()
            .filter_map(|v| v["field"].as_str().map(String::from))
            .collect();
        assert!(fields.contains(&"total".to_string()));
        assert!(fields.contains(&"items[0].quantity".to_string()));
        assert!(fields.contains(&"items[0].unit_price".to_string()));
    }
}
