//! Order Model

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Order lifecycle status
///
/// Stored with the order; no endpoint transitions it yet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

/// Delivery contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    /// Pizza reference (String ID, existence not checked)
    pub pizza_id: String,
    pub name: String,
    /// Free-form size label
    pub size: String,
    #[validate(range(min = 0.0))]
    pub unit_price: f64,
    /// Whole number; `2.0` is read as `2`
    #[serde(deserialize_with = "integral")]
    #[validate(range(min = 1))]
    pub quantity: i64,
    #[serde(default)]
    pub image: Option<String>,
}

fn integral<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
    }

    match Number::deserialize(deserializer)? {
        Number::Int(n) => Ok(n),
        Number::Float(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(f as i64)
        }
        Number::Float(f) => Err(serde::de::Error::custom(format!(
            "expected a whole number, got {f}"
        ))),
    }
}

/// Order entity (collection `order`)
///
/// Totals are caller-supplied and stored as-is; they are not reconciled
/// against the items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Order {
    #[validate(nested)]
    pub customer: CustomerInfo,
    #[validate(nested)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub notes: Option<String>,
    #[validate(range(min = 0.0))]
    pub subtotal: f64,
    #[validate(range(min = 0.0))]
    pub delivery_fee: f64,
    #[validate(range(min = 0.0))]
    pub total: f64,
    #[serde(default)]
    pub status: OrderStatus,
}

/// Response of order creation
///
/// `status` is the acknowledgement `"received"`, not the stored
/// [`OrderStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub id: String,
    pub status: String,
}

impl OrderReceipt {
    pub const RECEIVED: &'static str = "received";

    pub fn received(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: Self::RECEIVED.to_string(),
        }
    }
}
