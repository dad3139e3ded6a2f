//! Snapshot Records

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::cart::{Cart, CartLineItem};

/// Cart Record
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CartRecord {
    pub items: Vec<LineItemRecord>,

    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub total: Decimal,
}

/// Stored Cart Record
///
/// The read side of [`CartRecord`]. The total is only compared against the items, so a number
/// outside the decimal range reads as `None` instead of failing the whole snapshot.
#[derive(Debug, Deserialize)]
pub(crate) struct StoredCartRecord {
    pub items: Vec<LineItemRecord>,

    #[serde(deserialize_with = "lenient_decimal")]
    pub total: Option<Decimal>,
}

/// Line Item Record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LineItemRecord {
    pub service_id: String,
    pub maker_id: String,
    pub service_name: String,
    pub maker_name: String,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,

    pub quantity: u32,
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = serde_json::Number::deserialize(deserializer)?.to_string();

    Ok(Decimal::from_str_exact(&text)
        .or_else(|_plain| Decimal::from_scientific(&text))
        .ok())
}

impl From<&Cart> for CartRecord {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.iter().map(LineItemRecord::from).collect(),
            total: cart.total(),
        }
    }
}

impl From<&CartLineItem> for LineItemRecord {
    fn from(item: &CartLineItem) -> Self {
        Self {
            service_id: item.service_id().to_string(),
            maker_id: item.maker_id().to_string(),
            service_name: item.service_name().to_string(),
            maker_name: item.maker_name().to_string(),
            price: item.price(),
            quantity: item.quantity().get(),
        }
    }
}
