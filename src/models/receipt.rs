use serde::{Deserialize, Deserializer, Serialize};

/// Receipt as submitted to `POST /receipts/process`
///
/// Every field defaults to empty when absent or `null` so that an incomplete
/// body reaches validation and is reported as missing fields instead of
/// failing to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default, deserialize_with = "null_as_default")]
    pub retailer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub purchase_date: String,  // YYYY-MM-DD
    #[serde(default, deserialize_with = "null_as_default")]
    pub purchase_time: String,  // HH:MM, 24-hour clock
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: String,  // Decimal string, kept verbatim for suffix checks
}

/// One line entry of a receipt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
