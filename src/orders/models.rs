//! Order Models

use std::fmt;

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

use crate::{catalog::ProductId, delivery::DeliveryWindow};

/// Order identifier assigned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Order submission payload.
///
/// `good_ids` is a deduplicated set of identifiers; the order API does not
/// take quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub full_name: String,
    pub email: String,
    /// Normalized phone number, `+7XXXXXXXXXX`.
    pub phone: String,
    /// Newsletter opt-in; `0`/`1` on the wire.
    #[serde(with = "subscribe_flag")]
    pub subscribe: bool,
    pub delivery_address: String,
    /// `dd.mm.yyyy` on the wire.
    #[serde(with = "wire_date")]
    pub delivery_date: Date,
    pub delivery_interval: DeliveryWindow,
    #[serde(default)]
    pub comment: String,
    pub good_ids: Vec<ProductId>,
}

/// Order record as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(with = "subscribe_flag")]
    pub subscribe: bool,
    pub delivery_address: String,
    #[serde(with = "wire_date")]
    pub delivery_date: Date,
    pub delivery_interval: DeliveryWindow,
    #[serde(default)]
    pub comment: String,
    pub good_ids: Vec<ProductId>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// Editable fields of an existing order; the goods list is fixed once
/// submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(with = "subscribe_flag")]
    pub subscribe: bool,
    pub delivery_address: String,
    #[serde(with = "wire_date")]
    pub delivery_date: Date,
    pub delivery_interval: DeliveryWindow,
    #[serde(default)]
    pub comment: String,
}

/// The API writes the opt-in flag as `0`/`1` but some responses carry a
/// boolean; accept both.
mod subscribe_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Flag {
            Bool(bool),
            Int(u64),
        }

        Ok(match Flag::deserialize(deserializer)? {
            Flag::Bool(value) => value,
            Flag::Int(value) => value != 0,
        })
    }
}

/// Delivery dates travel as `dd.mm.yyyy`; tolerate ISO dates on the way in.
mod wire_date {
    use jiff::civil::Date;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    const FORMAT: &str = "%d.%m.%Y";

    pub fn serialize<S: Serializer>(value: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.strftime(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;

        Date::strptime(FORMAT, &raw)
            .or_else(|_| raw.parse())
            .map_err(D::Error::custom)
    }
}
