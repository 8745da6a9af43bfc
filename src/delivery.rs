//! Delivery pricing.

use std::fmt;

use jiff::civil::{Date, Weekday};
use serde::{Deserialize, Serialize};

/// Base cost of any delivery, in minor currency units.
const BASE_COST: u64 = 200;

/// Added on Saturday and Sunday.
const WEEKEND_SURCHARGE: u64 = 300;

/// Added for the evening window on weekdays.
const EVENING_SURCHARGE: u64 = 200;

/// Delivery time window offered by the storefront.
///
/// Serializes as the interval string the order API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryWindow {
    #[serde(rename = "08:00-12:00")]
    Morning,
    #[serde(rename = "12:00-14:00")]
    Midday,
    #[serde(rename = "14:00-18:00")]
    Afternoon,
    #[serde(rename = "18:00-22:00")]
    Evening,
}

impl DeliveryWindow {
    /// The interval in wire form, e.g. `"18:00-22:00"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "08:00-12:00",
            Self::Midday => "12:00-14:00",
            Self::Afternoon => "14:00-18:00",
            Self::Evening => "18:00-22:00",
        }
    }
}

impl fmt::Display for DeliveryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cost of delivering on the given date in the given window.
///
/// Weekends carry a flat surcharge; on weekdays only the evening window
/// costs extra.
pub fn delivery_cost(date: Date, window: DeliveryWindow) -> u64 {
    let weekend = matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday);

    let mut cost = BASE_COST;

    if weekend {
        cost += WEEKEND_SURCHARGE;
    } else if window == DeliveryWindow::Evening {
        cost += EVENING_SURCHARGE;
    }

    cost
}
