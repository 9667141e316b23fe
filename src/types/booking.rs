use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::InvalidEnumValue;

/// Length of the first-month-free promotion granted on every booking.
pub const FREE_MONTH_DAYS: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    /// Email of the owning user.
    pub email: String,
    pub property_id: String,
    pub property_title: String,
    pub property_price: i64,
    pub tenant_name: String,
    pub tenant_phone: String,
    pub tenant_address: String,
    pub aadhaar_number: String,
    pub booking_date: DateTime<Utc>,
    pub free_month_end_date: DateTime<Utc>,
    pub status: BookingStatus,
    pub meal_preference: Option<String>,
    /// Free-form per-day meal plan attached by the meals page.
    pub meals: Option<serde_json::Value>,
    pub updated_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Booking {
    pub fn new(email: &str, draft: BookingDraft) -> Self {
        let booking_date = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.to_owned(),
            property_id: draft.property_id,
            property_title: draft.property_title,
            property_price: draft.property_price,
            tenant_name: draft.tenant_name,
            tenant_phone: draft.tenant_phone,
            tenant_address: draft.tenant_address,
            aadhaar_number: draft.aadhaar_number,
            booking_date,
            free_month_end_date: booking_date + Duration::days(FREE_MONTH_DAYS),
            status: BookingStatus::Confirmed,
            meal_preference: draft.meal_preference,
            meals: None,
            updated_at: None,
            cancelled_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookingDraft {
    pub property_id: String,
    pub property_title: String,
    pub property_price: i64,
    pub tenant_name: String,
    pub tenant_phone: String,
    pub tenant_address: String,
    pub aadhaar_number: String,
    pub meal_preference: Option<String>,
}

/// Booking lifecycle is append-only forward: a confirmed booking may become
/// cancelled, a cancelled booking never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(InvalidEnumValue {
                kind: "booking_status",
                value: other.to_owned(),
            }),
        }
    }
}
