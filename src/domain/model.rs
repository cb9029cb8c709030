use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// A bookable offering. Field names on the wire follow the catalog feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: u64,
}

impl Service {
    pub fn new(id: u32, name: impl Into<String>, price: u64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// A scheduled appointment. `service_name` and `price` are copied from the
/// catalog when the booking is made and never follow later catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    #[serde(rename = "cliente")]
    pub client_name: String,
    #[serde(rename = "servicio")]
    pub service_name: String,
    #[serde(rename = "precio")]
    pub price: u64,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "hora", with = "clock_time")]
    pub time: NaiveTime,
}

/// Raw form input, unparsed. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub client_name: String,
    pub service_id: String,
    pub date: String,
    pub time: String,
}

impl BookingForm {
    pub fn new(
        client_name: impl Into<String>,
        service_id: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            service_id: service_id.into(),
            date: date.into(),
            time: time.into(),
        }
    }
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Accepts `HH:MM` and `HH:MM:SS`.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

pub fn format_time(time: &NaiveTime) -> String {
    if time.second() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}

/// Stored bookings keep the short `HH:MM` form the booking form produces.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid time of day: {raw}")))
    }
}
