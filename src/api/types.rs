//! Wire types of the HBnB API.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Body of `GET /api/v1/status/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    /// The API reports itself healthy only with the literal `"OK"`.
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

/// A rentable listing returned by places search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default = "zero", deserialize_with = "null_as_zero")]
    pub price_by_night: Number,
    #[serde(default = "zero", deserialize_with = "null_as_zero")]
    pub max_guest: Number,
    #[serde(default = "zero", deserialize_with = "null_as_zero")]
    pub number_rooms: Number,
    #[serde(default = "zero", deserialize_with = "null_as_zero")]
    pub number_bathrooms: Number,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// A state listed in the locations filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: String,
    pub name: String,
}

/// A city listed under its state in the locations filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub state_id: String,
}

/// An amenity listed in the amenities filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: String,
    pub name: String,
}

/// Body of `GET /api/v1/stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub amenities: u64,
    pub cities: u64,
    pub places: u64,
    pub reviews: u64,
    pub states: u64,
    pub users: u64,
}

fn zero() -> Number {
    Number::from(0u8)
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<Number, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Number>::deserialize(deserializer)?.unwrap_or_else(zero))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ok_is_exact() {
        assert!(StatusResponse { status: "OK".into() }.is_ok());
        assert!(!StatusResponse { status: "ok".into() }.is_ok());
        assert!(!StatusResponse { status: "DOWN".into() }.is_ok());
    }

    #[test]
    fn test_place_tolerates_extra_and_missing_fields() {
        let place: Place = serde_json::from_str(
            r#"{
                "__class__": "Place",
                "id": "p-1",
                "city_id": "c-1",
                "name": "Loft",
                "price_by_night": 120,
                "max_guest": 1,
                "description": null
            }"#,
        )
        .unwrap();

        assert_eq!(place.id.as_deref(), Some("p-1"));
        assert_eq!(place.max_guest, Number::from(1u8));
        assert_eq!(place.number_rooms, Number::from(0u8));
        assert_eq!(place.description, "");
    }

    #[test]
    fn test_place_accepts_fractional_and_null_numbers() {
        let place: Place = serde_json::from_str(
            r#"{"name": "Nook", "price_by_night": 99.5, "max_guest": null, "number_rooms": 2}"#,
        )
        .unwrap();

        assert_eq!(place.price_by_night.as_f64(), Some(99.5));
        assert_eq!(place.max_guest, Number::from(0u8));
        assert_eq!(place.number_rooms, Number::from(2u8));
        assert_eq!(place.number_bathrooms, Number::from(0u8));
    }

    #[test]
    fn test_stats_defaults_missing_counts() {
        let stats: Stats = serde_json::from_str(r#"{"places": 4, "states": 2}"#).unwrap();
        assert_eq!(stats.places, 4);
        assert_eq!(stats.users, 0);
    }
}
