use chrono::NaiveDateTime;
use serde::Deserialize;

/// A pickup → dropoff route that occurs often enough to look like a regular commute.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RoutePattern {
    pub pickup_location_id: i64,
    pub dropoff_location_id: i64,
    #[serde(default)]
    pub pickup_zone: Option<String>,
    #[serde(default)]
    pub dropoff_zone: Option<String>,
    pub trip_count: u64,
    #[serde(default)]
    pub avg_fare: Option<f64>,
}

impl RoutePattern {
    /// Route label, preferring zone names over numeric location ids.
    pub fn label(&self) -> String {
        format!(
            "{} → {}",
            location_label(self.pickup_zone.as_deref(), self.pickup_location_id),
            location_label(self.dropoff_zone.as_deref(), self.dropoff_location_id)
        )
    }
}

/// Trip volume for one pickup location over the requested day window.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PickupHotspot {
    pub pickup_location_id: i64,
    #[serde(default)]
    pub pickup_zone: Option<String>,
    pub trip_count: u64,
    #[serde(default)]
    pub trip_id: Option<i64>,
}

impl PickupHotspot {
    pub fn label(&self) -> String {
        location_label(self.pickup_zone.as_deref(), self.pickup_location_id)
    }
}

/// A single trip as returned by `/trips/premium` and `/customers/{n}/trips`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TripRecord {
    pub trip_id: i64,
    #[serde(default)]
    pub pickup_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub dropoff_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub passenger_count: Option<u32>,
    #[serde(default)]
    pub trip_distance: f64,
    pub fare_amount: f64,
    #[serde(default)]
    pub pickup_location_id: Option<i64>,
    #[serde(default)]
    pub dropoff_location_id: Option<i64>,
    #[serde(default)]
    pub pickup_zone: Option<String>,
    #[serde(default)]
    pub dropoff_zone: Option<String>,
}

impl TripRecord {
    pub fn label(&self) -> String {
        format!("Trip {}", self.trip_id)
    }
}

fn location_label(zone: Option<&str>, id: i64) -> String {
    match zone {
        Some(zone) if !zone.trim().is_empty() => zone.to_string(),
        _ => id.to_string(),
    }
}
