//! Declarative chart descriptions and the per-dataset derivations that build them.
//!
//! Derivations only map fields: one category or point per input record, in input
//! order. Nothing is aggregated, sorted or filtered on the client.

use super::trips::{PickupHotspot, RoutePattern, TripRecord};

/// Everything needed to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    pub x_axis_name: String,
    pub y_axis_name: String,
    /// ECharts tooltip template (`{b}`, `{c0}`, ...).
    pub tooltip: String,
    pub series: SeriesConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeriesConfig {
    /// Vertical bars, categories along the x axis.
    Column(CategorySeries),
    /// Horizontal bars, categories along the y axis.
    Bar(CategorySeries),
    Scatter(ScatterSeries),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySeries {
    pub name: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub overlay: Option<OverlaySeries>,
}

/// Line drawn over a category series against its own value axis.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySeries {
    pub name: String,
    pub axis_name: String,
    /// `None` leaves a gap at that category.
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl ChartConfig {
    /// Number of categories or points.
    pub fn len(&self) -> usize {
        match &self.series {
            SeriesConfig::Column(series) | SeriesConfig::Bar(series) => series.categories.len(),
            SeriesConfig::Scatter(series) => series.points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Category labels, empty for scatter charts.
    pub fn categories(&self) -> &[String] {
        match &self.series {
            SeriesConfig::Column(series) | SeriesConfig::Bar(series) => &series.categories,
            SeriesConfig::Scatter(_) => &[],
        }
    }
}

pub fn corporate_patterns_chart(routes: &[RoutePattern]) -> ChartConfig {
    ChartConfig {
        title: "Top Corporate Trip Patterns".to_string(),
        x_axis_name: "Route".to_string(),
        y_axis_name: "Trips".to_string(),
        tooltip: "{b}<br/><b>{c0}</b> trips<br/>Avg Fare: $ {c1}".to_string(),
        series: SeriesConfig::Column(CategorySeries {
            name: "Trips".to_string(),
            categories: routes.iter().map(RoutePattern::label).collect(),
            values: routes.iter().map(|r| r.trip_count as f64).collect(),
            overlay: Some(OverlaySeries {
                name: "Avg Fare".to_string(),
                axis_name: "Avg Fare ($)".to_string(),
                values: routes
                    .iter()
                    .map(|r| r.avg_fare.map(round_cents))
                    .collect(),
            }),
        }),
    }
}

pub fn pickup_hotspots_chart(hotspots: &[PickupHotspot], days: u32) -> ChartConfig {
    ChartConfig {
        title: format!("Top Pickup Hotspots (last {days} days)"),
        x_axis_name: "Trip Count".to_string(),
        y_axis_name: "Pickup Location".to_string(),
        tooltip: "{b}<br/><b>{c0}</b> trips".to_string(),
        series: SeriesConfig::Bar(CategorySeries {
            name: "Trips".to_string(),
            categories: hotspots.iter().map(PickupHotspot::label).collect(),
            values: hotspots.iter().map(|h| h.trip_count as f64).collect(),
            overlay: None,
        }),
    }
}

pub fn premium_trips_chart(trips: &[TripRecord]) -> ChartConfig {
    ChartConfig {
        title: "Premium Trips: Fare vs Distance".to_string(),
        x_axis_name: "Distance (miles)".to_string(),
        y_axis_name: "Fare ($)".to_string(),
        tooltip: "{b}<br/>Distance (mi), Fare ($): {c}".to_string(),
        series: SeriesConfig::Scatter(ScatterSeries {
            name: "Trips".to_string(),
            points: trips
                .iter()
                .map(|t| ScatterPoint {
                    x: t.trip_distance,
                    y: t.fare_amount,
                    label: t.label(),
                })
                .collect(),
        }),
    }
}

pub fn passenger_trips_chart(trips: &[TripRecord], passenger_count: u32) -> ChartConfig {
    let noun = if passenger_count == 1 { "Passenger" } else { "Passengers" };
    ChartConfig {
        title: format!("Trips with {passenger_count} {noun}: Fare per Trip"),
        x_axis_name: "Trip".to_string(),
        y_axis_name: "Fare ($)".to_string(),
        tooltip: "{b}<br/>Fare: $ {c0}".to_string(),
        series: SeriesConfig::Column(CategorySeries {
            name: "Fare".to_string(),
            categories: trips.iter().map(TripRecord::label).collect(),
            values: trips.iter().map(|t| t.fare_amount).collect(),
            overlay: None,
        }),
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(pickup: i64, dropoff: i64, trips: u64, fare: Option<f64>) -> RoutePattern {
        RoutePattern {
            pickup_location_id: pickup,
            dropoff_location_id: dropoff,
            pickup_zone: None,
            dropoff_zone: None,
            trip_count: trips,
            avg_fare: fare,
        }
    }

    #[test]
    fn test_corporate_overlay_keeps_gaps() {
        let config = corporate_patterns_chart(&[
            route(1, 2, 30, Some(12.346)),
            route(3, 4, 20, None),
        ]);

        let SeriesConfig::Column(series) = &config.series else {
            panic!("expected column series");
        };
        let overlay = series.overlay.as_ref().unwrap();
        assert_eq!(overlay.values, vec![Some(12.35), None]);
        assert_eq!(series.categories, vec!["1 → 2", "3 → 4"]);
        assert_eq!(series.values, vec![30.0, 20.0]);
    }

    #[test]
    fn test_empty_input_gives_empty_config() {
        assert!(corporate_patterns_chart(&[]).is_empty());
        assert!(premium_trips_chart(&[]).is_empty());
        assert!(pickup_hotspots_chart(&[], 30).categories().is_empty());
    }

    #[test]
    fn test_passenger_title_pluralises() {
        assert_eq!(
            passenger_trips_chart(&[], 1).title,
            "Trips with 1 Passenger: Fare per Trip"
        );
        assert!(passenger_trips_chart(&[], 3).title.contains("3 Passengers"));
    }
}
