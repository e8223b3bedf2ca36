pub mod chart;
pub mod corporate_patterns;
pub mod dashboard;
pub mod filter_panel;
pub mod navbar;
pub mod passenger_trips;
pub mod pickup_hotspots;
pub mod premium_trips;
pub mod status;

pub use dashboard::Dashboard;
