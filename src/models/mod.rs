pub mod chart_config;
pub mod chart_id;
pub mod error;
pub mod filters;
pub mod trips;
