pub mod use_active_chart;
pub mod use_fetch;
pub mod use_filters;
