pub mod chart_service;
pub mod frequency_service;
