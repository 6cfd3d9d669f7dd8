pub mod chart_service_impl;
pub mod frequency_service_impl;
