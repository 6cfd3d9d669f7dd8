pub mod chart_config;
pub mod dpla_config;
pub mod search_config;
pub mod total_config;
