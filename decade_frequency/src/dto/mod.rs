pub mod decade_count_map;
pub mod dpla_count_result;
pub mod dpla_item_query;
pub mod dpla_raw_response;
pub mod frequency_report;
pub mod histogram_plan;
