pub mod api_key;
pub mod search_term;
