pub mod configs;
pub mod decade;
pub mod search;
