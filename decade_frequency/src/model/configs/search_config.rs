use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct SearchConfig {
    pub term: String,
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    /* exclusive */
    #[serde(default = "default_end_year")]
    pub end_year: i32,
}

fn default_start_year() -> i32 {
    1800
}

fn default_end_year() -> i32 {
    2010
}
